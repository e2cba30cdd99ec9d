use std::fmt;
use std::str::FromStr;

/// Which of the two conversions to run on every input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Wrap the embedded URScript in a function definition
    Script,
    /// Indented outline of the program tree
    Text,
}

impl OutputFormat {
    /// Suffix appended to the input's base name to form the output file name
    pub fn file_suffix(&self) -> &'static str {
        match self {
            OutputFormat::Script => "_converted.script",
            OutputFormat::Text => "_converted.txt",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Script => f.write_str("script"),
            OutputFormat::Text => f.write_str("txt"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "script" | ".script" => Ok(OutputFormat::Script),
            "txt" | ".txt" | "text" => Ok(OutputFormat::Text),
            other => Err(format!(
                "unknown output format '{}' (expected 'script' or 'txt')",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub format: OutputFormat,
    pub use_color: bool,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Script,
            use_color: true,
            debug: false,
        }
    }
}

//! Error type hierarchy for the URPX converter
//!
//! Every failure is attributed to a single input file so a batch run can
//! report all of them together after attempting every file.

mod conversions;

pub use conversions::IntoConvertError;

use colored::*;
use std::fmt;

/// Location inside a JSON input, as reported by the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Error context providing additional information
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    pub file: Option<String>,
    pub location: Option<SourceLocation>,
    pub note: Option<String>,
    pub help: Option<String>,
}

/// Main error type for the converter
#[derive(Debug, Clone)]
pub struct ConvertError {
    pub kind: ErrorKind,
    pub message: String,
    pub context: ErrorContext,
}

impl ConvertError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Attach the name of the input file this error belongs to
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.context.file = Some(file.into());
        self
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.context.location = Some(location);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.context.note = Some(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.context.help = Some(help.into());
        self
    }

    /// Name of the input file, if known
    pub fn file(&self) -> Option<&str> {
        self.context.file.as_deref()
    }
}

/// Categories of errors that can occur
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    // Input errors
    InvalidJson,
    MalformedInput,

    // IO errors
    IoError,
    FileNotFound,
    OutputFolderNotFound,

    // Caller errors
    MissingInput,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidJson => "invalid JSON",
            ErrorKind::MalformedInput => "malformed input",
            ErrorKind::IoError => "I/O error",
            ErrorKind::FileNotFound => "file not found",
            ErrorKind::OutputFolderNotFound => "output folder not found",
            ErrorKind::MissingInput => "missing input",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(file) = &self.context.file {
            write!(f, "{}: ", file)?;
        }
        match &self.context.location {
            Some(location) => write!(f, "{}: {}: {}", location, self.kind, self.message)?,
            None => write!(f, "{}: {}", self.kind, self.message)?,
        }

        if let Some(note) = &self.context.note {
            write!(f, "\nnote: {}", note)?;
        }

        if let Some(help) = &self.context.help {
            write!(f, "\nhelp: {}", help)?;
        }

        Ok(())
    }
}

impl std::error::Error for ConvertError {}

/// Render an error for the terminal, optionally in colour
pub struct ErrorFormatter<'a> {
    error: &'a ConvertError,
    use_color: bool,
}

impl<'a> ErrorFormatter<'a> {
    pub fn new(error: &'a ConvertError) -> Self {
        Self {
            error,
            use_color: true,
        }
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn format(&self) -> String {
        let mut output = String::new();

        if let Some(file) = &self.error.context.file {
            let location = match &self.error.context.location {
                Some(location) => format!("{}:{}", file, location),
                None => file.clone(),
            };
            output.push_str(&if self.use_color {
                location.bold().to_string()
            } else {
                location
            });
            output.push_str(": ");
        } else if let Some(location) = &self.error.context.location {
            output.push_str(&format!("{}: ", location));
        }

        let error_kind = self.error.kind.to_string();
        let error_label = if self.use_color {
            error_kind.red().bold().to_string()
        } else {
            error_kind
        };
        output.push_str(&format!("{}: {}", error_label, self.error.message));

        if let Some(note) = &self.error.context.note {
            let note_label = if self.use_color {
                "note".blue().bold()
            } else {
                "note".into()
            };
            output.push_str(&format!("\n  {}: {}", note_label, note));
        }

        if let Some(help) = &self.error.context.help {
            let help_label = if self.use_color {
                "help".green().bold()
            } else {
                "help".into()
            };
            output.push_str(&format!("\n  {}: {}", help_label, help));
        }

        output
    }
}

/// Result type for converter operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Collection of per-file errors gathered during a batch run
#[derive(Debug, Default)]
pub struct ErrorCollection {
    errors: Vec<ConvertError>,
}

impl ErrorCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, error: ConvertError) {
        self.errors.push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[ConvertError] {
        &self.errors
    }
}

impl fmt::Display for ErrorCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "error: {}", error)?;
        }

        if !self.is_empty() {
            write!(f, "\n{} error(s)", self.error_count())?;
        }

        Ok(())
    }
}

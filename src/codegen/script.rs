//! URScript generation: the embedded script body wrapped in a function.

use super::utils::{indent, split_lines};
use crate::document::ProgramDocument;

/// Declared at the top of every generated function
const VERIFICATION_GLOBAL: &str = "global _hidden_verificationVariable=0";

pub struct ScriptGenerator {
    output: String,
    indent_level: usize,
}

impl ScriptGenerator {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
        }
    }

    /// Generate the script for `document`. `fallback_name` names the function
    /// when the document carries no application name.
    pub fn generate(mut self, document: &ProgramDocument, fallback_name: &str) -> String {
        let function_name = document.application_name().unwrap_or(fallback_name);

        self.line(&format!("def {}():", function_name));
        self.indent_level += 1;
        self.line(VERIFICATION_GLOBAL);
        for line in split_lines(document.script()) {
            self.line(line);
        }
        self.output
    }

    /// Append one line, separating it from the previous one with `\n`
    fn line(&mut self, text: &str) {
        if !self.output.is_empty() {
            self.output.push('\n');
        }
        indent(&mut self.output, self.indent_level);
        self.output.push_str(text);
    }
}

impl Default for ScriptGenerator {
    fn default() -> Self {
        Self::new()
    }
}

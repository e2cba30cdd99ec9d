//! Caller-side state and the batch driver.
//!
//! A `Session` is what the desktop front end used to keep in globals: the
//! selected inputs, the destination folder and the chosen output format. It is
//! passed explicitly and the conversion functions never see it.

use crate::config::OutputFormat;
use crate::convert::convert_file;
use crate::debug_println;
use crate::error::{ConvertError, ErrorCollection, ErrorFormatter, IntoConvertError, Result};
use colored::*;
use nonempty::NonEmpty;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of program archives picked up from directory inputs
pub const ARCHIVE_EXTENSION: &str = "urpx";

#[derive(Debug, Clone)]
pub struct Session {
    pub inputs: NonEmpty<PathBuf>,
    pub output_folder: PathBuf,
    pub format: OutputFormat,
}

impl Session {
    pub fn new(inputs: NonEmpty<PathBuf>, output_folder: PathBuf, format: OutputFormat) -> Self {
        Self {
            inputs,
            output_folder,
            format,
        }
    }

    /// Build a session from a possibly empty selection
    pub fn from_paths(
        inputs: Vec<PathBuf>,
        output_folder: PathBuf,
        format: OutputFormat,
    ) -> Result<Self> {
        let inputs = NonEmpty::from_vec(inputs).ok_or_else(|| {
            "Select URPX files and output folder."
                .to_string()
                .into_missing_input()
        })?;
        Ok(Self::new(inputs, output_folder, format))
    }

    /// Convert every input, independently. Directories contribute the
    /// `.urpx` files they directly contain, in name order.
    pub fn run(&self) -> BatchReport {
        let mut report = BatchReport::default();

        for input in self.inputs.iter() {
            let files = if input.is_dir() {
                match archives_in(input) {
                    Ok(files) => files,
                    Err(err) => {
                        report.errors.add_error(err.with_file(display_name(input)));
                        continue;
                    }
                }
            } else {
                vec![input.clone()]
            };

            for file in files {
                match convert_file(&file, &self.output_folder, self.format) {
                    Ok(output) => report.converted.push(output),
                    Err(err) => {
                        debug_println!("failed to convert {}: {}", file.display(), err);
                        report.errors.add_error(err.with_file(display_name(&file)));
                    }
                }
            }
        }

        report
    }
}

/// `.urpx` files directly inside `folder`, sorted by name
fn archives_in(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(folder)? {
        let path = entry?.path();
        let is_archive = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case(ARCHIVE_EXTENSION))
            .unwrap_or(false);
        if is_archive && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    debug_println!("{}: found {} archive(s)", folder.display(), files.len());
    Ok(files)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Output files written, in input order
    pub converted: Vec<PathBuf>,
    pub errors: ErrorCollection,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        !self.errors.has_errors()
    }

    /// Errors are reported together if there were any; otherwise the names of
    /// every converted file are listed.
    pub fn render(&self, use_color: bool) -> String {
        let mut lines = Vec::new();
        if self.errors.has_errors() {
            lines.push(heading("Conversion Errors", use_color, |text| text.red()));
            lines.extend(self.errors.errors().iter().map(|error: &ConvertError| {
                ErrorFormatter::new(error).with_color(use_color).format()
            }));
        } else {
            lines.push(heading("Converted files:", use_color, |text| text.green()));
            lines.extend(self.converted.iter().map(|path| display_name(path)));
        }
        lines.join("\n")
    }
}

fn heading(text: &str, use_color: bool, paint: fn(&str) -> ColoredString) -> String {
    if use_color {
        paint(text).bold().to_string()
    } else {
        text.to_string()
    }
}

//! Conversions from library error types into ConvertError

use super::{ConvertError, ErrorKind, SourceLocation};

/// Convert IO failures, keeping the underlying message
impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::FileNotFound,
            _ => ErrorKind::IoError,
        };
        ConvertError::new(kind, err.to_string())
    }
}

/// Convert serde_json failures, keeping the line and column of syntax errors
impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match err.classify() {
            Category::Io => ConvertError::new(ErrorKind::IoError, err.to_string()),
            Category::Data => ConvertError::new(ErrorKind::MalformedInput, err.to_string()),
            Category::Syntax | Category::Eof => {
                // serde_json appends " at line X column Y"; the location is kept separately
                let message = err.to_string();
                let message = match message.rfind(" at line ") {
                    Some(index) => message[..index].to_string(),
                    None => message,
                };
                ConvertError::new(ErrorKind::InvalidJson, message)
                    .with_location(SourceLocation::new(err.line(), err.column()))
            }
        }
    }
}

/// Helper trait for converting String errors to ConvertError
pub trait IntoConvertError {
    fn into_missing_input(self) -> ConvertError;
}

impl IntoConvertError for String {
    fn into_missing_input(self) -> ConvertError {
        ConvertError::new(ErrorKind::MissingInput, self)
    }
}

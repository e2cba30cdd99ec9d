//! Tests for error formatting features

use urpx::error::{ConvertError, ErrorFormatter, ErrorKind, SourceLocation};

#[test]
fn test_error_formatter_plain() {
    let error = ConvertError::new(ErrorKind::InvalidJson, "expected value")
        .with_file("pick.urpx")
        .with_location(SourceLocation::new(4, 12));

    let output = ErrorFormatter::new(&error).with_color(false).format();

    assert_eq!(output, "pick.urpx:4:12: invalid JSON: expected value");
}

#[test]
fn test_error_formatter_with_context() {
    let error = ConvertError::new(ErrorKind::MalformedInput, "top-level value is null")
        .with_file("empty.urpx")
        .with_note("the file was read in full")
        .with_help("a .urpx archive is a single JSON object");

    let output = ErrorFormatter::new(&error).with_color(false).format();

    assert!(output.starts_with("empty.urpx: malformed input: top-level value is null"));
    assert!(output.contains("\n  note: the file was read in full"));
    assert!(output.contains("\n  help: a .urpx archive is a single JSON object"));
}

#[test]
fn test_error_formatter_with_color_keeps_text() {
    colored::control::set_override(true);
    let error = ConvertError::new(ErrorKind::IoError, "disk full").with_file("a.urpx");
    let output = ErrorFormatter::new(&error).with_color(true).format();
    assert!(output.contains("a.urpx"));
    assert!(output.contains("disk full"));
    assert!(output.contains("\u{1b}["));
}

#[test]
fn test_display_matches_uncoloured_format_without_location() {
    let error = ConvertError::new(ErrorKind::FileNotFound, "gone").with_file("x.urpx");
    assert_eq!(
        error.to_string(),
        ErrorFormatter::new(&error).with_color(false).format()
    );
}

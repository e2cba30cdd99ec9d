//! Loading program documents from disk or memory.

use super::ProgramDocument;
use crate::debug_println;
use crate::error::{ConvertError, ErrorKind, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read and parse a `.urpx` file in full
pub fn load_document(path: &Path) -> Result<ProgramDocument> {
    let text = fs::read_to_string(path)?;
    debug_println!("loaded {} ({} bytes)", path.display(), text.len());
    parse_document(&text)
}

/// Parse a program document from JSON text
pub fn parse_document(text: &str) -> Result<ProgramDocument> {
    let value: Value = serde_json::from_str(text)?;
    parse_value(value)
}

/// Interpret an already-parsed JSON value as a program document
pub fn parse_value(value: Value) -> Result<ProgramDocument> {
    if !value.is_object() {
        return Err(ConvertError::new(
            ErrorKind::MalformedInput,
            format!("top-level value is {}, not an object", json_type_name(&value)),
        )
        .with_help("a .urpx archive is a single JSON object"));
    }
    Ok(ProgramDocument::deserialize(value)?)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{LabelPart, Node, ProgramLabel};
    use crate::resolver::resolve_label;

    #[test]
    fn test_empty_object_is_a_valid_document() {
        let document = parse_document("{}").expect("empty object should parse");
        assert_eq!(document, ProgramDocument::default());
        assert_eq!(document.script(), "");
        assert_eq!(document.application_name(), None);
    }

    #[test]
    fn test_non_object_is_malformed() {
        let err = parse_document("[1, 2]").unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedInput);
        assert!(err.message.contains("an array"));
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_document("{\"application\": ").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidJson);
        assert!(err.context.location.is_some());
    }

    #[test]
    fn test_mistyped_fields_fall_back_to_defaults() {
        let document = parse_document(
            r#"{
                "application": {"applicationInfo": "oops", "urscript": {"script": 7}},
                "program": {
                    "variableDeclarations": {"name": "x"},
                    "programContent": {"children": [
                        {"programLabel": 12, "contributedNode": "ur-move", "children": null}
                    ]}
                }
            }"#,
        )
        .expect("document should parse");
        assert_eq!(document.application_name(), None);
        assert_eq!(document.script(), "");
        assert!(document.program.variable_declarations.is_empty());

        let node = &document.program.program_content.children[0];
        assert_eq!(node.program_label, None);
        assert_eq!(node.contributed_node, None);
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_full_document_shape() {
        let document = parse_document(
            r#"{
                "application": {
                    "applicationInfo": {"name": "Pick"},
                    "urscript": {"script": "move(1)"}
                },
                "program": {
                    "variableDeclarations": [{"name": "x"}, {}],
                    "programContent": {"children": [
                        {"contributedNode": {"type": "ur-functions"}, "children": [
                            {"programLabel": [{"translationKey": "program-node-label.main"}],
                             "children": [{"programLabel": "Wait"}]}
                        ]}
                    ]}
                }
            }"#,
        )
        .expect("document should parse");

        assert_eq!(document.application_name(), Some("Pick"));
        assert_eq!(document.script(), "move(1)");
        let names: Vec<String> = document
            .program
            .variable_declarations
            .iter()
            .map(|decl| resolve_label(&decl.label_node()))
            .collect();
        assert_eq!(names, vec!["x", "<anon>"]);

        let container = document
            .program
            .functions_container()
            .expect("functions container should be found");
        assert_eq!(
            container.children[0].program_label,
            Some(ProgramLabel::Composite(vec![LabelPart::Key(
                "program-node-label.main".to_string()
            )]))
        );
        assert_eq!(
            document.program.entry_point_body(),
            &[Node::labeled("Wait")]
        );
    }

    #[test]
    fn test_non_object_list_elements_are_dropped_individually() {
        let document = parse_document(
            r#"{"program": {
                "variableDeclarations": [{"name": "x"}, "junk", {"name": "y"}, 4],
                "programContent": {"children": [
                    null,
                    {"contributedNode": {"type": "ur-functions"}, "children": [
                        {"children": [{"programLabel": "A"}, null, [1], {"programLabel": "B"}]}
                    ]}
                ]}
            }}"#,
        )
        .expect("document should parse");

        assert_eq!(document.program.variable_declarations.len(), 2);
        assert_eq!(
            document.program.entry_point_body(),
            &[Node::labeled("A"), Node::labeled("B")]
        );
    }

    #[test]
    fn test_variable_name_presence_is_kept() {
        let document = parse_document(
            r#"{"program": {"variableDeclarations": [
                {"type": "int"}, {"name": null}, {"name": 5}, {"name": [{"value": "v"}]}
            ]}}"#,
        )
        .expect("document should parse");
        let labels: Vec<String> = document
            .program
            .variable_declarations
            .iter()
            .map(|decl| resolve_label(&decl.label_node()))
            .collect();
        assert_eq!(labels, vec!["<anon>", "Unknown", "Unknown", "v"]);
    }
}

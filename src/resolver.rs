//! Derives human-readable labels for program nodes.
//!
//! Resolution tries, in order: a plain `programLabel` string, a composite
//! `programLabel` list, the node's contributed type, and finally `Unknown`.
//! The first rule that produces non-empty text wins.

use crate::document::{LabelPart, Node, ProgramLabel};

/// Label used when a node carries no usable naming information
pub const UNKNOWN_LABEL: &str = "Unknown";

const TRANSLATION_KEY_PREFIX: &str = "program-node-label.";
const NODE_TYPE_PREFIX: &str = "ur-";

/// Readable label for a node. Never fails and never returns an empty string.
pub fn resolve_label(node: &Node) -> String {
    node.program_label
        .as_ref()
        .and_then(label_text)
        .or_else(|| node.node_type().and_then(type_label))
        .unwrap_or_else(|| UNKNOWN_LABEL.to_string())
}

fn label_text(label: &ProgramLabel) -> Option<String> {
    match label {
        ProgramLabel::Plain(text) if !text.trim().is_empty() => Some(text.clone()),
        ProgramLabel::Plain(_) => None,
        ProgramLabel::Composite(parts) => {
            let fragments: Vec<String> = parts.iter().map(part_text).collect();
            non_empty(fragments.join(" ").trim())
        }
    }
}

fn part_text(part: &LabelPart) -> String {
    match part {
        LabelPart::Value(text) => text.clone(),
        LabelPart::Key(key) => translation_key_label(key),
    }
}

/// `program-node-label.move.linear` becomes `Move Linear`
pub fn translation_key_label(key: &str) -> String {
    let key = key.strip_prefix(TRANSLATION_KEY_PREFIX).unwrap_or(key);
    title_case(&key.replace('.', " "))
}

/// `ur-set-payload` becomes `Set Payload`
pub fn type_label(node_type: &str) -> Option<String> {
    let name = node_type.strip_prefix(NODE_TYPE_PREFIX).unwrap_or(node_type);
    non_empty(&title_case(&name.replace('-', " ")))
}

/// Capitalize the first cased letter of every run of cased letters and
/// lowercase the rest. Any uncased character (space, digit, punctuation)
/// starts a new word, so `set_io` becomes `Set_Io` and `3d` becomes `3D`.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_word = false;
    for ch in text.chars() {
        let cased = ch.is_uppercase() || ch.is_lowercase();
        if cased && !in_word {
            result.extend(ch.to_uppercase());
        } else if cased {
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
        in_word = cased;
    }
    result
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

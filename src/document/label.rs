//! The two shapes a `programLabel` can take.

use serde::de::{Deserialize, Deserializer};
use serde_json::Value;

/// Naming information attached directly to a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgramLabel {
    /// A ready-made label string
    Plain(String),
    /// Label assembled from literal values and translation keys, in order
    Composite(Vec<LabelPart>),
}

/// One piece of a composite label
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelPart {
    /// Literal text, already converted from whatever JSON value it held
    Value(String),
    /// A translation key such as `program-node-label.move.linear`
    Key(String),
}

impl ProgramLabel {
    /// Build from raw JSON. Anything other than a string or a list carries no
    /// label information and yields `None`.
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::String(text) => Some(ProgramLabel::Plain(text)),
            Value::Array(items) => Some(ProgramLabel::Composite(
                items.into_iter().filter_map(LabelPart::from_json).collect(),
            )),
            _ => None,
        }
    }
}

impl LabelPart {
    /// Build from one element of a composite label. `value` takes precedence
    /// over `translationKey`; elements carrying neither are dropped.
    pub fn from_json(value: Value) -> Option<Self> {
        let Value::Object(mut fields) = value else {
            return None;
        };
        if let Some(value) = fields.remove("value") {
            return Some(LabelPart::Value(value_to_text(value)));
        }
        fields
            .remove("translationKey")
            .map(|key| LabelPart::Key(value_to_text(key)))
    }
}

/// Text form of an arbitrary JSON value used inside a label. Scalars read the
/// way the archive tooling prints them: `True`, `False` and `None`.
fn value_to_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Null => "None".to_string(),
        other => other.to_string(),
    }
}

pub(crate) fn deserialize_program_label<'de, D>(
    deserializer: D,
) -> Result<Option<ProgramLabel>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(ProgramLabel::from_json(value))
}

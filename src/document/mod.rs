//! Typed view of a `.urpx` program document.
//!
//! The archive is loosely typed JSON; everything here deserializes leniently so
//! that missing or oddly-typed fields fall back to defaults instead of failing.

mod label;
mod loader;
mod traversal;
mod types;

pub use label::{LabelPart, ProgramLabel};
pub use loader::{load_document, parse_document, parse_value};
pub use traversal::NodeExt;
pub use types::*;

use crate::debug_println;
use serde::de::{Deserialize, DeserializeOwned, Deserializer};
use serde_json::Value;

/// Deserialize a field, treating a type mismatch the same as an absent field
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Deserialize a list of objects element by element. Elements that are not
/// objects are dropped on their own; their siblings are kept. Anything other
/// than a list counts as an empty list.
pub(crate) fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    let total = items.len();
    let kept: Vec<T> = items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| T::deserialize(item).ok())
        .collect();
    if kept.len() < total {
        debug_println!("skipped {} non-object list element(s)", total - kept.len());
    }
    Ok(kept)
}

/// Keep a field's raw value, so that an explicit `null` stays distinguishable
/// from a missing key
pub(crate) fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

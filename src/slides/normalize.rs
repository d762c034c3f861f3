// src/slides/normalize.rs
// Payload normalization: unwrap, filter, and shape raw slide data

use serde_json::{Map, Value};

use super::record::SlideRecord;

/// Entries carrying this key are authoring notes, not slides
pub const COMMENT_KEY: &str = "_comment";

/// Key under which a wrapped payload keeps its slide list
pub const SLIDES_KEY: &str = "slides";

/// Reduce an arbitrary payload to its slide objects.
///
/// Accepts a bare list or an object wrapping the list under `slides`.
/// Anything else yields an empty list. Non-object entries and entries
/// carrying `_comment` are dropped; order is preserved.
pub fn normalize_payload(payload: &Value) -> Vec<&Map<String, Value>> {
    let list = match payload {
        Value::Object(obj) => obj.get(SLIDES_KEY),
        other => Some(other),
    };

    let Some(Value::Array(entries)) = list else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(Value::as_object)
        .filter(|obj| !obj.contains_key(COMMENT_KEY))
        .collect()
}

/// Normalize a payload straight into records
pub fn normalize_slides(payload: &Value) -> Vec<SlideRecord> {
    normalize_payload(payload)
        .into_iter()
        .map(SlideRecord::from_object)
        .collect()
}

use crate::catalog::{FIELD_PITCH, FIELD_TYPICAL_PINS};
use crate::domain::model::Record;
use serde_json::Value;

/// Fields stored as stringified number lists in the lookup table.
pub const LIST_FIELDS: [&str; 2] = [FIELD_TYPICAL_PINS, FIELD_PITCH];

/// Parses a list literal such as `"[8,14,16]"` or `"[0.5, 1.27]"`.
///
/// Returns `None` unless the whole string is a list whose elements are all
/// numbers. Integers stay integers and decimals stay floats.
pub fn try_parse_list_literal(s: &str) -> Option<Vec<Value>> {
    match serde_json::from_str::<Value>(s).ok()? {
        Value::Array(items) if items.iter().all(Value::is_number) => Some(items),
        _ => None,
    }
}

/// Best-effort conversion of one field value; anything unparsable comes back as is.
pub fn normalize_value(value: &Value) -> Value {
    value
        .as_str()
        .and_then(try_parse_list_literal)
        .map(Value::Array)
        .unwrap_or_else(|| value.clone())
}

/// Returns a copy of `record` with every list field parsed where possible.
pub fn normalize(record: &Record) -> Record {
    let mut cleaned = record.clone();
    for field in LIST_FIELDS {
        if let Some(value) = record.get(field) {
            let normalized = normalize_value(value);
            if &normalized != value {
                tracing::trace!("normalized {} from {} to {}", field, value, normalized);
            }
            cleaned.data.insert(field.to_string(), normalized);
        }
    }
    cleaned
}

pub fn normalize_all(records: &[Record]) -> Vec<Record> {
    records.iter().map(normalize).collect()
}

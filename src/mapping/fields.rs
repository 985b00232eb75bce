//! Defensive accessors over loosely-typed source records.
//!
//! All of them agree on a single notion of presence: a field is present when
//! the key exists, the value is not JSON null, and its text is neither blank
//! nor the literal string `"null"` (any case). Sources emit that literal for
//! missing data, so it is treated exactly like absence.

use std::borrow::Cow;

use serde_json::Value;

use crate::constants::NULL_SENTINEL;
use crate::error::{MapperError, Result};

/// Whether a piece of text carries data
pub fn is_meaningful(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && !trimmed.eq_ignore_ascii_case(NULL_SENTINEL)
}

/// Text form of a scalar value; null, objects and arrays have none
pub fn scalar_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Text of `key` when present, `None` otherwise
pub fn present_text<'a>(record: &'a Value, key: &str) -> Option<Cow<'a, str>> {
    record
        .get(key)
        .and_then(scalar_text)
        .filter(|text| is_meaningful(text))
}

/// Text of `key`, or `fallback` when the field is not present
pub fn text_or(record: &Value, key: &str, fallback: &str) -> String {
    present_text(record, key)
        .map(Cow::into_owned)
        .unwrap_or_else(|| fallback.to_string())
}

/// Text of `parent.key`, or `fallback` when either level is missing
pub fn nested_text_or(record: &Value, parent: &str, key: &str, fallback: &str) -> String {
    record
        .get(parent)
        .map(|nested| text_or(nested, key, fallback))
        .unwrap_or_else(|| fallback.to_string())
}

/// Text of a field with no fallback.
///
/// Containers are a type error; anything else that is not present is a
/// missing field.
pub fn required_text(record: &Value, key: &str) -> Result<String> {
    match record.get(key) {
        Some(Value::Array(_)) | Some(Value::Object(_)) => {
            Err(MapperError::invalid_type(key, "string"))
        }
        _ => present_text(record, key)
            .map(Cow::into_owned)
            .ok_or_else(|| MapperError::missing(key)),
    }
}

/// The strings of an array field.
///
/// `Ok(None)` when the field is missing or not an array. JSON null elements
/// are skipped; any other non-string element fails the whole field.
pub fn string_list(record: &Value, key: &str) -> Result<Option<Vec<String>>> {
    let Some(items) = record.get(key).and_then(Value::as_array) else {
        return Ok(None);
    };

    items
        .iter()
        .enumerate()
        .filter(|(_, item)| !item.is_null())
        .map(|(i, item)| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| MapperError::invalid_type(format!("{key}[{i}]"), "string"))
        })
        .collect::<Result<Vec<_>>>()
        .map(Some)
}

/// Fails unless the record is a JSON object
pub fn ensure_object(record: &Value) -> Result<()> {
    if record.is_object() {
        Ok(())
    } else {
        Err(MapperError::invalid_type("record", "object"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_presence_rules() {
        let data = json!({
            "text": "Warszawa",
            "blank": "   ",
            "empty": "",
            "literal_null": "NULL",
            "json_null": null,
            "number": 42
        });

        assert_eq!(present_text(&data, "text").as_deref(), Some("Warszawa"));
        assert_eq!(present_text(&data, "number").as_deref(), Some("42"));
        assert!(present_text(&data, "blank").is_none());
        assert!(present_text(&data, "empty").is_none());
        assert!(present_text(&data, "literal_null").is_none());
        assert!(present_text(&data, "json_null").is_none());
        assert!(present_text(&data, "absent").is_none());
    }

    #[test]
    fn test_text_or_and_nested() {
        let data = json!({
            "nextEventPlace": {"city": "Kraków", "customName": "null"}
        });

        assert_eq!(nested_text_or(&data, "nextEventPlace", "city", "Unknown City"), "Kraków");
        assert_eq!(
            nested_text_or(&data, "nextEventPlace", "customName", "Unknown Place"),
            "Unknown Place"
        );
        assert_eq!(nested_text_or(&data, "missing", "city", "Unknown City"), "Unknown City");
        assert_eq!(text_or(&data, "title", "fallback"), "fallback");
    }

    #[test]
    fn test_nested_lookup_on_scalar_parent() {
        let data = json!({"nextEventPlace": "Hala"});
        assert_eq!(nested_text_or(&data, "nextEventPlace", "city", "Unknown City"), "Unknown City");
    }

    #[test]
    fn test_required_text() {
        let data = json!({"title": "Koncert", "tags": ["a"], "blank": " "});

        assert_eq!(required_text(&data, "title").unwrap(), "Koncert");
        assert!(matches!(
            required_text(&data, "missing"),
            Err(MapperError::MissingField(field)) if field == "missing"
        ));
        assert!(matches!(
            required_text(&data, "blank"),
            Err(MapperError::MissingField(_))
        ));
        assert!(matches!(
            required_text(&data, "tags"),
            Err(MapperError::InvalidType { .. })
        ));
    }

    #[test]
    fn test_string_list() {
        let data = json!({
            "artists": ["Dawid Podsiadło", "Sanah"],
            "mixed": ["Sanah", 7],
            "with_nulls": [null, "Sanah", null],
            "scalar": "Sanah"
        });

        assert_eq!(
            string_list(&data, "artists").unwrap(),
            Some(vec!["Dawid Podsiadło".to_string(), "Sanah".to_string()])
        );
        assert_eq!(string_list(&data, "with_nulls").unwrap(), Some(vec!["Sanah".to_string()]));
        assert_eq!(string_list(&data, "scalar").unwrap(), None);
        assert_eq!(string_list(&data, "absent").unwrap(), None);
        assert!(matches!(
            string_list(&data, "mixed"),
            Err(MapperError::InvalidType { field, .. }) if field == "mixed[1]"
        ));
    }

    #[test]
    fn test_ensure_object() {
        assert!(ensure_object(&json!({})).is_ok());
        assert!(ensure_object(&json!([1, 2])).is_err());
        assert!(ensure_object(&json!("title")).is_err());
    }
}

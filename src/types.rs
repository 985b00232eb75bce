use serde::{Deserialize, Serialize};

use crate::error::{MapperError, Result};

/// Raw event record as received from a ticketing source
pub type RawRecord = serde_json::Value;

/// Parse a JSON document holding either an array of records or a single record
pub fn parse_records(json: &str) -> Result<Vec<RawRecord>> {
    match serde_json::from_str::<RawRecord>(json)? {
        RawRecord::Array(records) => Ok(records),
        record @ RawRecord::Object(_) => Ok(vec![record]),
        _ => Err(MapperError::invalid_type("input", "array or object")),
    }
}

/// An event in the uniform schema shared by all sources.
///
/// Every field is always populated; missing source data is represented by a
/// sentinel string such as `"null"` or `"Unknown City"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedEvent {
    pub event_name: String,
    pub artists: String,
    pub start_date: String,
    pub end_date: String,
    pub thumbnail: String,
    pub url: String,
    pub location: String,
    pub place: String,
    pub category: String,
    pub tags: String,
    pub description: String,
    pub source: String,
}

impl NormalizedEvent {
    /// Output keys in schema order
    pub const KEYS: [&'static str; 12] = [
        "event_name",
        "artists",
        "start_date",
        "end_date",
        "thumbnail",
        "url",
        "location",
        "place",
        "category",
        "tags",
        "description",
        "source",
    ];
}

/// A record dropped at the batch boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordFailure {
    /// Position of the record in the input batch
    pub index: usize,
    /// Best-effort identifier (`id`, then `slug`, then `#index`)
    pub record_id: String,
    pub error: String,
}

/// Result of mapping a batch: surviving events plus what was dropped
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub events: Vec<NormalizedEvent>,
    pub failures: Vec<RecordFailure>,
}

impl BatchReport {
    /// Number of records the batch started with
    pub fn total(&self) -> usize {
        self.events.len() + self.failures.len()
    }
}

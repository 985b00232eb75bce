use chrono::{NaiveDateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{MapperError, Result};

// Zero-padded ISO local date-time; seconds and a 1-9 digit fraction are optional.
// chrono alone also takes unpadded fields, a signed year and surrounding spaces.
static ISO_LOCAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}(?::(?P<sec>[0-9]{2})(?:\.[0-9]{1,9})?)?$")
        .expect("local date-time pattern is valid")
});

const LOCAL_DATE_TIME: &str = "%Y-%m-%dT%H:%M:%S%.f";
const LOCAL_DATE_TIME_MINUTES: &str = "%Y-%m-%dT%H:%M";

fn parse_error(value: &str, reason: impl ToString) -> MapperError {
    MapperError::DateParse {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Parse a zone-less ISO date-time such as `2024-05-17T19:30:00`
pub fn parse_local(value: &str) -> Result<NaiveDateTime> {
    let captures = ISO_LOCAL
        .captures(value)
        .ok_or_else(|| parse_error(value, "not an ISO local date-time"))?;

    // chrono reads :60 as a leap second
    if matches!(captures.name("sec"), Some(sec) if sec.as_str() == "60") {
        return Err(parse_error(value, "second out of range"));
    }

    NaiveDateTime::parse_from_str(value, LOCAL_DATE_TIME)
        .or_else(|_| NaiveDateTime::parse_from_str(value, LOCAL_DATE_TIME_MINUTES))
        .map_err(|e| parse_error(value, e))
}

/// Convert a local date-time string to Unix epoch seconds.
///
/// The wall-clock value is read as UTC without any zone conversion.
pub fn to_epoch_seconds(value: &str) -> Result<String> {
    let local = parse_local(value)?;
    Ok(Utc.from_utc_datetime(&local).timestamp().to_string())
}

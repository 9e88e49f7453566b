//! Date parsing shared by the time-based metrics.

use crate::config::ConfigValidationError;
use crate::error::{QualityError, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Outcome of checking a single cell against the expected date format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum DateCheck {
    /// The cell parsed under the format.
    Valid(NaiveDateTime),
    /// The cell holds text that does not match the format.
    Invalid(String),
    /// The cell is null.
    Missing,
}

impl DateCheck {
    /// Classify an optional cell value.
    pub fn classify(value: Option<&str>, format: &str) -> Self {
        match value {
            None => DateCheck::Missing,
            Some(raw) => match parse_date(raw, format) {
                Some(parsed) => DateCheck::Valid(parsed),
                None => DateCheck::Invalid(raw.to_string()),
            },
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, DateCheck::Valid(_))
    }

    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            DateCheck::Valid(dt) => Some(*dt),
            _ => None,
        }
    }
}

/// Parse a value strictly against a strftime format.
///
/// Formats carrying a time component parse as a datetime; date-only formats
/// resolve to midnight. Surrounding whitespace is not accepted.
pub fn parse_date(value: &str, format: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
        return Some(dt);
    }
    NaiveDate::parse_from_str(value, format)
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// `now` moved back by `days`.
///
/// Fails with a configuration error instead of overflowing when the result
/// falls outside the representable calendar range.
pub fn days_before(now: NaiveDateTime, days: u32, field: &str) -> Result<NaiveDateTime> {
    Duration::try_days(i64::from(days))
        .and_then(|span| now.checked_sub_signed(span))
        .ok_or_else(|| {
            QualityError::Config(ConfigValidationError::WindowOutOfRange {
                field: field.to_string(),
                days,
            })
        })
}

/// Classify every cell of a column.
pub fn classify_all(values: &[Option<String>], format: &str) -> Vec<DateCheck> {
    values
        .iter()
        .map(|v| DateCheck::classify(v.as_deref(), format))
        .collect()
}

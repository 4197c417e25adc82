//! Due-date parsing and the zero-time persistence sentinel.
//!
//! Persisted task files represent an unset timestamp as
//! `0001-01-01T00:00:00Z` rather than `null`. In memory the same state is
//! `None`.

use super::TaskDomainError;
use chrono::{DateTime, NaiveDate, Utc};

/// Seconds between the Unix epoch and `0001-01-01T00:00:00Z`.
const ZERO_TIME_UNIX_SECONDS: i64 = -62_135_596_800;

/// Calendar format accepted for due dates.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns the zero-time sentinel, `0001-01-01T00:00:00Z`.
#[must_use]
pub fn zero_time() -> DateTime<Utc> {
    DateTime::from_timestamp(ZERO_TIME_UNIX_SECONDS, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Parses a `YYYY-MM-DD` due date into midnight UTC of that day.
///
/// Empty input yields `Ok(None)`, which clears a due date.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidDueDate`] when the text is not a valid
/// calendar date.
pub fn parse_due_date(value: &str) -> Result<Option<DateTime<Utc>>, TaskDomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let date = NaiveDate::parse_from_str(trimmed, DUE_DATE_FORMAT)
        .map_err(|_| TaskDomainError::InvalidDueDate(value.to_owned()))?;
    Ok(Some(date.and_time(chrono::NaiveTime::MIN).and_utc()))
}

/// Serde codec mapping `Option<DateTime<Utc>>` to the zero-time sentinel.
pub(crate) mod zero_time_option {
    use super::zero_time;
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub(crate) fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.unwrap_or_else(zero_time).serialize(serializer)
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<DateTime<Utc>>::deserialize(deserializer)?;
        Ok(raw.filter(|timestamp| *timestamp != zero_time()))
    }
}

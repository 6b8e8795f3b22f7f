use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required query parameter '{0}'")]
    MissingParameter(&'static str),
    #[error("query parameter '{0}' is not a valid ISO-8601 timestamp")]
    InvalidDate(&'static str),
    #[error("end must be after start")]
    InvalidRange,
}

/// Time window over route timestamps, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// Checks run in a fixed order and stop at the first failure: presence of
/// `start`, presence of `end`, parseability of each, then `end > start`.
pub fn validate_window(
    start: Option<&str>,
    end: Option<&str>,
) -> Result<TimeWindow, ValidationError> {
    let start = start.ok_or(ValidationError::MissingParameter("start"))?;
    let end = end.ok_or(ValidationError::MissingParameter("end"))?;
    let start = parse_instant(start).ok_or(ValidationError::InvalidDate("start"))?;
    let end = parse_instant(end).ok_or(ValidationError::InvalidDate("end"))?;
    if end <= start {
        return Err(ValidationError::InvalidRange);
    }
    Ok(TimeWindow { start, end })
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}

//! Tests for time-window query validation.

use chrono::{DateTime, Utc};
use geo_routes::validate::{validate_window, TimeWindow, ValidationError};

fn instant(raw: &str) -> DateTime<Utc> {
    raw.parse().unwrap()
}

#[test]
fn valid_window_is_accepted() {
    let window = validate_window(Some("2022-01-01T00:00:00Z"), Some("2022-12-31T23:59:59Z"));
    assert_eq!(
        window,
        Ok(TimeWindow {
            start: instant("2022-01-01T00:00:00Z"),
            end: instant("2022-12-31T23:59:59Z"),
        })
    );
}

#[test]
fn offset_timestamps_are_normalized_to_utc() {
    let window = validate_window(
        Some("2022-01-01T02:00:00+02:00"),
        Some("2022-06-01T00:00:00Z"),
    )
    .unwrap();
    assert_eq!(window.start, instant("2022-01-01T00:00:00Z"));
}

#[test]
fn missing_start_is_reported_first() {
    assert_eq!(
        validate_window(None, Some("2022-12-31T23:59:59Z")),
        Err(ValidationError::MissingParameter("start"))
    );
    // Even when end would also fail to parse
    assert_eq!(
        validate_window(None, Some("not-a-date")),
        Err(ValidationError::MissingParameter("start"))
    );
}

#[test]
fn missing_end_is_reported() {
    assert_eq!(
        validate_window(Some("2022-01-01T00:00:00Z"), None),
        Err(ValidationError::MissingParameter("end"))
    );
}

#[test]
fn unparseable_start_is_reported_before_end() {
    assert_eq!(
        validate_window(Some("invalid_date"), Some("2022-12-31T23:59:59Z")),
        Err(ValidationError::InvalidDate("start"))
    );
    assert_eq!(
        validate_window(Some("invalid_date"), Some("also_invalid")),
        Err(ValidationError::InvalidDate("start"))
    );
}

#[test]
fn unparseable_end_is_reported() {
    assert_eq!(
        validate_window(Some("2022-01-01T00:00:00Z"), Some("invalid_date")),
        Err(ValidationError::InvalidDate("end"))
    );
}

#[test]
fn end_equal_to_start_is_rejected() {
    assert_eq!(
        validate_window(Some("2022-06-01T00:00:00Z"), Some("2022-06-01T00:00:00Z")),
        Err(ValidationError::InvalidRange)
    );
}

#[test]
fn end_before_start_is_rejected() {
    assert_eq!(
        validate_window(Some("2022-12-31T23:59:59Z"), Some("2022-01-01T00:00:00Z")),
        Err(ValidationError::InvalidRange)
    );
}

#[test]
fn messages_name_the_offending_parameter() {
    let err = validate_window(None, None).unwrap_err();
    assert_eq!(err.to_string(), "missing required query parameter 'start'");

    let err = validate_window(Some("garbage"), Some("2022-01-02T00:00:00Z")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "query parameter 'start' is not a valid ISO-8601 timestamp"
    );

    let err = validate_window(
        Some("2022-01-02T00:00:00Z"),
        Some("2022-01-01T00:00:00Z"),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "end must be after start");
}

// Timestamp helpers shared by models, mappers and repositories
//
// Models carry timestamps as RFC 3339 strings, entities carry them as
// `DateTime<Utc>`. Everything is truncated to microseconds so a value
// survives a round trip through a Postgres TIMESTAMPTZ column unchanged.

use chrono::{DateTime, Duration, SecondsFormat, SubsecRound, Utc};

/// Current time at microsecond precision
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Current time formatted for a model field
pub fn now_string() -> String {
    format_timestamp(now())
}

/// Formats a timestamp as RFC 3339 with microseconds and a `Z` suffix
pub fn format_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parses an RFC 3339 string, returning `None` when it is malformed
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc).trunc_subsecs(6))
}

/// Next `updated_at` value for a record last touched at `previous`
///
/// Always strictly later than `previous`, even when the clock has not
/// advanced past it at microsecond resolution.
pub fn next_update(previous: DateTime<Utc>) -> DateTime<Utc> {
    let current = now();
    if current > previous {
        current
    } else {
        previous + Duration::microseconds(1)
    }
}

/// String form of [`next_update`] for models holding string timestamps
///
/// A missing or unparseable previous value is treated as "never updated".
pub fn next_update_string(previous: Option<&str>) -> String {
    match previous.and_then(parse_timestamp) {
        Some(previous) => format_timestamp(next_update(previous)),
        None => now_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_and_parse_preserve_value() {
        let value = now();
        let parsed = parse_timestamp(&format_timestamp(value)).expect("valid timestamp");
        assert_eq!(parsed, value);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn parse_accepts_offsets() {
        let parsed = parse_timestamp("2024-05-01T12:00:00+02:00").expect("valid timestamp");
        assert_eq!(format_timestamp(parsed), "2024-05-01T10:00:00.000000Z");
    }

    #[test]
    fn next_update_is_strictly_later() {
        let future = now() + Duration::seconds(60);
        assert!(next_update(future) > future);

        let past = now() - Duration::seconds(60);
        assert!(next_update(past) > past);
    }

    #[test]
    fn next_update_string_without_previous() {
        let value = next_update_string(None);
        assert!(parse_timestamp(&value).is_some());
    }
}

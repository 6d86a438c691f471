use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::cmp::Ordering;

const SECONDS_PER_DAY: i64 = 86_400;

/// Parses an RFC 3339 date-time, a date-time without offset (read as UTC) or a
/// plain `YYYY-MM-DD` (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.contains('T') {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
            return Some(parsed.with_timezone(&Utc));
        }
        return NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc());
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Whole days from `raw` to `now`, floored; `None` when `raw` is absent or unparseable.
pub fn days_since(raw: Option<&str>, now: DateTime<Utc>) -> Option<i64> {
    let instant = parse_timestamp(raw?)?;
    let elapsed = now.signed_duration_since(instant).num_seconds();
    Some(elapsed.div_euclid(SECONDS_PER_DAY))
}

/// Orders creation timestamps newest first; unparseable ones sort last.
pub fn newest_first(left: Option<&str>, right: Option<&str>) -> Ordering {
    let left = left.and_then(parse_timestamp);
    let right = right.and_then(parse_timestamp);
    match (left, right) {
        (Some(left), Some(right)) => right.cmp(&left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

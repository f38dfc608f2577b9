//! Shared helpers for model types: ids, timestamps, and the
//! presence-preserving deserializer used by partial updates.

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

/// Generate a new record id.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Current time as RFC 3339 in UTC. All persisted timestamps go through here.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}

/// Deserialize a field so that "absent" and "explicit null" are distinct:
/// absent -> `None`, null -> `Some(None)`, value -> `Some(Some(v))`.
///
/// Use with `#[serde(default, deserialize_with = "double_option")]`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Parse an RFC 3339 timestamp and normalize it to UTC RFC 3339.
pub fn normalize_datetime(value: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).to_rfc3339())
}

/// Parse an RFC 3339 timestamp or a plain `YYYY-MM-DD` date, normalized to
/// UTC RFC 3339 (dates become midnight UTC).
pub fn normalize_date(value: &str) -> Option<String> {
    if let Some(ts) = normalize_datetime(value) {
        return Some(ts);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(|d| Utc.from_utc_datetime(&d.and_time(NaiveTime::MIN)).to_rfc3339())
}

/// Bounds of the current local day as UTC RFC 3339: `[start, end)`.
pub fn today_bounds() -> (String, String) {
    let today = Local::now().date_naive();
    (local_midnight_utc(today), local_midnight_utc(today + Duration::days(1)))
}

fn local_midnight_utc(date: NaiveDate) -> String {
    let naive = date.and_time(NaiveTime::MIN);
    match Local.from_local_datetime(&naive).earliest() {
        Some(dt) => dt.with_timezone(&Utc).to_rfc3339(),
        // Midnight skipped by a DST transition; fall back to UTC midnight
        None => Utc.from_utc_datetime(&naive).to_rfc3339(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_datetime() {
        let ts = normalize_datetime("2026-03-01T10:30:00+07:00").unwrap();
        assert!(ts.starts_with("2026-03-01T03:30:00"));
        assert!(normalize_datetime("not-a-date").is_none());
        assert!(normalize_datetime("2026-03-01").is_none());
    }

    #[test]
    fn test_normalize_date_accepts_both_forms() {
        assert!(normalize_date("2026-03-01").unwrap().starts_with("2026-03-01T00:00:00"));
        assert!(normalize_date("2026-03-01T10:30:00Z").is_some());
        assert!(normalize_date("03/01/2026").is_none());
    }

    #[test]
    fn test_today_bounds_cover_now() {
        let (start, end) = today_bounds();
        let now = now_rfc3339();
        let parse = |s: &str| DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc);
        assert!(parse(&start) <= parse(&now));
        assert!(parse(&now) < parse(&end));
    }

    #[test]
    fn test_double_option_distinguishes_absent_and_null() {
        #[derive(serde::Deserialize)]
        struct Probe {
            #[serde(default, deserialize_with = "double_option")]
            phone: Option<Option<String>>,
        }

        let absent: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.phone, None);

        let null: Probe = serde_json::from_str(r#"{"phone": null}"#).unwrap();
        assert_eq!(null.phone, Some(None));

        let set: Probe = serde_json::from_str(r#"{"phone": "123"}"#).unwrap();
        assert_eq!(set.phone, Some(Some("123".to_string())));
    }
}

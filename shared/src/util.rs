//! Time helpers

use chrono::{DateTime, Utc};

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Whole days from `now` until `target`, rounded up
///
/// Anything later today counts as 1 day; past instants give 0 or a
/// negative count.
pub fn days_until(target: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    const DAY_MS: i64 = 86_400_000;
    let diff = (target - now).num_milliseconds();
    if diff > 0 {
        (diff + DAY_MS - 1) / DAY_MS
    } else {
        diff / DAY_MS
    }
}

/// Short relative label used in history lists ("just now", "5m ago", ...)
pub fn relative_time(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - at).num_seconds();
    match secs {
        ..60 => "just now".to_string(),
        60..3_600 => format!("{}m ago", secs / 60),
        3_600..86_400 => format!("{}h ago", secs / 3_600),
        _ => format!("{}d ago", secs / 86_400),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_days_until_rounds_up() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(days_until(now + Duration::hours(1), now), 1);
        assert_eq!(days_until(now + Duration::days(2), now), 2);
        assert_eq!(days_until(now + Duration::days(2) + Duration::minutes(1), now), 3);
        assert_eq!(days_until(now, now), 0);
        assert_eq!(days_until(now - Duration::days(3), now), -3);
    }

    #[test]
    fn test_relative_time() {
        let now = Utc::now();
        assert_eq!(relative_time(now, now), "just now");
        assert_eq!(relative_time(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(relative_time(now - Duration::hours(3), now), "3h ago");
        assert_eq!(relative_time(now - Duration::days(2), now), "2d ago");
    }
}

//! Time formatting helpers.

use disperse_types::Timestamp;

/// Format a duration in seconds to a human-readable string.
pub fn format_duration(secs: u64) -> String {
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs < 86400 {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    } else {
        format!("{}d {}h", secs / 86400, (secs % 86400) / 3600)
    }
}

/// How long ago `then` was, e.g. `"5m 3s ago"`.
pub fn format_age(then: Timestamp, now: Timestamp) -> String {
    format!("{} ago", format_duration(then.elapsed_since(now) / 1000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations() {
        assert_eq!(format_duration(59), "59s");
        assert_eq!(format_duration(61), "1m 1s");
        assert_eq!(format_duration(3_660), "1h 1m");
        assert_eq!(format_duration(90_000), "1d 1h");
    }

    #[test]
    fn age_from_millis() {
        let then = Timestamp::from_millis(1_000);
        let now = Timestamp::from_millis(304_999);
        assert_eq!(format_age(then, now), "5m 3s ago");
        assert_eq!(format_age(now, then), "0s ago");
    }
}

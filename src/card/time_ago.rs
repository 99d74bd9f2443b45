use chrono::{DateTime, Utc};

/// Unit lengths in seconds, largest first.
const INTERVALS: [(i64, &str); 6] = [
    (31_536_000, "year"),
    (2_592_000, "month"),
    (604_800, "week"),
    (86_400, "day"),
    (3_600, "hour"),
    (60, "minute"),
];

/// Human-readable age of `posted` relative to `now`, e.g. "3 days ago".
/// Anything under a minute, and any timestamp in the future, is "Just now".
pub fn time_ago(posted: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - posted).num_seconds();

    for (unit_secs, unit) in INTERVALS {
        let count = seconds / unit_secs;
        if count >= 1 {
            let plural = if count > 1 { "s" } else { "" };
            return format!("{count} {unit}{plural} ago");
        }
    }

    "Just now".to_string()
}

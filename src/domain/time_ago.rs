//! Relative "time ago" phrasing for note timestamps.

use chrono::{DateTime, Utc};

const UNITS: [(i64, &str); 7] = [
    (31_536_000, "year"),
    (2_592_000, "month"),
    (604_800, "week"),
    (86_400, "day"),
    (3_600, "hour"),
    (60, "minute"),
    (1, "second"),
];

/// Describes how long ago `then` was relative to `now`, e.g. `"2 minutes"`.
///
/// Elapsed time is floored at one second, so timestamps in the future read as
/// `"1 second"`. The count is rounded to the nearest whole unit, ties to even.
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    time_ago_secs(then.timestamp(), now.timestamp())
}

/// Same as [`time_ago`] for raw Unix timestamps.
pub fn time_ago_secs(then: i64, now: i64) -> String {
    let elapsed = now.saturating_sub(then).max(1);

    for (unit, name) in UNITS {
        if elapsed < unit {
            continue;
        }
        let count = (elapsed as f64 / unit as f64).round_ties_even() as i64;
        let plural = if count > 1 { "s" } else { "" };
        return format!("{count} {name}{plural}");
    }

    "just now".to_string()
}

//! # Human phrasing for log and example output.
//!
//! Small formatting helpers used by [`LogWriter`](crate::LogWriter) and the
//! example schedule:
//! - [`ordinal`] `1st`, `2nd`, `11th`, `23rd`
//! - [`plural`] `1 attempt`, `3 attempts`
//! - [`relative`] `now`, `3 seconds ago`, `2 minutes from now`
//! - [`duration`] compact `1h2m3s` / `1.5s` / `250ms`
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use retryvisor::humanize::{self, Tense};
//!
//! assert_eq!(humanize::ordinal(22), "22nd");
//! assert_eq!(humanize::plural(1, "attempt"), "1 attempt");
//! assert_eq!(humanize::relative(Duration::from_secs(90), Tense::Past), "1 minute ago");
//! assert_eq!(humanize::duration(Duration::from_millis(61_500)), "1m1.5s");
//! ```

use std::time::Duration;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const WEEK: u64 = 7 * DAY;

/// Direction of a relative time phrase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tense {
    /// `... ago`
    Past,
    /// `... from now`
    Future,
}

impl Tense {
    fn suffix(self) -> &'static str {
        match self {
            Tense::Past => "ago",
            Tense::Future => "from now",
        }
    }
}

/// English ordinal for `n` (`1st`, `2nd`, `3rd`, `4th`, `11th`, `21st`, ...).
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// `n` followed by `noun`, pluralized with a trailing `s` when `n != 1`.
pub fn plural(n: u32, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

/// Phrases a distance in time relative to now.
///
/// Anything under a second is `now`; larger spans are truncated to the
/// biggest whole unit (seconds, minutes, hours, days, weeks).
pub fn relative(d: Duration, tense: Tense) -> String {
    let secs = d.as_secs();
    if secs == 0 {
        return "now".to_string();
    }

    let (amount, unit) = match secs {
        s if s < MINUTE => (s, "second"),
        s if s < HOUR => (s / MINUTE, "minute"),
        s if s < DAY => (s / HOUR, "hour"),
        s if s < WEEK => (s / DAY, "day"),
        s => (s / WEEK, "week"),
    };
    let amount = u32::try_from(amount).unwrap_or(u32::MAX);
    format!("{} {}", plural(amount, unit), tense.suffix())
}

/// Compact duration: `250ms`, `2s`, `1.5s`, `1m30s`, `2h0m5s`.
///
/// Precision stops at milliseconds; sub-millisecond spans print as `0s`.
pub fn duration(d: Duration) -> String {
    let total_ms = d.as_millis();
    if total_ms == 0 {
        return "0s".to_string();
    }
    if total_ms < 1000 {
        return format!("{total_ms}ms");
    }

    let secs = d.as_secs();
    let (h, m, s) = (secs / HOUR, (secs % HOUR) / MINUTE, secs % MINUTE);
    let millis = d.subsec_millis();

    let seconds = if millis == 0 {
        format!("{s}s")
    } else {
        let frac = format!("{millis:03}");
        format!("{s}.{}s", frac.trim_end_matches('0'))
    };

    match (h, m) {
        (0, 0) => seconds,
        (0, m) => format!("{m}m{seconds}"),
        (h, m) => format!("{h}h{m}m{seconds}"),
    }
}

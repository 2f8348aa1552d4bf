use chrono::{Local, TimeZone, Utc};

pub trait Clock: Send {
    /// Current time in epoch milliseconds
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Renders how long ago `timestamp` was, both in epoch milliseconds.
///
/// Under an hour reads "<m> minutes ago", under a day "<h> hours ago",
/// anything older falls back to the local calendar date.
pub fn time_posted(timestamp: i64, now: i64) -> String {
    let minutes = (now - timestamp).max(0) / 60_000;
    if minutes < 60 {
        return format!("{} minutes ago", minutes);
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{} hours ago", hours);
    }
    calendar_date(timestamp)
}

fn calendar_date(timestamp: i64) -> String {
    match Local.timestamp_millis_opt(timestamp).single() {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => String::from("unknown date"),
    }
}

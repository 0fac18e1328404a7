// Display helpers for note and assignment dates

use chrono::{DateTime, Utc};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// "Oct 16, 3:04 PM"
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %-I:%M %p").to_string()
}

/// "Today", "Tomorrow", otherwise "Oct 16"
pub fn format_due_date(due: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let today = now.date_naive();
    let due_day = due.date_naive();

    if due_day == today {
        "Today".to_string()
    } else if today.succ_opt() == Some(due_day) {
        "Tomorrow".to_string()
    } else {
        due.format("%b %-d").to_string()
    }
}

/// Due within the next three days, counting partial days up
pub fn is_due_soon(due: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    let millis = (due - now).num_milliseconds() as f64;
    let days = (millis / MILLIS_PER_DAY).ceil();
    (0.0..=3.0).contains(&days)
}

pub fn is_overdue(due: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    due < now
}

use chrono::{NaiveDateTime, NaiveTime, Timelike};

use crate::Session;

/// Time-of-day salutation: morning before noon, afternoon before 17:00.
pub fn salutation(time: NaiveTime) -> &'static str {
    match time.hour() {
        0..=11 => "Good Morning",
        12..=16 => "Good Afternoon",
        _ => "Good Evening",
    }
}

/// Dashboard header line, e.g. `Good Morning, Lisa!`.
pub fn greeting(session: &Session, time: NaiveTime) -> String {
    format!("{}, {}!", salutation(time), session.first_name())
}

/// Long date for the dashboard header, e.g. `Monday, January 15, 2024`.
pub fn format_date(now: NaiveDateTime) -> String {
    now.format("%A, %B %-d, %Y").to_string()
}

/// Wall-clock time for the dashboard header, e.g. `09:05`.
pub fn format_time(now: NaiveDateTime) -> String {
    now.format("%H:%M").to_string()
}

//! Date formatting helpers (`yyyy-MM-dd` / `yyyy-MM-dd HH:mm:ss`)

use chrono::{Local, NaiveDate, NaiveDateTime, ParseResult};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse(s: &str) -> ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
}

/// Today's date in the local time zone.
pub fn today() -> String {
    format(Local::now().date_naive())
}

/// Signed number of days from `from` to `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

pub fn format_date_time(date_time: NaiveDateTime) -> String {
    date_time.format(DATE_TIME_FORMAT).to_string()
}

pub fn parse_date_time(s: &str) -> ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, DATE_TIME_FORMAT)
}

//! Date and time literal builders.
//!
//! Component builders format a string literal and never validate the calendar:
//! `date(2021, Month::February, 30)` renders as-is and the database decides.
//! The `*_t` builders bind the native chrono value instead.

use chrono::{DateTime, FixedOffset, Month, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::warn;

use super::literals::literal_node;
use crate::ast::typed::{
    DateExpression, TimeExpression, TimestampExpression, TimestampzExpression, TimezExpression,
    TypedExpression,
};

/// `.mmm`, zero padded below 1000. Larger values are appended unpadded.
fn format_millis(millis: Option<u32>) -> String {
    match millis {
        None => String::new(),
        Some(ms) if ms < 1000 => format!(".{:03}", ms),
        Some(ms) => {
            warn!(millis = ms, "milliseconds component exceeds 999, emitted unpadded");
            format!(".{}", ms)
        }
    }
}

/// `HH:MM:SS[.mmm]`
pub fn time(hour: u32, minute: u32, second: u32, millis: Option<u32>) -> TimeExpression {
    let time_str = format!("{:02}:{:02}:{:02}{}", hour, minute, second, format_millis(millis));
    TimeExpression::from_node(literal_node(time_str))
}

pub fn time_t(t: NaiveTime) -> TimeExpression {
    TimeExpression::from_node(literal_node(t))
}

/// `HH:MM:SS.mmm ±ZZ`, zone in whole hours.
pub fn timez(hour: u32, minute: u32, second: u32, millis: u32, timezone: i32) -> TimezExpression {
    let time_str = format!(
        "{:02}:{:02}:{:02}{} {:+03}",
        hour,
        minute,
        second,
        format_millis(Some(millis)),
        timezone
    );
    TimezExpression::from_node(literal_node(time_str))
}

/// Binds the full timestamp; the database keeps the time part and offset.
pub fn timez_t(t: DateTime<FixedOffset>) -> TimezExpression {
    TimezExpression::from_node(literal_node(t))
}

/// `YYYY-MM-DD`
pub fn date(year: i32, month: Month, day: u32) -> DateExpression {
    let date_str = format!("{:04}-{:02}-{:02}", year, month.number_from_month(), day);
    DateExpression::from_node(literal_node(date_str))
}

pub fn date_t(d: NaiveDate) -> DateExpression {
    DateExpression::from_node(literal_node(d))
}

/// `YYYY-MM-DD HH:MM:SS[.mmm]`
pub fn timestamp(
    year: i32,
    month: Month,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    millis: Option<u32>,
) -> TimestampExpression {
    let ts_str = format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}{}",
        year,
        month.number_from_month(),
        day,
        hour,
        minute,
        second,
        format_millis(millis)
    );
    TimestampExpression::from_node(literal_node(ts_str))
}

pub fn timestamp_t(ts: NaiveDateTime) -> TimestampExpression {
    TimestampExpression::from_node(literal_node(ts))
}

/// `YYYY-MM-DD HH:MM:SS.mmm ±ZZZZ`, zone as `hhmm` (e.g. `200` for +02:00).
#[allow(clippy::too_many_arguments)]
pub fn timestampz(
    year: i32,
    month: Month,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    millis: u32,
    timezone: i32,
) -> TimestampzExpression {
    let ts_str = format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}{} {:+05}",
        year,
        month.number_from_month(),
        day,
        hour,
        minute,
        second,
        format_millis(Some(millis)),
        timezone
    );
    TimestampzExpression::from_node(literal_node(ts_str))
}

pub fn timestampz_t(ts: DateTime<FixedOffset>) -> TimestampzExpression {
    TimestampzExpression::from_node(literal_node(ts))
}

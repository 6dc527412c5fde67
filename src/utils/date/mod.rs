// Date utility functions
// Time-of-day parsing/formatting and calendar arithmetic shared by the store and views

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike};

/// Last representable minute of a day. Used where "hour + 1" would cross midnight.
pub fn end_of_day_time() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 0).unwrap_or(NaiveTime::MIN)
}

/// Parse a local time of day written as `HH:MM` (or `HH:MM:SS`).
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

/// Format a time of day as `HH:MM`.
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Parse a calendar date written as `YYYY-MM-DD`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// The time `hour:00`, or `None` for hours past 23.
pub fn hour_start(hour: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(hour, 0, 0)
}

/// `start + duration`, clamped to 23:59 if the result would wrap past midnight.
pub fn add_clamped(start: NaiveTime, duration: Duration) -> NaiveTime {
    let (end, wrapped_secs) = start.overflowing_add_signed(duration);
    if wrapped_secs != 0 || end < start {
        end_of_day_time()
    } else {
        end
    }
}

/// One hour after `start`, clamped to the end of the day.
pub fn one_hour_after(start: NaiveTime) -> NaiveTime {
    add_clamped(start, Duration::hours(1))
}

/// Default block for an event with no explicit end: one hour, clamped to
/// 23:59. Starts at or after 23:59 are pulled back to 23:58.
pub fn default_block(start: NaiveTime) -> (NaiveTime, NaiveTime) {
    let end = one_hour_after(start);
    if end > start {
        (start, end)
    } else {
        (end - Duration::minutes(1), end)
    }
}

/// Hour component used to place an event in an hourly grid row.
/// Minutes are truncated: 09:45 belongs to the 9 o'clock row.
pub fn placement_hour(time: NaiveTime) -> u32 {
    time.hour()
}

/// Number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`.
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(days_in_month(date.year(), date.month()))
        .unwrap_or(date)
}

/// Shift a date by whole months, clamping the day to the target month's length
/// (Jan 31 + 1 month = Feb 28/29).
pub fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let total_months = (date.year() * 12) + (date.month() as i32 - 1) + delta;
    let new_year = total_months.div_euclid(12);
    let new_month = (total_months.rem_euclid(12) + 1) as u32;
    let day = date.day().min(days_in_month(new_year, new_month));
    NaiveDate::from_ymd_opt(new_year, new_month, day).unwrap_or(date)
}

/// Serde adapter storing `NaiveTime` as `HH:MM`.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_time(*time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_time(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid time of day '{}'", raw)))
    }
}

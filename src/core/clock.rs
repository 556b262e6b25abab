//! Date and time-of-day helpers for the `DD.MM.YYYY, HH:MM` timestamp field

use chrono::{Datelike, NaiveDate};

use crate::error::FormatError;

const TIMESTAMP_SEPARATOR: &str = ", ";

fn parse_number<T: std::str::FromStr>(segment: &str) -> Option<T> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

/// Parse a `DD.MM.YYYY` date field
pub(crate) fn parse_date(field: &str) -> Result<NaiveDate, FormatError> {
    let invalid = || FormatError::Date {
        input: field.to_string(),
    };
    let mut parts = field.split('.');
    let (Some(day), Some(month), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };
    let day = parse_number::<u32>(day).ok_or_else(invalid)?;
    let month = parse_number::<u32>(month).ok_or_else(invalid)?;
    let year = parse_number::<i32>(year).ok_or_else(invalid)?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Parse an `HH:MM` field into minutes since midnight.
///
/// This is a time of day, not a duration: subtracting two values across
/// midnight yields a negative difference.
pub(crate) fn parse_clock_minutes(field: &str) -> Result<u32, FormatError> {
    let invalid = || FormatError::Time {
        input: field.to_string(),
    };
    let (hour, minute) = field.split_once(':').ok_or_else(invalid)?;
    let hour = parse_number::<u32>(hour).ok_or_else(invalid)?;
    let minute = parse_number::<u32>(minute).ok_or_else(invalid)?;
    if hour > 23 || minute > 59 {
        return Err(invalid());
    }
    Ok(hour * 60 + minute)
}

/// Split `DD.MM.YYYY, HH:MM` into its date and time fields
pub(crate) fn split_timestamp(text: &str) -> Result<(&str, &str), FormatError> {
    text.split_once(TIMESTAMP_SEPARATOR)
        .ok_or_else(|| FormatError::Timestamp {
            input: text.to_string(),
        })
}

/// Parsed form of a message's timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Timestamp {
    pub(crate) date: NaiveDate,
    /// Minutes since local midnight
    pub(crate) minutes: u32,
}

impl Timestamp {
    pub(crate) fn parse(text: &str) -> Result<Self, FormatError> {
        let (date, time) = split_timestamp(text)?;
        Ok(Timestamp {
            date: parse_date(date)?,
            minutes: parse_clock_minutes(time)?,
        })
    }

    pub(crate) fn hour(&self) -> u32 {
        self.minutes / 60
    }

    /// Day of month (1-31), the unit conversation boundaries compare on
    pub(crate) fn day_of_month(&self) -> u32 {
        self.date.day()
    }
}

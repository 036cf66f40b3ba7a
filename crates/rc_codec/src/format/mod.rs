//! Text forms of the built-in date and time scalars.
//!
//! The forms follow ECMA-262 date strings:
//!
//! - Fractional seconds are written only when the value has a sub-second part
//!   of at least one microsecond, truncated to milliseconds (`.157`).
//! - A zero UTC offset is written `Z`, other offsets `+HH:MM`.
//! - Naive values carry no offset suffix.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use rc_codec::format;
//!
//! let at = Utc.with_ymd_and_hms(2021, 4, 23, 9, 5, 16).unwrap();
//! assert_eq!(format::write_utc_datetime(&at), "2021-04-23T09:05:16Z");
//! assert_eq!(format::parse_utc_datetime("2021-04-23T09:05:16Z").unwrap(), at);
//! ```

use core::fmt::Write;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, ParseResult, Timelike, Utc};

mod time_of_day;

pub use time_of_day::TimeOfDay;

const DATE: &str = "%Y-%m-%d";
const TIME: &str = "%H:%M:%S";
const TIME_FRACTION: &str = "%H:%M:%S%.f";
const TIME_MINUTES: &str = "%H:%M";
const DATETIME: &str = "%Y-%m-%dT%H:%M:%S";
const DATETIME_FRACTION: &str = "%Y-%m-%dT%H:%M:%S%.f";

// -----------------------------------------------------------------------------
// Writers

fn push_fraction(out: &mut String, nanos: u32) {
    // A leap second is reported as nanos >= 1_000_000_000.
    let nanos = nanos % 1_000_000_000;
    if nanos / 1_000 != 0 {
        let _ = write!(out, ".{:03}", nanos / 1_000_000);
    }
}

pub fn write_date(date: &NaiveDate) -> String {
    date.format(DATE).to_string()
}

pub fn write_time(time: &NaiveTime) -> String {
    let mut out = time.format(TIME).to_string();
    push_fraction(&mut out, time.nanosecond());
    out
}

pub fn write_naive_datetime(datetime: &NaiveDateTime) -> String {
    let mut out = datetime.format(DATETIME).to_string();
    push_fraction(&mut out, datetime.nanosecond());
    out
}

/// Always ends in `Z`.
pub fn write_utc_datetime(datetime: &DateTime<Utc>) -> String {
    let mut out = write_naive_datetime(&datetime.naive_utc());
    out.push('Z');
    out
}

/// Writes the local time of the offset, then `Z` or `+HH:MM`.
pub fn write_fixed_datetime(datetime: &DateTime<FixedOffset>) -> String {
    let mut out = write_naive_datetime(&datetime.naive_local());
    push_offset(&mut out, datetime.offset());
    out
}

fn push_offset(out: &mut String, offset: &FixedOffset) {
    if offset.local_minus_utc() == 0 {
        out.push('Z');
    } else {
        let _ = write!(out, "{offset}");
    }
}

// -----------------------------------------------------------------------------
// Parsers

pub fn parse_date(text: &str) -> ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE)
}

/// Accepts `HH:MM`, `HH:MM:SS` and any number of fractional digits.
pub fn parse_time(text: &str) -> ParseResult<NaiveTime> {
    NaiveTime::parse_from_str(text, TIME_FRACTION)
        .or_else(|err| NaiveTime::parse_from_str(text, TIME_MINUTES).map_err(|_| err))
}

pub fn parse_naive_datetime(text: &str) -> ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, DATETIME_FRACTION)
}

/// Accepts any offset, and reads a value without offset as UTC.
pub fn parse_utc_datetime(text: &str) -> ParseResult<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(text) {
        Ok(datetime) => Ok(datetime.with_timezone(&Utc)),
        Err(err) => parse_naive_datetime(text)
            .map(|datetime| datetime.and_utc())
            .map_err(|_| err),
    }
}

/// Requires an offset, `Z` or `±HH:MM`.
pub fn parse_fixed_datetime(text: &str) -> ParseResult<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(text)
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};

    use super::*;

    #[test]
    fn fraction_is_truncated_to_millis() {
        let at = Utc
            .with_ymd_and_hms(2021, 4, 23, 9, 5, 16)
            .unwrap()
            .with_nanosecond(157_178_000)
            .unwrap();
        assert_eq!(write_utc_datetime(&at), "2021-04-23T09:05:16.157Z");

        let back = parse_utc_datetime("2021-04-23T09:05:16.157Z").unwrap();
        assert_eq!(back.nanosecond(), 157_000_000);
        assert_eq!(back, at.with_nanosecond(157_000_000).unwrap());
    }

    #[test]
    fn sub_millisecond_fraction_keeps_zero_millis() {
        let time = NaiveTime::from_hms_micro_opt(9, 5, 16, 420).unwrap();
        assert_eq!(write_time(&time), "09:05:16.000");

        // Below one microsecond there is no fraction.
        let time = NaiveTime::from_hms_nano_opt(9, 5, 16, 999).unwrap();
        assert_eq!(write_time(&time), "09:05:16");
    }

    #[test]
    fn offsets() {
        let zero = FixedOffset::east_opt(0).unwrap();
        let at = zero.with_ymd_and_hms(2021, 4, 23, 9, 5, 16).unwrap();
        assert_eq!(write_fixed_datetime(&at), "2021-04-23T09:05:16Z");

        let east = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let at = east.with_ymd_and_hms(2021, 4, 23, 9, 5, 16).unwrap();
        assert_eq!(write_fixed_datetime(&at), "2021-04-23T09:05:16+05:30");
        assert_eq!(parse_fixed_datetime("2021-04-23T09:05:16+05:30").unwrap(), at);

        assert!(parse_fixed_datetime("2021-04-23T09:05:16").is_err());
    }

    #[test]
    fn naive_values() {
        let date = NaiveDate::from_ymd_opt(2021, 4, 23).unwrap();
        assert_eq!(write_date(&date), "2021-04-23");
        assert_eq!(parse_date("2021-04-23").unwrap(), date);

        let datetime = date.and_hms_opt(9, 5, 16).unwrap();
        assert_eq!(write_naive_datetime(&datetime), "2021-04-23T09:05:16");
        assert_eq!(parse_naive_datetime("2021-04-23T09:05:16").unwrap(), datetime);

        // No offset is read as UTC.
        let utc = parse_utc_datetime("2021-04-23T09:05:16").unwrap();
        assert_eq!(utc.naive_utc(), datetime);
    }

    #[test]
    fn time_accepts_minutes() {
        let time = parse_time("09:05").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(9, 5, 0).unwrap());
        assert!(parse_time("9h05").is_err());
    }
}

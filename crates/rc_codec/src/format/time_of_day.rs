use chrono::{FixedOffset, NaiveTime, ParseResult};

use crate::format;

/// A time of day, optionally with a UTC offset.
///
/// Only the naive form has a text representation: encoding a value that
/// carries an offset fails, while text with an offset suffix still parses.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use rc_codec::format::TimeOfDay;
///
/// let time = TimeOfDay::parse("09:05:16+02:00").unwrap();
/// assert_eq!(time.time, NaiveTime::from_hms_opt(9, 5, 16).unwrap());
/// assert_eq!(time.offset.unwrap().local_minus_utc(), 7200);
///
/// assert!(time.to_text().is_none());
/// assert_eq!(TimeOfDay::from(time.time).to_text().unwrap(), "09:05:16");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeOfDay {
    pub time: NaiveTime,
    pub offset: Option<FixedOffset>,
}

impl TimeOfDay {
    #[inline]
    pub const fn new(time: NaiveTime, offset: Option<FixedOffset>) -> Self {
        Self { time, offset }
    }

    /// Returns `true` if the value carries a UTC offset.
    #[inline]
    pub const fn is_aware(&self) -> bool {
        self.offset.is_some()
    }

    /// Returns the text form, `None` if the value carries an offset.
    pub fn to_text(&self) -> Option<String> {
        match self.offset {
            Some(_) => None,
            None => Some(format::write_time(&self.time)),
        }
    }

    /// Parses `HH:MM[:SS[.fff]]` followed by an optional `Z` or `±HH:MM`.
    pub fn parse(text: &str) -> ParseResult<Self> {
        if let Some(time) = text.strip_suffix('Z') {
            return Ok(Self::new(format::parse_time(time)?, FixedOffset::east_opt(0)));
        }
        match text.find(['+', '-']) {
            Some(at) => {
                let (time, offset) = text.split_at(at);
                Ok(Self::new(format::parse_time(time)?, Some(offset.parse()?)))
            }
            None => Ok(Self::new(format::parse_time(text)?, None)),
        }
    }
}

impl From<NaiveTime> for TimeOfDay {
    #[inline]
    fn from(time: NaiveTime) -> Self {
        Self::new(time, None)
    }
}

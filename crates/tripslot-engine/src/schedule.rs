//! Weekly opening-hours data model.
//!
//! A [`WeeklySchedule`] maps each weekday to an optional [`DayHours`] entry. The
//! entry keeps the raw `"HH:MM"` strings received from the places source; they
//! are parsed into [`TimeOfDay`] only when an availability check needs them, so
//! one malformed record can be carried through a batch without failing it.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Timelike, Utc, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{HoursError, Result};

/// Minutes in one day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Local wall-clock time, stored as minutes since midnight (0..=1439).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Build from hour (0..=23) and minute (0..=59).
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(HoursError::InvalidTime(format!("{}:{:02}", hour, minute)));
        }
        Ok(Self((hour * 60 + minute) as u16))
    }

    /// Build from minutes since midnight.
    pub fn from_minutes(minutes: u16) -> Result<Self> {
        if minutes >= MINUTES_PER_DAY {
            return Err(HoursError::InvalidTime(format!("{} minutes", minutes)));
        }
        Ok(Self(minutes))
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl FromStr for TimeOfDay {
    type Err = HoursError;

    /// Parse `H:MM` or `HH:MM`. Minutes must be exactly two digits.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || HoursError::InvalidTime(s.to_string());

        let (h, m) = s.split_once(':').ok_or_else(invalid)?;
        let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !digits(h) || h.len() > 2 || !digits(m) || m.len() != 2 {
            return Err(invalid());
        }

        let hour: u32 = h.parse().map_err(|_| invalid())?;
        let minute: u32 = m.parse().map_err(|_| invalid())?;
        Self::from_hm(hour, minute).map_err(|_| invalid())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One day's opening window, as supplied by the places source.
///
/// `close` earlier than `open` marks a window that runs past midnight.
///
/// Boundaries of any JSON type are accepted: non-strings are kept in their
/// JSON text form and a missing boundary is empty, so all of them fail in
/// [`window`](Self::window) rather than while reading the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    #[serde(default, deserialize_with = "raw_boundary")]
    pub open: String,
    #[serde(default, deserialize_with = "raw_boundary")]
    pub close: String,
}

fn raw_boundary<'de, D: serde::Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<String, D::Error> {
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

impl DayHours {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Parse both boundaries.
    ///
    /// # Errors
    /// Returns `HoursError::InvalidTime` naming the first malformed boundary.
    pub fn window(&self) -> Result<(TimeOfDay, TimeOfDay)> {
        Ok((self.open.parse()?, self.close.parse()?))
    }
}

/// Per-weekday opening hours. A missing day means closed all day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunday: Option<DayHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monday: Option<DayHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuesday: Option<DayHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wednesday: Option<DayHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thursday: Option<DayHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friday: Option<DayHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturday: Option<DayHours>,
}

impl WeeklySchedule {
    /// The same window on all seven days.
    pub fn every_day(open: &str, close: &str) -> Self {
        let mut schedule = Self::default();
        for weekday in WEEK {
            schedule.set(weekday, Some(DayHours::new(open, close)));
        }
        schedule
    }

    pub fn day(&self, weekday: Weekday) -> Option<&DayHours> {
        match weekday {
            Weekday::Sun => self.sunday.as_ref(),
            Weekday::Mon => self.monday.as_ref(),
            Weekday::Tue => self.tuesday.as_ref(),
            Weekday::Wed => self.wednesday.as_ref(),
            Weekday::Thu => self.thursday.as_ref(),
            Weekday::Fri => self.friday.as_ref(),
            Weekday::Sat => self.saturday.as_ref(),
        }
    }

    pub fn set(&mut self, weekday: Weekday, hours: Option<DayHours>) {
        let slot = match weekday {
            Weekday::Sun => &mut self.sunday,
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
        };
        *slot = hours;
    }

    /// Builder form of [`set`](Self::set).
    pub fn with_day(mut self, weekday: Weekday, open: &str, close: &str) -> Self {
        self.set(weekday, Some(DayHours::new(open, close)));
        self
    }

    /// Builder form that removes a day.
    pub fn without_day(mut self, weekday: Weekday) -> Self {
        self.set(weekday, None);
        self
    }
}

/// Weekdays in schedule key order, Sunday first.
pub const WEEK: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// The `(date, time)` pair an availability check is evaluated at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryMoment {
    pub date: NaiveDate,
    pub time: TimeOfDay,
}

impl QueryMoment {
    pub fn new(date: NaiveDate, time: TimeOfDay) -> Self {
        Self { date, time }
    }

    /// Parse `YYYY-MM-DD` and `HH:MM`.
    pub fn parse(date: &str, time: &str) -> Result<Self> {
        Ok(Self::new(parse_date(date)?, time.parse()?))
    }

    /// Truncates seconds.
    pub fn from_naive(dt: NaiveDateTime) -> Self {
        Self {
            date: dt.date(),
            time: TimeOfDay((dt.hour() * 60 + dt.minute()) as u16),
        }
    }

    /// The current wall-clock moment on the host's local clock.
    pub fn now_local() -> Self {
        Self::from_naive(Local::now().naive_local())
    }

    /// The current wall-clock moment in the given IANA timezone.
    pub fn now_in(tz: Tz) -> Self {
        Self::from_naive(Utc::now().with_timezone(&tz).naive_local())
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| HoursError::InvalidDate(s.to_string()))
}

/// Parse an IANA timezone name.
pub fn parse_timezone(s: &str) -> Result<Tz> {
    s.parse()
        .map_err(|_| HoursError::InvalidTimezone(s.to_string()))
}

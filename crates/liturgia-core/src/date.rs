//! Canonical calendar-day keys.
//!
//! Every date that enters the engine is reduced to a [`CanonicalDate`], the
//! `YYYY-MM-DD` key used to join season rules with event facts. Strings are
//! never routed through a zone-aware parser: an ISO datetime keeps the day it
//! was written with, and date objects contribute their local calendar fields.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, TimeZone, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DateError;

const MIN_YEAR: i32 = 0;
const MAX_YEAR: i32 = 9999;

/// A timezone-independent calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalDate(NaiveDate);

impl CanonicalDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            DateError::InvalidDateFormat(format!("{:04}-{:02}-{:02}", year, month, day))
        })?;
        Self::try_from(date)
    }

    /// Like `try_from`, but pins out-of-range dates to the nearest supported day.
    pub fn saturating_from(date: NaiveDate) -> Self {
        let bound = if date.year() > MAX_YEAR {
            NaiveDate::from_ymd_opt(MAX_YEAR, 12, 31)
        } else if date.year() < MIN_YEAR {
            NaiveDate::from_ymd_opt(MIN_YEAR, 1, 1)
        } else {
            None
        };
        CanonicalDate(bound.unwrap_or(date))
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// The date `days` later, or `None` past the supported range.
    pub fn checked_add_days(&self, days: u32) -> Option<Self> {
        self.0
            .checked_add_days(Days::new(u64::from(days)))
            .and_then(|d| Self::try_from(d).ok())
    }

    pub fn checked_sub_days(&self, days: u32) -> Option<Self> {
        self.0
            .checked_sub_days(Days::new(u64::from(days)))
            .and_then(|d| Self::try_from(d).ok())
    }

    /// Signed number of days from `other` to `self`.
    pub fn days_since(&self, other: CanonicalDate) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl TryFrom<NaiveDate> for CanonicalDate {
    type Error = DateError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
            return Err(DateError::OutOfRange(date.to_string()));
        }
        Ok(CanonicalDate(date))
    }
}

impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl FromStr for CanonicalDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(s)
    }
}

impl Serialize for CanonicalDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CanonicalDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        normalize(raw.as_str()).map_err(serde::de::Error::custom)
    }
}

/// Anything a caller may hand the engine as "a date".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    Text(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        DateInput::Text(s.to_string())
    }
}

impl From<String> for DateInput {
    fn from(s: String) -> Self {
        DateInput::Text(s)
    }
}

impl From<&String> for DateInput {
    fn from(s: &String) -> Self {
        DateInput::Text(s.clone())
    }
}

impl From<NaiveDate> for DateInput {
    fn from(d: NaiveDate) -> Self {
        DateInput::Date(d)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(dt: NaiveDateTime) -> Self {
        DateInput::DateTime(dt)
    }
}

impl From<CanonicalDate> for DateInput {
    fn from(d: CanonicalDate) -> Self {
        DateInput::Date(d.0)
    }
}

/// Zoned datetimes contribute the calendar fields of their own zone.
impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput {
    fn from(dt: DateTime<Tz>) -> Self {
        DateInput::DateTime(dt.naive_local())
    }
}

/// Reduce any date input to its canonical day key.
pub fn normalize(input: impl Into<DateInput>) -> Result<CanonicalDate, DateError> {
    match input.into() {
        DateInput::Text(text) => normalize_text(&text),
        DateInput::Date(date) => CanonicalDate::try_from(date),
        DateInput::DateTime(dt) => CanonicalDate::try_from(dt.date()),
    }
}

fn normalize_text(text: &str) -> Result<CanonicalDate, DateError> {
    // An ISO datetime keeps its written day; the time part is discarded unread.
    let day_part = match text.split_once('T') {
        Some((day, _)) => day,
        None => text,
    };

    if !is_canonical_pattern(day_part) {
        return Err(DateError::InvalidDateFormat(text.to_string()));
    }

    let year = day_part[0..4].parse::<i32>();
    let month = day_part[5..7].parse::<u32>();
    let day = day_part[8..10].parse::<u32>();
    match (year, month, day) {
        (Ok(y), Ok(m), Ok(d)) => NaiveDate::from_ymd_opt(y, m, d)
            .map(CanonicalDate)
            .ok_or_else(|| DateError::InvalidDateFormat(text.to_string())),
        _ => Err(DateError::InvalidDateFormat(text.to_string())),
    }
}

fn is_canonical_pattern(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// An inclusive span of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: CanonicalDate,
    pub end: CanonicalDate,
}

impl DateRange {
    pub fn new(start: CanonicalDate, end: CanonicalDate) -> Self {
        Self { start, end }
    }

    pub fn single(date: CanonicalDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Full month, its last day found as "day 0 of the next month".
    pub fn month(year: i32, month: u32) -> Result<Self, DateError> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(DateError::InvalidMonth { year, month })?;
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .ok_or(DateError::InvalidMonth { year, month })?;

        Ok(Self {
            start: CanonicalDate::try_from(first)?,
            end: CanonicalDate::try_from(last)?,
        })
    }

    pub fn contains(&self, date: CanonicalDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of days covered (0 when empty).
    pub fn len(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            (self.end.days_since(self.start) + 1) as u32
        }
    }

    pub fn days(&self) -> impl Iterator<Item = CanonicalDate> + '_ {
        (0..self.len()).filter_map(move |offset| self.start.checked_add_days(offset))
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// An inclusive span of whole years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearRange {
    pub first: i32,
    pub last: i32,
}

impl YearRange {
    pub fn new(a: i32, b: i32) -> Self {
        Self {
            first: a.min(b),
            last: a.max(b),
        }
    }

    pub fn single(year: i32) -> Self {
        Self {
            first: year,
            last: year,
        }
    }

    /// `[first-01-01, last-12-31]`.
    pub fn to_date_range(&self) -> Result<DateRange, DateError> {
        Ok(DateRange {
            start: CanonicalDate::from_ymd(self.first, 1, 1)?,
            end: CanonicalDate::from_ymd(self.last, 12, 31)?,
        })
    }
}

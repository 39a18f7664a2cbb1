//! `Date` type.
//!
//! Dates are stored as a serial number of days since the Unix epoch
//! (1970-01-01 = serial 0) in the proleptic Gregorian calendar.  A `Date`
//! carries no time of day and no zone, so day-difference arithmetic is never
//! disturbed by daylight-saving transitions and two dates compare equal
//! exactly when they name the same calendar day.
//!
//! # Range
//! * Valid dates run from `-9999-01-01` to `9999-12-31`.
//! * Calendars and holiday catalogs are built for [`SUPPORTED_YEARS`], one
//!   year narrower on each side so that padding days from adjacent years are
//!   always representable.

use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, TimeZone};
use fc_core::errors::{Error, Result};

use crate::month::Month;
use crate::weekday::Weekday;

/// Smallest representable year.
pub const MIN_YEAR: i32 = -9999;

/// Largest representable year.
pub const MAX_YEAR: i32 = 9999;

/// Years for which calendar grids and holiday catalogs can be built.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = (MIN_YEAR + 1)..=(MAX_YEAR - 1);

/// A calendar date represented as a serial day number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, -9999.
    pub const MIN: Date = Date(days_from_civil(MIN_YEAR, 1, 1));

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(days_from_civil(MAX_YEAR, 12, 31));

    /// The Unix epoch, 1970-01-01.
    pub const EPOCH: Date = Date(0);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number (days since 1970-01-01).
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!("serial {serial} out of range")));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(days_from_civil(year, month, day)))
    }

    /// Create a date from a chrono [`NaiveDate`].
    pub fn from_naive(date: NaiveDate) -> Result<Self> {
        Self::from_ymd(date.year(), date.month() as u8, date.day() as u8)
    }

    /// The calendar day of `datetime` in its own zone, time of day dropped.
    ///
    /// Two timestamps on the same local calendar day map to the same `Date`.
    pub fn from_datetime<Tz: TimeZone>(datetime: &chrono::DateTime<Tz>) -> Result<Self> {
        Self::from_naive(datetime.date_naive())
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year.
    pub fn year(&self) -> i32 {
        civil_from_days(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        civil_from_days(self.0).1
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        Month::from_number(self.month()).unwrap_or(Month::January)
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        civil_from_days(self.0).2
    }

    /// Return `(year, month, day)` in one decomposition.
    pub fn ymd(&self) -> (i32, u8, u8) {
        civil_from_days(self.0)
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let y = self.year();
        (self.0 - days_from_civil(y, 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // 1970-01-01 is a Thursday (ordinal 4).
        let w = ((self.0 + 3).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).unwrap_or(Weekday::Monday)
    }

    /// Return `true` on Saturdays and Sundays.
    pub fn is_weekend(&self) -> bool {
        self.weekday().is_weekend()
    }

    /// Convert to a chrono [`NaiveDate`].
    pub fn to_naive(self) -> NaiveDate {
        let (y, m, d) = self.ymd();
        // chrono covers a far wider range than `Date`.
        NaiveDate::from_ymd_opt(y, m as u32, d as u32).unwrap_or_default()
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self
            .0
            .checked_add(n)
            .ok_or_else(|| Error::Date("date arithmetic overflow".into()))?;
        Self::from_serial(serial)
            .map_err(|_| Error::Date(format!("date arithmetic: {self:?} + {n} days out of range")))
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the first day of the month containing this date.
    pub fn start_of_month(self) -> Self {
        let (y, m, _) = self.ymd();
        Date(days_from_civil(y, m, 1))
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = self.ymd();
        Date(days_from_civil(y, m, days_in_month(y, m)))
    }

    /// Return the Monday on or before this date.
    pub fn start_of_week(self) -> Result<Self> {
        self.add_days(1 - self.weekday().ordinal() as i32)
    }

    /// Return the *n*-th occurrence of `weekday` in `year`/`month`.
    ///
    /// For example, `nth_weekday(4, Weekday::Thursday, 2024, 11)` returns the
    /// fourth Thursday of November 2024 (2024-11-28).
    ///
    /// # Errors
    /// Returns an error if `n` is zero or larger than the number of such
    /// weekdays in the month.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: i32, month: u8) -> Result<Self> {
        if !(1..=5).contains(&n) {
            return Err(Error::Date(format!("nth_weekday: n = {n} out of range [1, 5]")));
        }
        let first = Date::from_ymd(year, month, 1)?;
        let first_wd = first.weekday().ordinal();
        let target_wd = weekday.ordinal();
        let skip = ((target_wd as i32 - first_wd as i32).rem_euclid(7)) as u8;
        let day = 1 + skip + 7 * (n - 1);
        if day > days_in_month(year, month) {
            return Err(Error::Date(format!(
                "nth_weekday: {n}-th {weekday:?} does not exist in {year}-{month:02}"
            )));
        }
        Date::from_ymd(year, month, day)
    }

    /// Iterate over every date in `[self, last]`.  Empty if `last < self`.
    pub fn iter_through(self, last: Date) -> impl Iterator<Item = Date> {
        (self.0..=last.0).map(Date)
    }
}

/// Return an error unless `year` is in [`SUPPORTED_YEARS`].
pub fn check_supported_year(year: i32) -> Result<()> {
    if SUPPORTED_YEARS.contains(&year) {
        Ok(())
    } else {
        Err(Error::YearOutOfRange {
            year,
            min: *SUPPORTED_YEARS.start(),
            max: *SUPPORTED_YEARS.end(),
        })
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = *self + rhs;
    }
}

impl std::ops::SubAssign<i32> for Date {
    fn sub_assign(&mut self, rhs: i32) {
        *self = *self - rhs;
    }
}

// ── Conversions ───────────────────────────────────────────────────────────────

impl TryFrom<NaiveDate> for Date {
    type Error = Error;
    fn try_from(date: NaiveDate) -> Result<Self> {
        Date::from_naive(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> NaiveDate {
        date.to_naive()
    }
}

/// Parse an ISO 8601 calendar date (`YYYY-MM-DD`).
impl FromStr for Date {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        let naive = NaiveDate::from_str(s.trim())
            .map_err(|e| Error::Date(format!("cannot parse {s:?}: {e}")))?;
        Date::from_naive(naive)
    }
}

impl TryFrom<String> for Date {
    type Error = Error;
    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Date> for String {
    fn from(date: Date) -> String {
        let (y, m, d) = date.ymd();
        format!("{y:04}-{m:02}-{d:02}")
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, _, d) = self.ymd();
        write!(f, "{d} {} {y}", self.month_of_year())
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Days since 1970-01-01 for a proleptic Gregorian (year, month, day).
///
/// Ref: http://howardhinnant.github.io/date_algorithms.html
const fn days_from_civil(year: i32, month: u8, day: u8) -> i32 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = (if y >= 0 { y } else { y - 399 }) / 400;
    let yoe = y - era * 400;
    let mp = (month as i32 + 9) % 12; // March = 0
    let doy = (153 * mp + 2) / 5 + day as i32 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`].
pub(crate) fn civil_from_days(serial: i32) -> (i32, u8, u8) {
    let z = serial + 719_468;
    let era = (if z >= 0 { z } else { z - 146_096 }) / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe + era * 400 + if m <= 2 { 1 } else { 0 };
    (y, m as u8, d as u8)
}

/// Serial of January 1 of `year`, for arithmetic that may leave the valid
/// range transiently.
pub(crate) fn serial_of_new_year(year: i32) -> i32 {
    days_from_civil(year, 1, 1)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

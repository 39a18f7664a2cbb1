//! Calendar grids and the `WeekNumbering` trait.
//!
//! A year is laid out as twelve [`CalendarMonth`]s, each a list of
//! [`CalendarWeek`]s of exactly seven [`CalendarDay`]s.  How days are
//! grouped into weeks and numbered is decided by a [`WeekNumbering`]
//! strategy; the ISO 8601 and GfK implementations live in
//! [`calendars`](crate::calendars).  Grids are plain values, rebuilt on
//! every call, and carry no holiday data.

use std::str::FromStr;

use fc_core::errors::{Error, Result};

use crate::calendars::{GfkCalendar, IsoCalendar};
use crate::date::Date;
use crate::month::Month;
use crate::weekday::Weekday;

// ── Grid types ────────────────────────────────────────────────────────────────

/// One cell of a calendar grid.
///
/// Serializes with the derived fields (day of month, month index, year,
/// weekend flag) spelled out alongside the stored ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(into = "CalendarDayRecord")
)]
pub struct CalendarDay {
    date: Date,
    week: u8,
    week_year: i32,
    is_current_month: bool,
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize)]
struct CalendarDayRecord {
    date: Date,
    day: u8,
    month_index: usize,
    year: i32,
    week: u8,
    week_year: i32,
    is_weekend: bool,
    is_current_month: bool,
}

#[cfg(feature = "serde")]
impl From<CalendarDay> for CalendarDayRecord {
    fn from(day: CalendarDay) -> Self {
        Self {
            date: day.date,
            day: day.day(),
            month_index: day.month_index(),
            year: day.year(),
            week: day.week,
            week_year: day.week_year,
            is_weekend: day.is_weekend(),
            is_current_month: day.is_current_month,
        }
    }
}

impl CalendarDay {
    /// A day numbered `week` of `week_year`, shown in the grid of
    /// `month`/`year`.
    pub fn new(date: Date, week: u8, week_year: i32, year: i32, month: Month) -> Self {
        Self {
            date,
            week,
            week_year,
            is_current_month: date.year() == year && date.month() == month.number(),
        }
    }

    /// The calendar date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Day of the month (1–31).
    pub fn day(&self) -> u8 {
        self.date.day_of_month()
    }

    /// The actual calendar month of the date.
    pub fn month(&self) -> Month {
        self.date.month_of_year()
    }

    /// 0-based index of [`month`](Self::month).
    pub fn month_index(&self) -> usize {
        self.month().index()
    }

    /// The actual calendar year of the date.
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// The day of the week.
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Week number assigned by the strategy that built the grid.
    pub fn week(&self) -> u8 {
        self.week
    }

    /// Year the week number belongs to.
    pub fn week_year(&self) -> i32 {
        self.week_year
    }

    /// Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        self.date.is_weekend()
    }

    /// `false` for padding days borrowed from an adjacent month.
    pub fn is_current_month(&self) -> bool {
        self.is_current_month
    }
}

/// Seven consecutive days, Monday first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CalendarWeek {
    number: u8,
    days: [CalendarDay; 7],
}

impl CalendarWeek {
    /// Build week `number` starting at `monday`; `day` decorates each date.
    pub(crate) fn build(
        number: u8,
        monday: Date,
        mut day: impl FnMut(Date) -> CalendarDay,
    ) -> Self {
        Self {
            number,
            days: std::array::from_fn(|i| day(monday + i as i32)),
        }
    }

    /// The week number.
    pub fn number(&self) -> u8 {
        self.number
    }

    /// The seven days, Monday to Sunday.
    pub fn days(&self) -> &[CalendarDay; 7] {
        &self.days
    }

    /// Monday of the week.
    pub fn first_day(&self) -> Date {
        self.days[0].date
    }

    /// Sunday of the week.
    pub fn last_day(&self) -> Date {
        self.days[6].date
    }

    /// Whether `date` falls in this week.
    pub fn contains(&self, date: Date) -> bool {
        (self.first_day()..=self.last_day()).contains(&date)
    }
}

/// One month of a calendar grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CalendarMonth {
    month: Month,
    year: i32,
    weeks: Vec<CalendarWeek>,
}

impl CalendarMonth {
    pub(crate) fn new(year: i32, month: Month, weeks: Vec<CalendarWeek>) -> Self {
        Self { month, year, weeks }
    }

    /// Display name (Ukrainian, standalone form).
    pub fn name(&self) -> &'static str {
        self.month.ukrainian_name()
    }

    /// English display name.
    pub fn name_en(&self) -> &'static str {
        self.month.long_name()
    }

    /// The nominal month.
    pub fn month(&self) -> Month {
        self.month
    }

    /// 0-based month index.
    pub fn index(&self) -> usize {
        self.month.index()
    }

    /// The nominal year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The weeks, in chronological order.
    pub fn weeks(&self) -> &[CalendarWeek] {
        &self.weeks
    }

    /// Every grid cell, padding days included.
    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks.iter().flat_map(|w| w.days.iter())
    }

    /// Grid cell for `date`, if the month shows it.
    pub fn find(&self, date: Date) -> Option<&CalendarDay> {
        self.days().find(|d| d.date == date)
    }
}

// ── Strategy ──────────────────────────────────────────────────────────────────

/// A way of cutting a year into numbered weeks.
pub trait WeekNumbering: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"ISO 8601"`).
    fn name(&self) -> &str;

    /// Build the grid of one month.
    fn build_month(&self, year: i32, month: Month) -> Result<CalendarMonth>;

    /// Build all twelve months of `year`.
    fn build_year(&self, year: i32) -> Result<Vec<CalendarMonth>> {
        Month::ALL
            .iter()
            .map(|&month| self.build_month(year, month))
            .collect()
    }
}

/// Selects one of the built-in week-numbering strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum CalendarMode {
    /// ISO 8601 weeks.
    #[default]
    Iso,
    /// GfK retail fiscal weeks.
    Gfk,
}

impl CalendarMode {
    /// The strategy implementing this mode.
    pub fn strategy(&self) -> &'static dyn WeekNumbering {
        match self {
            CalendarMode::Iso => &IsoCalendar,
            CalendarMode::Gfk => &GfkCalendar,
        }
    }

    /// Build all twelve months of `year` in this mode.
    pub fn build_year(&self, year: i32) -> Result<Vec<CalendarMonth>> {
        self.strategy().build_year(year)
    }

    /// The other mode.
    pub fn toggle(&self) -> Self {
        match self {
            CalendarMode::Iso => CalendarMode::Gfk,
            CalendarMode::Gfk => CalendarMode::Iso,
        }
    }

    /// Short identifier, `"iso"` or `"gfk"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarMode::Iso => "iso",
            CalendarMode::Gfk => "gfk",
        }
    }
}

impl std::fmt::Display for CalendarMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarMode {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "iso" => Ok(CalendarMode::Iso),
            "gfk" => Ok(CalendarMode::Gfk),
            other => Err(Error::InvalidArgument(format!(
                "unknown calendar mode {other:?} (expected \"iso\" or \"gfk\")"
            ))),
        }
    }
}

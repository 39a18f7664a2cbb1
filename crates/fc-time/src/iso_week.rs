//! ISO 8601 week dates.
//!
//! Weeks start on Monday and week 1 of an ISO week-year is the week holding
//! that year's first Thursday.  Consequently the first days of January can
//! belong to week 52/53 of the previous week-year and the last days of
//! December to week 1 of the next.

use crate::date::{civil_from_days, is_leap_year, serial_of_new_year, Date};
use crate::weekday::Weekday;

/// An ISO 8601 (week-year, week) pair.
///
/// Orders chronologically: by week-year first, then by week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IsoWeek {
    year: i32,
    week: u8,
}

impl IsoWeek {
    /// The ISO week-year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The week number (1–53).
    pub fn week(&self) -> u8 {
        self.week
    }

    /// Number of ISO weeks (52 or 53) in the week-year `year`.
    ///
    /// A week-year has 53 weeks when it starts on a Thursday, or on a
    /// Wednesday in a leap year.
    pub fn weeks_in_year(year: i32) -> u8 {
        let jan1 = weekday_of_serial(serial_of_new_year(year));
        match jan1 {
            Weekday::Thursday => 53,
            Weekday::Wednesday if is_leap_year(year) => 53,
            _ => 52,
        }
    }
}

impl std::fmt::Display for IsoWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-W{:02}", self.year, self.week)
    }
}

impl Date {
    /// The ISO week this date belongs to.
    pub fn iso_week(&self) -> IsoWeek {
        // The week belongs to the year its Thursday falls in.
        let thursday = self.serial() + 4 - self.weekday().ordinal() as i32;
        let (year, _, _) = civil_from_days(thursday);
        let week = ((thursday - serial_of_new_year(year)) / 7 + 1) as u8;
        IsoWeek { year, week }
    }
}

fn weekday_of_serial(serial: i32) -> Weekday {
    Weekday::from_ordinal(((serial + 3).rem_euclid(7) + 1) as u8).unwrap_or(Weekday::Monday)
}

//! GfK retail fiscal calendar.
//!
//! The fiscal year is a run of 52 whole Monday-start weeks beginning on the
//! Monday of the week that contains January 1.  Months are
//! virtual: each owns a fixed number of weeks from
//! [`GFK_MONTH_WEEKS`], so a GfK "March" usually shows days from late
//! February or early April.  A day's `is_current_month` is true when its real
//! calendar month matches the nominal GfK month.

use fc_core::errors::Result;

use crate::calendar::{CalendarDay, CalendarMonth, CalendarWeek, WeekNumbering};
use crate::date::{check_supported_year, Date};
use crate::month::Month;

/// Weeks per month, January to December (5-4-4 / 4-5-4 / 4-4-5 / 5-4-4).
pub const GFK_MONTH_WEEKS: [u8; 12] = [
    5, 4, 4, // Q1
    4, 5, 4, // Q2
    4, 4, 5, // Q3
    5, 4, 4, // Q4
];

/// Weeks in a GfK fiscal year.
pub const GFK_WEEKS_PER_YEAR: u8 = 52;

/// GfK fiscal calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct GfkCalendar;

impl WeekNumbering for GfkCalendar {
    fn name(&self) -> &str {
        "GfK"
    }

    fn build_month(&self, year: i32, month: Month) -> Result<CalendarMonth> {
        let start = gfk_year_start(year)?;
        let offset = gfk_week_offset(month);
        let weeks = (0..gfk_weeks_in_month(month))
            .map(|i| {
                let number = offset + i + 1;
                let monday = start + 7 * (number as i32 - 1);
                CalendarWeek::build(number, monday, |date| {
                    CalendarDay::new(date, number, year, year, month)
                })
            })
            .collect();
        Ok(CalendarMonth::new(year, month, weeks))
    }
}

/// Build the twelve GfK months of `year`.
pub fn build_gfk_year_months(year: i32) -> Result<Vec<CalendarMonth>> {
    GfkCalendar.build_year(year)
}

/// Number of weeks GfK assigns to `month`.
pub fn gfk_weeks_in_month(month: Month) -> u8 {
    GFK_MONTH_WEEKS[month.index()]
}

/// Weeks preceding `month` in the fiscal year.
fn gfk_week_offset(month: Month) -> u8 {
    GFK_MONTH_WEEKS[..month.index()].iter().sum()
}

/// First day (a Monday) of the GfK fiscal year `year`.
///
/// The Monday on or before January 1, so the fiscal year opens up to six
/// days early and never after the calendar year.
pub fn gfk_year_start(year: i32) -> Result<Date> {
    check_supported_year(year)?;
    Date::from_ymd(year, 1, 1)?.start_of_week()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn pattern_sums_to_52() {
        let total: u8 = GFK_MONTH_WEEKS.iter().sum();
        assert_eq!(total, GFK_WEEKS_PER_YEAR);
        for quarter in GFK_MONTH_WEEKS.chunks(3) {
            assert_eq!(quarter.iter().sum::<u8>(), 13);
        }
    }

    #[test]
    fn year_start() {
        // Monday: same day
        assert_eq!(gfk_year_start(2024).unwrap(), date(2024, 1, 1));
        // Wednesday: back to Monday Dec 30
        assert_eq!(gfk_year_start(2025).unwrap(), date(2024, 12, 30));
        // Thursday: back to Monday Dec 29
        assert_eq!(gfk_year_start(2026).unwrap(), date(2025, 12, 29));
        // Friday, Saturday, Sunday: still back, never forward
        assert_eq!(gfk_year_start(2021).unwrap(), date(2020, 12, 28));
        assert_eq!(gfk_year_start(2022).unwrap(), date(2021, 12, 27));
        assert_eq!(gfk_year_start(2023).unwrap(), date(2022, 12, 26));
    }

    #[test]
    fn start_is_monday_on_or_before_jan1() {
        for year in 1900..=2100 {
            let start = gfk_year_start(year).unwrap();
            let jan1 = date(year, 1, 1);
            assert_eq!(start.weekday(), Weekday::Monday);
            assert!(start <= jan1, "{year}: start {start:?} is after Jan 1");
            assert!(jan1 - start <= 6, "{year}: {start:?}");
        }
    }

    #[test]
    fn weeks_numbered_across_year() {
        let months = build_gfk_year_months(2024).unwrap();
        let numbers: Vec<u8> = months
            .iter()
            .flat_map(|m| m.weeks().iter().map(|w| w.number()))
            .collect();
        assert_eq!(numbers, (1..=52).collect::<Vec<u8>>());
        let dec = &months[11];
        assert_eq!(dec.weeks().last().unwrap().last_day(), date(2024, 12, 29));
    }

    #[test]
    fn ghost_days_flagged() {
        // GfK February 2024 = weeks 6..=9, Feb 5 .. Mar 3.
        let feb = GfkCalendar.build_month(2024, Month::February).unwrap();
        assert_eq!(feb.weeks()[0].first_day(), date(2024, 2, 5));
        assert_eq!(feb.weeks()[3].last_day(), date(2024, 3, 3));
        let march_days = feb.days().filter(|d| !d.is_current_month()).count();
        assert_eq!(march_days, 3);
        assert!(feb.days().all(|d| d.week_year() == 2024));
    }

    #[test]
    fn weeks_in_month_lookup() {
        assert_eq!(gfk_weeks_in_month(Month::January), 5);
        assert_eq!(gfk_weeks_in_month(Month::May), 5);
        assert_eq!(gfk_weeks_in_month(Month::September), 5);
        assert_eq!(gfk_weeks_in_month(Month::October), 5);
        assert_eq!(gfk_weeks_in_month(Month::December), 4);
    }
}

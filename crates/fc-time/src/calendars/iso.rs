//! ISO 8601 week calendar.
//!
//! Each month shows every Monday–Sunday week that contains at least one of
//! its days.  Days outside the month pad the first and last week and are
//! flagged with `is_current_month == false`.  Week numbers follow ISO 8601,
//! so early January may open with week 52/53 of the previous week-year and
//! late December may close with week 1 of the next.

use fc_core::errors::Result;

use crate::calendar::{CalendarDay, CalendarMonth, CalendarWeek, WeekNumbering};
use crate::date::{check_supported_year, Date};
use crate::month::Month;

/// ISO 8601 week numbering.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoCalendar;

impl WeekNumbering for IsoCalendar {
    fn name(&self) -> &str {
        "ISO 8601"
    }

    fn build_month(&self, year: i32, month: Month) -> Result<CalendarMonth> {
        check_supported_year(year)?;
        let first = Date::from_ymd(year, month.number(), 1)?;
        let last = first.end_of_month();

        // Weeks are keyed by their Monday, which orders them by date rather
        // than by week number (week 53 before week 1 in January).
        let mut weeks = Vec::with_capacity(6);
        let mut monday = first.start_of_week()?;
        while monday <= last {
            let number = monday.iso_week().week();
            weeks.push(CalendarWeek::build(number, monday, |date| {
                let iso = date.iso_week();
                CalendarDay::new(date, iso.week(), iso.year(), year, month)
            }));
            monday += 7;
        }
        Ok(CalendarMonth::new(year, month, weeks))
    }
}

/// Build the twelve ISO-week months of `year`.
pub fn build_iso_year_months(year: i32) -> Result<Vec<CalendarMonth>> {
    IsoCalendar.build_year(year)
}

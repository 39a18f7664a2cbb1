//! Orthodox Easter (Paschalion).
//!
//! The date is computed with Meeus' Julian-calendar algorithm and shifted by
//! the 13-day Julian→Gregorian difference.  That difference is exact for
//! 1900–2099; it is also applied to 2100, which is why the supported range
//! is [`PASCHALION_YEARS`].  Outside the range no date is returned: callers
//! treat `None` as "no movable feasts this year", not as an error.

use std::ops::RangeInclusive;

use crate::date::Date;

/// Years for which [`orthodox_easter`] is defined.
pub const PASCHALION_YEARS: RangeInclusive<i32> = 1900..=2100;

/// Days between the Julian and Gregorian calendars over [`PASCHALION_YEARS`].
pub const JULIAN_GREGORIAN_OFFSET: i32 = 13;

/// Whether `year` lies in [`PASCHALION_YEARS`].
pub fn is_paschalion_year(year: i32) -> bool {
    PASCHALION_YEARS.contains(&year)
}

/// Orthodox Easter Sunday of `year`, as a Gregorian date.
///
/// Returns `None` outside [`PASCHALION_YEARS`].
///
/// # Example
/// ```
/// use fc_time::{easter::orthodox_easter, Date};
/// assert_eq!(orthodox_easter(2024), Some(Date::from_ymd(2024, 5, 5).unwrap()));
/// assert_eq!(orthodox_easter(1899), None);
/// ```
pub fn orthodox_easter(year: i32) -> Option<Date> {
    if !is_paschalion_year(year) {
        return None;
    }
    let a = year % 4;
    let b = year % 7;
    let c = year % 19;
    let d = (19 * c + 15) % 30;
    let e = (2 * a + 4 * b - d + 34) % 7;
    let month = (d + e + 114) / 31;
    let day = (d + e + 114) % 31 + 1;
    // Julian (month, day) read as a Gregorian date, then shifted.
    let julian = Date::from_ymd(year, month as u8, day as u8).ok()?;
    julian.add_days(JULIAN_GREGORIAN_OFFSET).ok()
}

/// The date `offset_days` after (negative: before) Orthodox Easter of `year`.
///
/// Propagates `None` when Easter itself is undefined for `year`.
pub fn easter_relative(year: i32, offset_days: i32) -> Option<Date> {
    orthodox_easter(year)?.add_days(offset_days).ok()
}

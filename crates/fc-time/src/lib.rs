//! # fc-time
//!
//! Date, weekday, month, ISO week, Orthodox Easter, and the ISO / GfK
//! calendar grid builders.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar grid types and the `WeekNumbering` trait.
pub mod calendar;

/// Concrete week-numbering strategies (ISO 8601, GfK).
pub mod calendars;

/// Sources of "today".
pub mod clock;

/// `Date` type.
pub mod date;

/// Orthodox Easter and Easter-relative dates.
pub mod easter;

/// ISO 8601 week dates.
pub mod iso_week;

/// Month of the year.
pub mod month;

/// Day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{CalendarDay, CalendarMode, CalendarMonth, CalendarWeek, WeekNumbering};
pub use calendars::{build_gfk_year_months, build_iso_year_months, GfkCalendar, IsoCalendar};
pub use clock::{Clock, FixedClock, SystemClock, UtcClock};
pub use date::{Date, SUPPORTED_YEARS};
pub use easter::{easter_relative, orthodox_easter, PASCHALION_YEARS};
pub use iso_week::IsoWeek;
pub use month::Month;
pub use weekday::{Weekday, WEEKDAY_ORDER};

//! Week-numbering strategies.

/// GfK retail fiscal calendar (4-4-5 style weeks per month).
pub mod gfk;

/// ISO 8601 week calendar.
pub mod iso;

pub use gfk::{build_gfk_year_months, GfkCalendar};
pub use iso::{build_iso_year_months, IsoCalendar};

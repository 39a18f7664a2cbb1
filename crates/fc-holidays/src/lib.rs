//! # fc-holidays
//!
//! Ukrainian holiday catalog (national, Orthodox, international,
//! commercial, Great Lent), priority-ordered date queries over an LRU cache
//! of yearly catalogs, and the upcoming-holidays view that collapses Lent
//! into a single period.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Yearly holiday catalog.
pub mod catalog;

/// Lent collapsing and grouped output.
pub mod group;

/// `Holiday` and `HolidayKind`.
pub mod holiday;

/// `HolidayService` and its cached queries.
pub mod service;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use catalog::build_holiday_catalog;
pub use group::{group_holidays, HolidayGroup, HolidayPeriod};
pub use holiday::{sort_by_priority, Holiday, HolidayKind};
pub use service::HolidayService;

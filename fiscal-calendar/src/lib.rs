//! # fiscal-calendar
//!
//! Week-structured year calendars (ISO 8601 and the GfK 4-4-5 retail
//! calendar) and a Ukrainian holiday engine with Orthodox movable feasts.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `fc-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! fiscal-calendar = "0.1"
//! ```
//!
//! ```rust
//! use fiscal_calendar::holidays::HolidayService;
//! use fiscal_calendar::time::{orthodox_easter, CalendarMode, Date, FixedClock};
//!
//! let easter = orthodox_easter(2024).unwrap();
//! assert_eq!(easter, Date::from_ymd(2024, 5, 5)?);
//!
//! let months = CalendarMode::Gfk.build_year(2024)?;
//! assert_eq!(months.len(), 12);
//!
//! let service = HolidayService::with_clock(FixedClock::new(Date::from_ymd(2024, 3, 1)?));
//! let upcoming = service.upcoming_holidays(20)?;
//! assert!(upcoming.iter().any(|g| g.is_period()));
//! # Ok::<(), fiscal_calendar::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Errors, settings, and the LRU cache.
pub use fc_core as core;

/// Dates, Easter, clocks, and the ISO / GfK calendar builders.
pub use fc_time as time;

/// Holiday catalog, queries, and upcoming-holiday grouping.
pub use fc_holidays as holidays;

//! Engine settings.
//!
//! [`Settings`] is a plain value owned by each holiday service instance; there
//! is no process-wide singleton, so tests can run isolated services side by
//! side.  With the `serde` feature enabled it can be deserialized from the
//! host application's own configuration file (missing fields fall back to
//! the defaults).

use crate::ensure;
use crate::errors::Result;

/// Default number of yearly holiday catalogs kept in memory.
pub const DEFAULT_CACHE_CAPACITY: usize = 5;

/// Default look-ahead, in days, for "upcoming holidays" queries.
pub const DEFAULT_UPCOMING_WINDOW_DAYS: u32 = 60;

/// Tunables for the holiday engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    cache_capacity: usize,
    upcoming_window_days: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            upcoming_window_days: DEFAULT_UPCOMING_WINDOW_DAYS,
        }
    }
}

impl Settings {
    /// Settings with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum number of yearly catalogs cached at once.
    pub fn cache_capacity(&self) -> usize {
        self.cache_capacity
    }

    /// Look-ahead used by `upcoming()` when no explicit window is given.
    pub fn upcoming_window_days(&self) -> u32 {
        self.upcoming_window_days
    }

    /// Replace the cache capacity.  Must be at least one.
    pub fn with_cache_capacity(mut self, capacity: usize) -> Result<Self> {
        ensure!(capacity > 0, "cache capacity must be at least 1");
        self.cache_capacity = capacity;
        Ok(self)
    }

    /// Replace the default look-ahead window.
    pub fn with_upcoming_window_days(mut self, days: u32) -> Self {
        self.upcoming_window_days = days;
        self
    }

    /// Check values that may have come from an external source.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.cache_capacity > 0, "cache capacity must be at least 1");
        Ok(())
    }
}

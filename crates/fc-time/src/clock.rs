//! Sources of "today".
//!
//! Queries relative to the current day take a [`Clock`] instead of reading
//! the system time directly, so hosts with their own notion of today (and
//! tests) can pin it.

use fc_core::errors::Result;

use crate::date::Date;

/// Supplies the current calendar day.
pub trait Clock: std::fmt::Debug + Send + Sync {
    /// The current calendar day.
    fn today(&self) -> Result<Date>;

    /// Return `true` if `date` is today.
    fn is_today(&self, date: Date) -> Result<bool> {
        Ok(self.today()? == date)
    }
}

/// The host's local calendar day, read from the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Result<Date> {
        Date::from_naive(chrono::Local::now().date_naive())
    }
}

/// The current calendar day in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct UtcClock;

impl Clock for UtcClock {
    fn today(&self) -> Result<Date> {
        Date::from_naive(chrono::Utc::now().date_naive())
    }
}

/// A clock frozen on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(Date);

impl FixedClock {
    /// A clock that always reports `today`.
    pub fn new(today: Date) -> Self {
        Self(today)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Result<Date> {
        Ok(self.0)
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn today(&self) -> Result<Date> {
        (**self).today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock() {
        let day = Date::from_ymd(2024, 12, 25).unwrap();
        let clock = FixedClock::new(day);
        assert_eq!(clock.today().unwrap(), day);
        assert!(clock.is_today(day).unwrap());
        assert!(!clock.is_today(day + 1).unwrap());
    }

    #[test]
    fn system_clocks_agree_within_a_day() {
        let local = SystemClock.today().unwrap();
        let utc = UtcClock.today().unwrap();
        assert!((local - utc).abs() <= 1);
    }
}

//! Cached holiday queries.
//!
//! [`HolidayService`] owns a [`Clock`], the engine [`Settings`], and a bounded
//! LRU cache of yearly catalogs.  Each service is independent; nothing is
//! process-wide.  The cache sits behind a `Mutex`, so a service can be shared
//! between threads by reference or inside an `Arc`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use fc_core::errors::{Error, Result};
use fc_core::{ensure, LruCache, Settings};
use fc_time::{Clock, Date, SystemClock, SUPPORTED_YEARS};

use crate::catalog::build_holiday_catalog;
use crate::group::{group_holidays, HolidayGroup};
use crate::holiday::{sort_by_priority, Holiday, HolidayKind};

type CatalogCache = LruCache<i32, Arc<[Holiday]>>;

/// Holiday lookups over cached yearly catalogs.
///
/// # Example
/// ```
/// use fc_holidays::{HolidayKind, HolidayService};
/// use fc_time::{Date, FixedClock};
///
/// let service = HolidayService::with_clock(FixedClock::new(Date::from_ymd(2024, 3, 1)?));
/// let christmas = service.holidays_for_date(Date::from_ymd(2024, 12, 25)?)?;
/// assert_eq!(christmas.len(), 1);
/// assert_eq!(christmas[0].kind(), HolidayKind::Religious);
/// # Ok::<(), fc_core::Error>(())
/// ```
#[derive(Debug)]
pub struct HolidayService<C: Clock = SystemClock> {
    settings: Settings,
    clock: C,
    cache: Mutex<CatalogCache>,
}

impl HolidayService<SystemClock> {
    /// A service on the system clock with default settings.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for HolidayService<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> HolidayService<C> {
    /// A service on `clock` with default settings.
    pub fn with_clock(clock: C) -> Self {
        let settings = Settings::default();
        Self {
            cache: Mutex::new(LruCache::new(settings.cache_capacity())),
            settings,
            clock,
        }
    }

    /// A service on `clock` with explicit `settings`.
    ///
    /// # Errors
    /// When the settings fail validation.
    pub fn with_settings(clock: C, settings: Settings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            cache: Mutex::new(LruCache::new(settings.cache_capacity())),
            settings,
            clock,
        })
    }

    /// The service's settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The service's clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    // ── Catalog cache ─────────────────────────────────────────────────────

    /// The catalog of `year`, built on first use and cached.
    pub fn holidays_for_year(&self, year: i32) -> Result<Arc<[Holiday]>> {
        if let Some(hit) = self.cache().get(&year).cloned() {
            tracing::debug!(year, "holiday cache hit");
            return Ok(hit);
        }
        tracing::debug!(year, "holiday cache miss");
        let catalog: Arc<[Holiday]> = build_holiday_catalog(year)?.into();
        self.cache().insert(year, Arc::clone(&catalog));
        Ok(catalog)
    }

    /// Years currently cached, least recently used first.
    pub fn cached_years(&self) -> Vec<i32> {
        self.cache().keys().copied().collect()
    }

    /// Drop every cached catalog.
    pub fn clear_cache(&self) {
        self.cache().clear();
    }

    fn cache(&self) -> MutexGuard<'_, CatalogCache> {
        // The cache only holds derived data, so a poisoned lock is still usable.
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ── Date queries ──────────────────────────────────────────────────────

    /// Every holiday on `date`, highest priority first.
    ///
    /// Dates in years without a catalog (the outermost representable
    /// years) have no holidays.
    pub fn holidays_for_date(&self, date: Date) -> Result<Vec<Holiday>> {
        if !SUPPORTED_YEARS.contains(&date.year()) {
            return Ok(Vec::new());
        }
        let catalog = self.holidays_for_year(date.year())?;
        let mut found: Vec<Holiday> = catalog
            .iter()
            .filter(|h| h.date() == date)
            .copied()
            .collect();
        sort_by_priority(&mut found);
        Ok(found)
    }

    /// The highest-priority holiday on `date`, if any.
    pub fn holiday_for_date(&self, date: Date) -> Result<Option<Holiday>> {
        Ok(self.holidays_for_date(date)?.into_iter().next())
    }

    /// Every holiday in `[from, to]`, ordered by date then priority.
    ///
    /// # Errors
    /// When `from` is after `to`.
    pub fn holidays_between(&self, from: Date, to: Date) -> Result<Vec<Holiday>> {
        ensure!(from <= to, "range start {from} is after range end {to}");
        let mut found = Vec::new();
        for year in catalog_years(from, to) {
            let catalog = self.holidays_for_year(year)?;
            found.extend(
                catalog
                    .iter()
                    .filter(|h| from <= h.date() && h.date() <= to)
                    .copied(),
            );
        }
        found.sort_by_key(|h| (h.date(), h.kind()));
        Ok(found)
    }

    // ── Relative to today ─────────────────────────────────────────────────

    /// Holidays in `[today, today + days_ahead]`, with Lent collapsed.
    ///
    /// A Lent season is listed in full when any of its days falls inside
    /// the window.
    pub fn upcoming_holidays(&self, days_ahead: u32) -> Result<Vec<HolidayGroup>> {
        let today = self.clock.today()?;
        let span = i32::try_from(days_ahead).map_err(|_| {
            Error::InvalidArgument(format!("look-ahead of {days_ahead} days is too long"))
        })?;
        let end = today.add_days(span)?;
        let in_window = |d: Date| today <= d && d <= end;

        let mut selected: Vec<Holiday> = Vec::new();
        for year in catalog_years(today, end) {
            let catalog = self.holidays_for_year(year)?;
            let (lent, others): (Vec<&Holiday>, Vec<&Holiday>) = catalog
                .iter()
                .partition(|h| h.kind() == HolidayKind::Lent);
            selected.extend(others.into_iter().filter(|h| in_window(h.date())).copied());
            if lent.iter().any(|h| in_window(h.date())) {
                selected.extend(lent.into_iter().copied());
            }
        }

        let groups = group_holidays(selected);
        tracing::debug!(%today, %end, groups = groups.len(), "upcoming holidays");
        Ok(groups)
    }

    /// [`upcoming_holidays`](Self::upcoming_holidays) over the configured
    /// default window.
    pub fn upcoming(&self) -> Result<Vec<HolidayGroup>> {
        self.upcoming_holidays(self.settings.upcoming_window_days())
    }

    /// Holidays on today's date, highest priority first.
    pub fn today_holidays(&self) -> Result<Vec<HolidayGroup>> {
        let today = self.clock.today()?;
        Ok(self
            .holidays_for_date(today)?
            .into_iter()
            .map(HolidayGroup::Single)
            .collect())
    }

    /// Whole days from today to `date`; negative for past dates.
    pub fn days_until(&self, date: Date) -> Result<i32> {
        Ok(date - self.clock.today()?)
    }
}

/// Years between `from` and `to` that have a catalog.
fn catalog_years(from: Date, to: Date) -> impl Iterator<Item = i32> {
    from.year().max(*SUPPORTED_YEARS.start())..=to.year().min(*SUPPORTED_YEARS.end())
}

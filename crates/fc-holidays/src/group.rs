//! Collapsing daily Lent records into periods.
//!
//! The catalog lists Great Lent one day at a time.  For forward-looking
//! lists that is noise, so [`group_holidays`] folds every run of
//! consecutive `Lent` days into a single [`HolidayPeriod`] and wraps the
//! remaining holidays as [`HolidayGroup::Single`].

use fc_time::Date;

use crate::holiday::{Holiday, HolidayKind};

/// A run of consecutive days sharing one observance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HolidayPeriod {
    name: &'static str,
    name_en: Option<&'static str>,
    start: Date,
    end: Date,
    day_count: u32,
    kind: HolidayKind,
}

impl HolidayPeriod {
    /// Primary (Ukrainian) name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// English name, if known.
    pub fn name_en(&self) -> Option<&'static str> {
        self.name_en
    }

    /// First day (inclusive).
    pub fn start(&self) -> Date {
        self.start
    }

    /// Last day (inclusive).
    pub fn end(&self) -> Date {
        self.end
    }

    /// Number of days from `start` to `end` inclusive.
    pub fn day_count(&self) -> u32 {
        self.day_count
    }

    /// Category of the collapsed records.
    pub fn kind(&self) -> HolidayKind {
        self.kind
    }

    /// Whether `date` falls inside the period.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

/// One entry of an upcoming-holidays list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "type", rename_all = "lowercase")
)]
pub enum HolidayGroup {
    /// A holiday on one date.
    Single(Holiday),
    /// A collapsed multi-day observance.
    Period(HolidayPeriod),
}

impl HolidayGroup {
    /// `true` for [`HolidayGroup::Period`].
    pub fn is_period(&self) -> bool {
        matches!(self, HolidayGroup::Period(_))
    }

    /// Representative date: the holiday's date, or the period's start.
    pub fn date(&self) -> Date {
        match self {
            HolidayGroup::Single(h) => h.date(),
            HolidayGroup::Period(p) => p.start(),
        }
    }

    /// Last date covered.
    pub fn end(&self) -> Date {
        match self {
            HolidayGroup::Single(h) => h.date(),
            HolidayGroup::Period(p) => p.end(),
        }
    }

    /// Primary name.
    pub fn name(&self) -> &'static str {
        match self {
            HolidayGroup::Single(h) => h.name(),
            HolidayGroup::Period(p) => p.name(),
        }
    }

    /// English name, if known.
    pub fn name_en(&self) -> Option<&'static str> {
        match self {
            HolidayGroup::Single(h) => h.name_en(),
            HolidayGroup::Period(p) => p.name_en(),
        }
    }

    /// Category.
    pub fn kind(&self) -> HolidayKind {
        match self {
            HolidayGroup::Single(h) => h.kind(),
            HolidayGroup::Period(p) => p.kind(),
        }
    }

    /// The single holiday, if this is not a period.
    pub fn as_single(&self) -> Option<&Holiday> {
        match self {
            HolidayGroup::Single(h) => Some(h),
            HolidayGroup::Period(_) => None,
        }
    }

    /// The period, if this is one.
    pub fn as_period(&self) -> Option<&HolidayPeriod> {
        match self {
            HolidayGroup::Single(_) => None,
            HolidayGroup::Period(p) => Some(p),
        }
    }
}

impl From<Holiday> for HolidayGroup {
    fn from(holiday: Holiday) -> Self {
        HolidayGroup::Single(holiday)
    }
}

impl From<HolidayPeriod> for HolidayGroup {
    fn from(period: HolidayPeriod) -> Self {
        HolidayGroup::Period(period)
    }
}

/// Group `holidays` for display.
///
/// `Lent` records are sorted and every run of consecutive days becomes one
/// [`HolidayPeriod`]; all other records pass through as singles.  The
/// result is ordered by representative date, a period ahead of singles on
/// the same date, and singles on one date by priority.
pub fn group_holidays<I>(holidays: I) -> Vec<HolidayGroup>
where
    I: IntoIterator<Item = Holiday>,
{
    let (mut lent, singles): (Vec<Holiday>, Vec<Holiday>) = holidays
        .into_iter()
        .partition(|h| h.kind() == HolidayKind::Lent);
    lent.sort_by_key(|h| h.date());
    lent.dedup_by_key(|h| h.date());

    let mut groups: Vec<HolidayGroup> = collapse_runs(&lent)
        .into_iter()
        .map(HolidayGroup::Period)
        .collect();
    groups.extend(singles.into_iter().map(HolidayGroup::Single));
    groups.sort_by_key(|g| (g.date(), !g.is_period(), g.kind()));
    groups
}

/// Fold date-sorted, de-duplicated records into runs of consecutive days.
fn collapse_runs(days: &[Holiday]) -> Vec<HolidayPeriod> {
    let mut periods: Vec<HolidayPeriod> = Vec::new();
    for day in days {
        match periods.last_mut() {
            Some(p) if day.date() - p.end == 1 => {
                p.end = day.date();
                p.day_count += 1;
            }
            _ => periods.push(HolidayPeriod {
                name: day.name(),
                name_en: day.name_en(),
                start: day.date(),
                end: day.date(),
                day_count: 1,
                kind: day.kind(),
            }),
        }
    }
    periods
}

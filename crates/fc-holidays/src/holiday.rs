//! Holiday records and their priority order.

use fc_time::Date;

/// Category of a holiday.
///
/// The declaration order is the priority order used when several holidays
/// share a date: `National` ranks highest, `Lent` lowest.  `Ord` follows it,
/// so sorting ascending puts the most important holiday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum HolidayKind {
    /// State holiday of Ukraine.
    National,
    /// Orthodox feast, fixed or movable.
    Religious,
    /// International observance.
    International,
    /// Retail event (Black Friday, Cyber Monday).
    Commercial,
    /// A day of Great Lent.
    Lent,
}

impl HolidayKind {
    /// All kinds, highest priority first.
    pub const ALL: [HolidayKind; 5] = [
        HolidayKind::National,
        HolidayKind::Religious,
        HolidayKind::International,
        HolidayKind::Commercial,
        HolidayKind::Lent,
    ];

    /// Priority rank, 0 = highest.
    pub fn priority(&self) -> u8 {
        *self as u8
    }

    /// Lower-case identifier (`"national"`, …).
    pub fn as_str(&self) -> &'static str {
        match self {
            HolidayKind::National => "national",
            HolidayKind::Religious => "religious",
            HolidayKind::International => "international",
            HolidayKind::Commercial => "commercial",
            HolidayKind::Lent => "lent",
        }
    }
}

impl std::fmt::Display for HolidayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One holiday occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Holiday {
    name: &'static str,
    name_en: Option<&'static str>,
    date: Date,
    kind: HolidayKind,
}

impl Holiday {
    /// A holiday named `name` (Ukrainian) with an optional English name.
    pub fn new(
        name: &'static str,
        name_en: Option<&'static str>,
        date: Date,
        kind: HolidayKind,
    ) -> Self {
        Self {
            name,
            name_en,
            date,
            kind,
        }
    }

    /// Primary (Ukrainian) name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// English name, if known.
    pub fn name_en(&self) -> Option<&'static str> {
        self.name_en
    }

    /// Name for `locale`: English for `"en"` when available, else primary.
    pub fn localized_name(&self, locale: &str) -> &'static str {
        match (locale, self.name_en) {
            ("en", Some(en)) => en,
            _ => self.name,
        }
    }

    /// Date of the occurrence.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Category.
    pub fn kind(&self) -> HolidayKind {
        self.kind
    }

    /// Whether the occurrence falls on a weekend.
    pub fn is_weekend(&self) -> bool {
        self.date.is_weekend()
    }
}

/// Sort `holidays` by priority, keeping catalog order between equals.
pub fn sort_by_priority(holidays: &mut [Holiday]) {
    holidays.sort_by_key(|h| h.kind);
}

//! Month-of-year enum.

/// Month of the year.
///
/// Variants are numbered 1–12 (January = 1, December = 12).  Calendar grids
/// also expose a 0-based [`index`](Month::index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Month {
    /// January (1).
    January = 1,
    /// February (2).
    February = 2,
    /// March (3).
    March = 3,
    /// April (4).
    April = 4,
    /// May (5).
    May = 5,
    /// June (6).
    June = 6,
    /// July (7).
    July = 7,
    /// August (8).
    August = 8,
    /// September (9).
    September = 9,
    /// October (10).
    October = 10,
    /// November (11).
    November = 11,
    /// December (12).
    December = 12,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Construct from a number (1 = January … 12 = December).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.get(n.checked_sub(1)? as usize).copied()
    }

    /// Construct from a 0-based index (0 = January … 11 = December).
    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Return the 0-based month index.
    pub fn index(&self) -> usize {
        *self as usize - 1
    }

    /// Return the quarter (1–4) the month belongs to.
    pub fn quarter(&self) -> u8 {
        (self.number() - 1) / 3 + 1
    }

    /// Return the three-letter abbreviation (`"Jan"`, `"Feb"`, …).
    pub fn short_name(&self) -> &'static str {
        match self {
            Month::January => "Jan",
            Month::February => "Feb",
            Month::March => "Mar",
            Month::April => "Apr",
            Month::May => "May",
            Month::June => "Jun",
            Month::July => "Jul",
            Month::August => "Aug",
            Month::September => "Sep",
            Month::October => "Oct",
            Month::November => "Nov",
            Month::December => "Dec",
        }
    }

    /// Return the full English name (`"January"`, `"February"`, …).
    pub fn long_name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Return the standalone (nominative) Ukrainian name (`"січень"`, …).
    pub fn ukrainian_name(&self) -> &'static str {
        match self {
            Month::January => "січень",
            Month::February => "лютий",
            Month::March => "березень",
            Month::April => "квітень",
            Month::May => "травень",
            Month::June => "червень",
            Month::July => "липень",
            Month::August => "серпень",
            Month::September => "вересень",
            Month::October => "жовтень",
            Month::November => "листопад",
            Month::December => "грудень",
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.long_name())
    }
}

impl From<Month> for u8 {
    fn from(m: Month) -> u8 {
        m as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        for n in 1..=12u8 {
            let m = Month::from_number(n).unwrap();
            assert_eq!(m.number(), n);
            assert_eq!(Month::from_index(m.index()), Some(m));
        }
    }

    #[test]
    fn out_of_range() {
        assert!(Month::from_number(0).is_none());
        assert!(Month::from_number(13).is_none());
        assert!(Month::from_index(12).is_none());
    }

    #[test]
    fn quarters() {
        assert_eq!(Month::January.quarter(), 1);
        assert_eq!(Month::March.quarter(), 1);
        assert_eq!(Month::April.quarter(), 2);
        assert_eq!(Month::December.quarter(), 4);
    }
}

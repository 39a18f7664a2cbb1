//! The holiday catalog of one year.
//!
//! A catalog is a pure function of the year.  It lists, in this order:
//! national holidays, fixed Orthodox feasts, movable (Easter-relative)
//! feasts, international observances, commercial events, and one `Lent`
//! record per day of Great Lent.
//!
//! Easter is only defined for [`PASCHALION_YEARS`](fc_time::PASCHALION_YEARS).
//! Outside that range the movable feasts and Great Lent are left out and
//! every other holiday is still listed.

use fc_core::errors::Result;
use fc_time::date::check_supported_year;
use fc_time::easter::orthodox_easter;
use fc_time::{Date, Weekday};

use crate::holiday::{Holiday, HolidayKind};

/// First day of Great Lent relative to Easter (Clean Monday).
pub const GREAT_LENT_START_OFFSET: i32 = -48;

/// Last day of Great Lent relative to Easter (Holy Saturday).
pub const GREAT_LENT_END_OFFSET: i32 = -1;

/// Length of Great Lent in days.
pub const GREAT_LENT_DAYS: usize = (GREAT_LENT_END_OFFSET - GREAT_LENT_START_OFFSET + 1) as usize;

const GREAT_LENT: (&str, &str) = ("Великий піст", "Great Lent");

/// A holiday on the same calendar day every year.
#[derive(Debug, Clone, Copy)]
struct FixedHoliday {
    month: u8,
    day: u8,
    name: &'static str,
    name_en: &'static str,
}

/// A feast a fixed number of days from Easter.
#[derive(Debug, Clone, Copy)]
struct MovableFeast {
    offset: i32,
    name: &'static str,
    name_en: &'static str,
}

const fn fixed(month: u8, day: u8, name: &'static str, name_en: &'static str) -> FixedHoliday {
    FixedHoliday {
        month,
        day,
        name,
        name_en,
    }
}

const fn movable(offset: i32, name: &'static str, name_en: &'static str) -> MovableFeast {
    MovableFeast {
        offset,
        name,
        name_en,
    }
}

const NATIONAL: [FixedHoliday; 7] = [
    fixed(1, 1, "Новий рік", "New Year's Day"),
    fixed(5, 1, "День праці", "Labour Day"),
    fixed(
        5,
        8,
        "День пам'яті та перемоги над нацизмом у Другій світовій війні",
        "Day of Remembrance and Victory over Nazism in World War II",
    ),
    fixed(6, 28, "День Конституції України", "Constitution Day"),
    fixed(7, 15, "День Української Державності", "Ukrainian Statehood Day"),
    fixed(8, 24, "День незалежності України", "Independence Day"),
    fixed(10, 1, "День захисників і захисниць України", "Defenders Day"),
];

const FIXED_RELIGIOUS: [FixedHoliday; 15] = [
    fixed(1, 6, "Богоявлення (Водохреще)", "Epiphany"),
    fixed(2, 2, "Стрітення Господнє", "Candlemas"),
    fixed(3, 25, "Благовіщення", "Annunciation"),
    fixed(4, 23, "Святого Юрія (Георгія) Переможця", "St. George's Day"),
    fixed(
        6,
        24,
        "Різдво Іоанна Хрестителя (Івана Купала)",
        "Ivan Kupala (Nativity of John the Baptist)",
    ),
    fixed(6, 29, "Апостолів Петра і Павла", "Saints Peter and Paul"),
    fixed(
        8,
        6,
        "Преображення Господнє (Яблучний Спас)",
        "Transfiguration (Apple Saviour)",
    ),
    fixed(8, 15, "Успіння Пресвятої Богородиці", "Dormition of the Mother of God"),
    fixed(9, 8, "Різдво Пресвятої Богородиці", "Nativity of the Mother of God"),
    fixed(9, 14, "Воздвиження Хреста Господнього", "Exaltation of the Holy Cross"),
    fixed(11, 8, "Собор Архистратига Михаїла", "Synaxis of Archangel Michael"),
    fixed(
        11,
        21,
        "Введення в храм Пресвятої Богородиці",
        "Presentation of the Mother of God",
    ),
    fixed(12, 6, "Святого Миколая", "St. Nicholas Day"),
    fixed(12, 25, "Різдво Христове", "Christmas"),
    fixed(12, 31, "Щедрий вечір (Маланки)", "Generous Evening (Malanka)"),
];

const MOVABLE_RELIGIOUS: [MovableFeast; 5] = [
    movable(-49, "Прощена неділя", "Forgiveness Sunday"),
    movable(-7, "Вербна неділя", "Palm Sunday"),
    movable(0, "Великдень", "Easter"),
    movable(39, "Вознесіння Господнє", "Ascension"),
    movable(49, "Трійця", "Pentecost (Trinity)"),
];

const INTERNATIONAL: [FixedHoliday; 2] = [
    fixed(2, 14, "День Святого Валентина", "Valentine's Day"),
    fixed(3, 8, "Міжнародний жіночий день", "International Women's Day"),
];

/// Number of holidays that do not depend on Easter.
pub const FIXED_HOLIDAY_COUNT: usize =
    NATIONAL.len() + FIXED_RELIGIOUS.len() + INTERNATIONAL.len() + 2;

/// Number of Easter-dependent records (movable feasts + Lent days).
pub const EASTER_DEPENDENT_COUNT: usize = MOVABLE_RELIGIOUS.len() + GREAT_LENT_DAYS;

// ── Builders ──────────────────────────────────────────────────────────────────

/// Build the complete holiday catalog of `year`.
///
/// # Errors
/// Only when `year` lies outside [`SUPPORTED_YEARS`](fc_time::SUPPORTED_YEARS).
pub fn build_holiday_catalog(year: i32) -> Result<Vec<Holiday>> {
    check_supported_year(year)?;
    let mut holidays = Vec::with_capacity(FIXED_HOLIDAY_COUNT + EASTER_DEPENDENT_COUNT);
    holidays.extend(national_holidays(year)?);
    holidays.extend(fixed_religious_holidays(year)?);
    holidays.extend(movable_religious_holidays(year));
    holidays.extend(international_holidays(year)?);
    holidays.extend(commercial_holidays(year)?);
    holidays.extend(great_lent(year));

    if orthodox_easter(year).is_none() {
        tracing::warn!(
            year,
            "orthodox easter undefined for year; movable feasts and great lent omitted"
        );
    }
    tracing::debug!(year, count = holidays.len(), "built holiday catalog");
    Ok(holidays)
}

/// The seven national holidays of `year`.
pub fn national_holidays(year: i32) -> Result<Vec<Holiday>> {
    fixed_holidays(year, &NATIONAL, HolidayKind::National)
}

/// The fifteen fixed-date Orthodox feasts of `year`.
pub fn fixed_religious_holidays(year: i32) -> Result<Vec<Holiday>> {
    fixed_holidays(year, &FIXED_RELIGIOUS, HolidayKind::Religious)
}

/// The Easter-relative feasts of `year`; empty when Easter is undefined.
pub fn movable_religious_holidays(year: i32) -> Vec<Holiday> {
    let Some(easter) = orthodox_easter(year) else {
        return Vec::new();
    };
    MOVABLE_RELIGIOUS
        .iter()
        .filter_map(|f| {
            let date = easter.add_days(f.offset).ok()?;
            Some(Holiday::new(
                f.name,
                Some(f.name_en),
                date,
                HolidayKind::Religious,
            ))
        })
        .collect()
}

/// The international observances of `year`.
pub fn international_holidays(year: i32) -> Result<Vec<Holiday>> {
    fixed_holidays(year, &INTERNATIONAL, HolidayKind::International)
}

/// Black Friday and Cyber Monday of `year`.
pub fn commercial_holidays(year: i32) -> Result<Vec<Holiday>> {
    let friday = black_friday(year)?;
    let monday = cyber_monday(year)?;
    Ok(vec![
        Holiday::new(
            "Чорна п'ятниця",
            Some("Black Friday"),
            friday,
            HolidayKind::Commercial,
        ),
        Holiday::new(
            "Кіберпонеділок",
            Some("Cyber Monday"),
            monday,
            HolidayKind::Commercial,
        ),
    ])
}

/// One `Lent` record per day from Easter − 48 to Easter − 1.
///
/// Empty when Easter is undefined for `year`.
pub fn great_lent(year: i32) -> Vec<Holiday> {
    let Some(easter) = orthodox_easter(year) else {
        return Vec::new();
    };
    let (Ok(first), Ok(last)) = (
        easter.add_days(GREAT_LENT_START_OFFSET),
        easter.add_days(GREAT_LENT_END_OFFSET),
    ) else {
        return Vec::new();
    };
    first
        .iter_through(last)
        .map(|date| Holiday::new(GREAT_LENT.0, Some(GREAT_LENT.1), date, HolidayKind::Lent))
        .collect()
}

/// The day after the fourth Thursday of November (US Thanksgiving).
pub fn black_friday(year: i32) -> Result<Date> {
    Date::nth_weekday(4, Weekday::Thursday, year, 11)?.add_days(1)
}

/// The Monday after Black Friday.
pub fn cyber_monday(year: i32) -> Result<Date> {
    black_friday(year)?.add_days(3)
}

fn fixed_holidays(year: i32, table: &[FixedHoliday], kind: HolidayKind) -> Result<Vec<Holiday>> {
    table
        .iter()
        .map(|h| {
            let date = Date::from_ymd(year, h.month, h.day)?;
            Ok(Holiday::new(h.name, Some(h.name_en), date, kind))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn count(holidays: &[Holiday], kind: HolidayKind) -> usize {
        holidays.iter().filter(|h| h.kind() == kind).count()
    }

    fn find<'a>(holidays: &'a [Holiday], name_en: &str) -> &'a Holiday {
        holidays
            .iter()
            .find(|h| h.name_en() == Some(name_en))
            .unwrap_or_else(|| panic!("{name_en} missing"))
    }

    #[test]
    fn catalog_2024() {
        let hs = build_holiday_catalog(2024).unwrap();
        assert_eq!(hs.len(), FIXED_HOLIDAY_COUNT + EASTER_DEPENDENT_COUNT);
        assert_eq!(count(&hs, HolidayKind::National), 7);
        assert_eq!(count(&hs, HolidayKind::Religious), 20);
        assert_eq!(count(&hs, HolidayKind::International), 2);
        assert_eq!(count(&hs, HolidayKind::Commercial), 2);
        assert_eq!(count(&hs, HolidayKind::Lent), 48);

        let new_year = find(&hs, "New Year's Day");
        assert_eq!(new_year.date(), date(2024, 1, 1));
        assert_eq!(new_year.kind(), HolidayKind::National);
        assert_eq!(find(&hs, "Easter").date(), date(2024, 5, 5));
        assert_eq!(find(&hs, "Forgiveness Sunday").date(), date(2024, 3, 17));
        assert_eq!(find(&hs, "Ascension").date(), date(2024, 6, 13));
        assert_eq!(find(&hs, "Pentecost (Trinity)").date(), date(2024, 6, 23));
        assert_eq!(find(&hs, "Black Friday").date(), date(2024, 11, 29));
        assert_eq!(find(&hs, "Cyber Monday").date(), date(2024, 12, 2));
        assert_eq!(find(&hs, "Defenders Day").date(), date(2024, 10, 1));
    }

    #[test]
    fn great_lent_2024() {
        let lent = great_lent(2024);
        assert_eq!(lent.len(), GREAT_LENT_DAYS);
        assert_eq!(lent[0].date(), date(2024, 3, 18));
        assert_eq!(lent[47].date(), date(2024, 5, 4));
        assert!(lent.iter().all(|h| h.name() == "Великий піст"));
        assert_eq!(lent[0].date().weekday(), Weekday::Monday);
    }

    #[test]
    fn no_easter_no_movable_feasts() {
        for year in [1899, 2101, 1500, 3000] {
            let hs = build_holiday_catalog(year).unwrap();
            assert_eq!(hs.len(), FIXED_HOLIDAY_COUNT, "{year}");
            assert_eq!(count(&hs, HolidayKind::Lent), 0);
            assert_eq!(count(&hs, HolidayKind::Religious), 15);
            assert!(movable_religious_holidays(year).is_empty());
        }
    }

    #[test]
    fn black_friday_follows_fourth_thursday() {
        // November 2018 starts on a Thursday: Thanksgiving Nov 22.
        assert_eq!(black_friday(2018).unwrap(), date(2018, 11, 23));
        // November 2023 starts on a Wednesday: Thanksgiving Nov 23.
        assert_eq!(black_friday(2023).unwrap(), date(2023, 11, 24));
        assert_eq!(cyber_monday(2023).unwrap(), date(2023, 11, 27));
        for year in 1900..=2100 {
            let bf = black_friday(year).unwrap();
            assert_eq!(bf.weekday(), Weekday::Friday);
            assert!((23..=29).contains(&bf.day_of_month()));
            assert_eq!(cyber_monday(year).unwrap().weekday(), Weekday::Monday);
        }
    }

    #[test]
    fn catalog_is_pure() {
        assert_eq!(
            build_holiday_catalog(2025).unwrap(),
            build_holiday_catalog(2025).unwrap()
        );
    }

    #[test]
    fn unsupported_year() {
        assert!(build_holiday_catalog(9999).is_err());
    }
}

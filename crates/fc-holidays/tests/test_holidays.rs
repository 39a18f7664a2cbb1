//! Integration tests for the holiday catalog, date queries and the
//! upcoming-holidays view.

use fc_holidays::catalog::{GREAT_LENT_DAYS, GREAT_LENT_END_OFFSET, GREAT_LENT_START_OFFSET};
use fc_holidays::{build_holiday_catalog, HolidayGroup, HolidayKind, HolidayService};
use fc_time::{easter_relative, orthodox_easter, Date, FixedClock, PASCHALION_YEARS};
use proptest::prelude::*;

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn service_on(today: Date) -> HolidayService<FixedClock> {
    HolidayService::with_clock(FixedClock::new(today))
}

fn lent_periods(groups: &[HolidayGroup]) -> Vec<(Date, Date, u32)> {
    groups
        .iter()
        .filter_map(HolidayGroup::as_period)
        .map(|p| (p.start(), p.end(), p.day_count()))
        .collect()
}

// ─── Catalog ──────────────────────────────────────────────────────────────────

#[test]
fn catalog_sizes() {
    for year in PASCHALION_YEARS {
        assert_eq!(build_holiday_catalog(year).unwrap().len(), 79, "{year}");
    }
    for year in [1, 1000, 1899, 2101, 2500] {
        assert_eq!(build_holiday_catalog(year).unwrap().len(), 26, "{year}");
    }
}

#[test]
fn every_holiday_is_named_in_both_languages() {
    let catalog = build_holiday_catalog(2024).unwrap();
    for h in &catalog {
        assert!(!h.name().is_empty());
        assert!(h.name_en().is_some_and(|n| !n.is_empty()), "{}", h.name());
        assert_eq!(h.date().year(), 2024);
    }
}

#[test]
fn known_dates_2024() {
    let s = service_on(date(2024, 1, 1));
    let first = |d: Date| s.holiday_for_date(d).unwrap().unwrap();
    assert_eq!(first(date(2024, 5, 5)).name_en(), Some("Easter"));
    assert_eq!(first(date(2024, 1, 1)).kind(), HolidayKind::National);
    assert_eq!(first(date(2024, 11, 29)).name_en(), Some("Black Friday"));
    assert_eq!(first(date(2024, 12, 2)).name_en(), Some("Cyber Monday"));
    assert_eq!(first(date(2024, 3, 17)).name_en(), Some("Forgiveness Sunday"));
    assert_eq!(first(date(2024, 4, 28)).name_en(), Some("Palm Sunday"));
}

// ─── Queries ──────────────────────────────────────────────────────────────────

#[test]
fn shared_dates_follow_priority() {
    let s = service_on(date(2024, 1, 1));
    for year in PASCHALION_YEARS {
        let catalog = s.holidays_for_year(year).unwrap();
        for h in catalog.iter() {
            let found = s.holidays_for_date(h.date()).unwrap();
            assert!(found.contains(h));
            assert!(found.windows(2).all(|w| w[0].kind() <= w[1].kind()));
        }
    }
}

#[test]
fn holidays_between_matches_catalog() {
    let s = service_on(date(2024, 1, 1));
    let all = s
        .holidays_between(date(2024, 1, 1), date(2024, 12, 31))
        .unwrap();
    assert_eq!(all.len(), 79);
    assert!(all
        .windows(2)
        .all(|w| (w[0].date(), w[0].kind()) <= (w[1].date(), w[1].kind())));
}

#[test]
fn service_is_shareable_between_threads() {
    let s = std::sync::Arc::new(service_on(date(2024, 1, 1)));
    let handles: Vec<_> = (2020..2028)
        .map(|year| {
            let s = std::sync::Arc::clone(&s);
            std::thread::spawn(move || s.holidays_for_year(year).unwrap().len())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), 79);
    }
    assert_eq!(s.cached_years().len(), 5);
}

// ─── Upcoming ─────────────────────────────────────────────────────────────────

#[test]
fn window_spanning_two_lent_seasons() {
    let s = service_on(date(2024, 4, 1));
    let groups = s.upcoming_holidays(400).unwrap();
    let periods = lent_periods(&groups);
    assert_eq!(
        periods,
        vec![
            (date(2024, 3, 18), date(2024, 5, 4), 48),
            (date(2025, 3, 3), date(2025, 4, 19), 48),
        ]
    );
    assert!(groups.windows(2).all(|w| w[0].date() <= w[1].date()));
}

#[test]
fn no_lent_outside_season() {
    let s = service_on(date(2024, 6, 1));
    let groups = s.upcoming_holidays(60).unwrap();
    assert!(lent_periods(&groups).is_empty());
    assert!(groups.iter().all(|g| g.kind() != HolidayKind::Lent));
}

proptest! {
    #[test]
    fn any_window_touching_lent_yields_one_full_period(
        year in 1900i32..=2100,
        // Offset of "today" from Lent's first day, and window length.
        shift in -30i32..48,
        span in 0u32..40,
    ) {
        let easter = orthodox_easter(year).unwrap();
        let today = easter + GREAT_LENT_START_OFFSET + shift;
        let end = today + span as i32;
        prop_assume!(end >= easter + GREAT_LENT_START_OFFSET);

        let groups = service_on(today).upcoming_holidays(span).unwrap();
        let periods = lent_periods(&groups);
        prop_assert_eq!(periods.len(), 1);
        let (start, last, count) = periods[0];
        prop_assert_eq!(Some(start), easter_relative(year, GREAT_LENT_START_OFFSET));
        prop_assert_eq!(Some(last), easter_relative(year, GREAT_LENT_END_OFFSET));
        prop_assert_eq!(count as usize, GREAT_LENT_DAYS);
    }

    #[test]
    fn upcoming_singles_stay_in_window(
        serial in date(1900, 1, 1).serial()..date(2100, 6, 1).serial(),
        span in 0u32..120,
    ) {
        let today = Date::from_serial(serial).unwrap();
        let end = today + span as i32;
        let groups = service_on(today).upcoming_holidays(span).unwrap();
        for g in &groups {
            match g {
                HolidayGroup::Single(h) => {
                    prop_assert!(today <= h.date() && h.date() <= end);
                    prop_assert_ne!(h.kind(), HolidayKind::Lent);
                }
                HolidayGroup::Period(p) => {
                    prop_assert!(p.start() <= end && p.end() >= today);
                }
            }
        }
        prop_assert!(groups.windows(2).all(|w| w[0].date() <= w[1].date()));
    }

    #[test]
    fn catalog_outside_paschalion_has_no_movable_feasts(
        year in prop_oneof![-9998i32..1900, 2101i32..=9998],
    ) {
        let catalog = build_holiday_catalog(year).unwrap();
        prop_assert_eq!(catalog.len(), 26);
        prop_assert!(catalog.iter().all(|h| h.kind() != HolidayKind::Lent));
    }
}

// ─── Serialization ────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
#[test]
fn serializes_groups_as_json() {
    let s = service_on(date(2024, 3, 1));
    let groups = s.upcoming_holidays(20).unwrap();
    let json = serde_json::to_value(&groups).unwrap();

    assert_eq!(json[0]["type"], "single");
    assert_eq!(json[0]["kind"], "international");
    assert_eq!(json[0]["date"], "2024-03-08");
    assert_eq!(json[2]["type"], "period");
    assert_eq!(json[2]["start"], "2024-03-18");
    assert_eq!(json[2]["end"], "2024-05-04");
    assert_eq!(json[2]["day_count"], 48);
}

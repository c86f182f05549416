//! Property-based tests for fiscal year resolution.

use chrono::NaiveDate;
use proptest::prelude::*;

use super::year::{CALENDAR_YEAR, FiscalYear, FiscalYearConfig};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

proptest! {
    /// Round-trip law: shifting a fiscal year back and forward by one
    /// year must return the original interval, and vice versa.
    #[test]
    fn test_previous_next_round_trip(
        start_month in 1u32..=12,
        start_day in 1u32..=28,
        year in 1990i32..2100,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let config = FiscalYearConfig::new(start_month, start_day);
        let today = date(year, month, day);
        let fy = FiscalYear::containing(&config, today);

        prop_assert_eq!(fy.previous().next(), fy);
        prop_assert_eq!(fy.next().previous(), fy);
    }

    /// The resolved fiscal year always contains the reference date.
    #[test]
    fn test_containing_contains_today(
        start_month in 1u32..=12,
        start_day in 1u32..=28,
        year in 1990i32..2100,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let config = FiscalYearConfig::new(start_month, start_day);
        let today = date(year, month, day);
        let fy = FiscalYear::containing(&config, today);

        prop_assert!(fy.contains(today));
        prop_assert!(!fy.previous().contains(today));
        prop_assert!(!fy.next().contains(today));
    }

    /// Neighbouring fiscal years tile the timeline without gaps or overlap.
    #[test]
    fn test_adjacent_years_are_contiguous(
        start_month in 1u32..=12,
        start_day in 1u32..=28,
        year in 1990i32..2100,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let config = FiscalYearConfig::new(start_month, start_day);
        let fy = FiscalYear::containing(&config, date(year, month, day));

        let next_start = fy.end().succ_opt().unwrap();
        prop_assert_eq!(next_start, fy.next().start());

        let previous_end = fy.start().pred_opt().unwrap();
        prop_assert_eq!(previous_end, fy.previous().end());
    }

    /// Configuration clamping never produces an unresolvable anchor.
    #[test]
    fn test_config_clamps_out_of_range(
        start_month in 0u32..50,
        start_day in 0u32..50,
    ) {
        let config = FiscalYearConfig::new(start_month, start_day);
        prop_assert!((1..=12).contains(&config.start_month()));
        prop_assert!((1..=28).contains(&config.start_day()));
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_default_fiscal_year_is_calendar_year() {
        let fy = FiscalYear::containing(&CALENDAR_YEAR, date(2024, 6, 10));

        assert_eq!(fy.start(), date(2024, 1, 1));
        assert_eq!(fy.end(), date(2024, 12, 31));
    }

    #[test]
    fn test_calendar_year_neighbours() {
        let fy = FiscalYear::containing(&CALENDAR_YEAR, date(2024, 6, 10));

        assert_eq!(fy.previous().start(), date(2023, 1, 1));
        assert_eq!(fy.previous().end(), date(2023, 12, 31));
        assert_eq!(fy.next().start(), date(2025, 1, 1));
        assert_eq!(fy.next().end(), date(2025, 12, 31));
    }

    #[test]
    fn test_april_anchored_fiscal_year() {
        let config = FiscalYearConfig::new(4, 1);

        // Before the anchor: the fiscal year started the previous April.
        let fy = FiscalYear::containing(&config, date(2024, 2, 15));
        assert_eq!(fy.start(), date(2023, 4, 1));
        assert_eq!(fy.end(), date(2024, 3, 31));

        // On the anchor itself: a new fiscal year begins.
        let fy = FiscalYear::containing(&config, date(2024, 4, 1));
        assert_eq!(fy.start(), date(2024, 4, 1));
        assert_eq!(fy.end(), date(2025, 3, 31));
    }

    #[test]
    fn test_leap_year_interval_length_by_months() {
        // 2024 is a leap year: the interval is 366 days long but still
        // exactly twelve months by month arithmetic.
        let fy = FiscalYear::containing(&CALENDAR_YEAR, date(2024, 2, 29));
        assert_eq!(fy.start(), date(2024, 1, 1));
        assert_eq!(fy.end(), date(2024, 12, 31));
        assert!(fy.contains(date(2024, 2, 29)));
    }

    #[test]
    fn test_default_config_is_calendar_year() {
        assert_eq!(FiscalYearConfig::default(), CALENDAR_YEAR);
    }
}

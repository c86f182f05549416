//! Fiscal year value types.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Fiscal year anchor: the month and day a company's fiscal year starts on.
///
/// The day is clamped to 1-28 at construction so that shifting a fiscal
/// year by whole months is exact in both directions, including across
/// leap years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalYearConfig {
    start_month: u32,
    start_day: u32,
}

/// Default fiscal year configuration: the calendar year (Jan 1 - Dec 31).
///
/// Companies without a configured fiscal year resolve to this constant.
pub const CALENDAR_YEAR: FiscalYearConfig = FiscalYearConfig::new(1, 1);

impl FiscalYearConfig {
    /// Creates a configuration, clamping out-of-range values.
    ///
    /// Months outside 1-12 and days outside 1-28 fall back to 1.
    #[must_use]
    pub const fn new(start_month: u32, start_day: u32) -> Self {
        let start_month = if start_month >= 1 && start_month <= 12 {
            start_month
        } else {
            1
        };
        let start_day = if start_day >= 1 && start_day <= 28 {
            start_day
        } else {
            1
        };
        Self {
            start_month,
            start_day,
        }
    }

    /// Returns the start month (1-12).
    #[must_use]
    pub const fn start_month(&self) -> u32 {
        self.start_month
    }

    /// Returns the start day (1-28).
    #[must_use]
    pub const fn start_day(&self) -> u32 {
        self.start_day
    }

    /// Returns the fiscal year anchor date within the given calendar year.
    fn anchor_in(self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.start_month, self.start_day)
            .expect("month is 1-12 and day is 1-28, valid in every year")
    }
}

impl Default for FiscalYearConfig {
    fn default() -> Self {
        CALENDAR_YEAR
    }
}

/// An immutable 12-month fiscal year interval, both bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalYear {
    start: NaiveDate,
    end: NaiveDate,
}

impl FiscalYear {
    /// Returns the fiscal year containing `today` for the given configuration.
    ///
    /// The year starts at the configured anchor in `today`'s calendar year
    /// if that anchor is not after `today`, otherwise at the anchor one
    /// year earlier. Always produces a value; there is no failure path.
    #[must_use]
    pub fn containing(config: &FiscalYearConfig, today: NaiveDate) -> Self {
        let anchor = config.anchor_in(today.year());
        let start = if anchor <= today {
            anchor
        } else {
            config.anchor_in(today.year() - 1)
        };
        Self::starting_at(start)
    }

    /// Returns the preceding fiscal year (start shifted back 12 months).
    #[must_use]
    pub fn previous(&self) -> Self {
        let start = self
            .start
            .checked_sub_months(Months::new(12))
            .expect("fiscal year starts are far from the datetime range limits");
        Self::starting_at(start)
    }

    /// Returns the following fiscal year (start shifted forward 12 months).
    #[must_use]
    pub fn next(&self) -> Self {
        let start = self
            .start
            .checked_add_months(Months::new(12))
            .expect("fiscal year starts are far from the datetime range limits");
        Self::starting_at(start)
    }

    /// Returns the inclusive start date.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the inclusive end date.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true if the given date falls within this fiscal year.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Builds the 12-month interval starting at `start`.
    ///
    /// Length is measured by month arithmetic, not day count, so the
    /// interval spans 365- or 366-day years correctly.
    fn starting_at(start: NaiveDate) -> Self {
        let end = start
            .checked_add_months(Months::new(12))
            .and_then(|d| d.checked_sub_days(Days::new(1)))
            .expect("fiscal year starts are far from the datetime range limits");
        Self { start, end }
    }
}

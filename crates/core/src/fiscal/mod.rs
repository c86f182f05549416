//! Fiscal year resolution.
//!
//! A fiscal year is a company-configurable 12-month accounting period,
//! possibly not aligned to the calendar year. This module derives the
//! fiscal year containing a given date plus its neighbours, purely from
//! the configuration and the supplied date.

pub mod year;

#[cfg(test)]
mod tests;

pub use year::{CALENDAR_YEAR, FiscalYear, FiscalYearConfig};

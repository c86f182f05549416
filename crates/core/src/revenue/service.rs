//! Revenue period sequencing and aggregation.

use chrono::{Datelike, Days, Months, NaiveDate};
use rust_decimal::Decimal;

use super::types::{InvoiceAmount, Period, PeriodType, Revenue};

/// Service for building revenue periods and aggregating invoice amounts.
pub struct RevenueService;

impl RevenueService {
    /// Generates the ascending sequence of calendar-month periods touched
    /// by `[from, to)`.
    ///
    /// `from` is normalized to the first day of its month; each period
    /// spans `[cursor, cursor + 1 month - 1 day]`. The cursor advances by
    /// exactly one month per iteration, so the loop terminates for any
    /// input. An empty range (`from >= to`) yields no periods.
    #[must_use]
    pub fn monthly_periods(from: NaiveDate, to: NaiveDate) -> Vec<Period> {
        let mut cursor = month_start(from);
        let mut periods = Vec::new();

        while cursor < to {
            periods.push(Period {
                from: cursor,
                to: month_end(cursor),
                period_type: PeriodType::Monthly,
            });
            cursor = cursor
                .checked_add_months(Months::new(1))
                .expect("month cursors are far from the datetime range limits");
        }

        periods
    }

    /// Builds the single yearly period covering `[from, to]`.
    #[must_use]
    pub const fn yearly_period(from: NaiveDate, to: NaiveDate) -> Period {
        Period {
            from,
            to,
            period_type: PeriodType::Yearly,
        }
    }

    /// Reduces a collection of invoices into the revenue for one period.
    ///
    /// Paid invoices accumulate into `paid_amount`, every other status
    /// into `invoiced_amount`: a strict partition, so the two totals sum
    /// to the gross total of the input. The input is expected to be
    /// pre-filtered to the period's date range by the caller's lookup.
    #[must_use]
    pub fn aggregate(period: &Period, invoices: &[InvoiceAmount]) -> Revenue {
        let (paid_amount, invoiced_amount) = invoices.iter().fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(paid, invoiced), invoice| {
                if invoice.status.is_paid() {
                    (paid + invoice.gross_amount, invoiced)
                } else {
                    (paid, invoiced + invoice.gross_amount)
                }
            },
        );

        Revenue {
            from: period.from,
            to: period.to,
            period_type: period.period_type,
            paid_amount,
            invoiced_amount,
        }
    }
}

/// Returns the first day of `date`'s month.
fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 exists in every month")
}

/// Returns the last day of the month starting at `start`.
fn month_end(start: NaiveDate) -> NaiveDate {
    start
        .checked_add_months(Months::new(1))
        .and_then(|d| d.checked_sub_days(Days::new(1)))
        .expect("month cursors are far from the datetime range limits")
}

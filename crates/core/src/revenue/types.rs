//! Revenue data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kind of interval a revenue figure covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    /// A full fiscal year.
    Yearly,
    /// A single calendar month.
    Monthly,
}

/// A labeled date interval, both bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// Inclusive start date.
    pub from: NaiveDate,
    /// Inclusive end date.
    pub to: NaiveDate,
    /// Interval kind.
    pub period_type: PeriodType,
}

/// Invoice lifecycle status.
///
/// Exactly one status counts as collected; classification for revenue
/// purposes is total over all variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Not yet issued.
    Draft,
    /// Issued and awaiting payment.
    Sent,
    /// Issued, past its due date.
    Overdue,
    /// Fully paid.
    Paid,
    /// Cancelled after issue.
    Cancelled,
}

impl InvoiceStatus {
    /// Returns true only for paid invoices.
    ///
    /// Everything else counts as invoiced, including cancelled invoices.
    #[must_use]
    pub const fn is_paid(self) -> bool {
        matches!(self, Self::Paid)
    }
}

/// Read-only view of an invoice, as consumed by the aggregator.
///
/// The issue date is not carried here: range filtering happens in the
/// external lookup before invoices reach the reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvoiceAmount {
    /// Invoice lifecycle status.
    pub status: InvoiceStatus,
    /// Total invoice amount including tax.
    pub gross_amount: Decimal,
}

/// Aggregated revenue for one period.
///
/// Created fresh per period by the aggregation fold and never mutated
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revenue {
    /// Inclusive start of the period.
    pub from: NaiveDate,
    /// Inclusive end of the period.
    pub to: NaiveDate,
    /// Interval kind.
    pub period_type: PeriodType,
    /// Sum of gross amounts of paid invoices.
    pub paid_amount: Decimal,
    /// Sum of gross amounts of all other invoices.
    pub invoiced_amount: Decimal,
}

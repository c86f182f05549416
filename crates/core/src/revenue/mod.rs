//! Revenue aggregation.
//!
//! This module provides pure business logic for revenue reports:
//! - Monthly period sequencing over an arbitrary date range
//! - Reduction of invoice amounts into paid/invoiced totals per period

pub mod service;
pub mod types;


pub use service::RevenueService;
pub use types::{InvoiceAmount, InvoiceStatus, Period, PeriodType, Revenue};

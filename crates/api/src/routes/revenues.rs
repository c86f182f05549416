//! Revenue report routes.
//!
//! Two read-only report endpoints: revenue per fiscal year (previous,
//! current, next) and revenue per calendar month over a date range.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use futures::future::try_join_all;
use rust_decimal::Decimal;
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use crate::{AppState, middleware::AuthUser};
use revly_core::fiscal::{CALENDAR_YEAR, FiscalYear, FiscalYearConfig};
use revly_core::revenue::{InvoiceAmount, Period, PeriodType, Revenue, RevenueService};
use revly_db::{CompanyRepository, InvoiceRepository};
use revly_shared::AppError;

/// Creates the revenue routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/revenues/fiscal", get(get_fiscal_revenues))
        .route("/revenues/monthly", get(get_monthly_revenues))
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Query parameters for the monthly revenue report.
///
/// Parameters arrive as raw strings so malformed values can be rejected
/// with an explicit validation error before any period is built.
#[derive(Debug, Deserialize)]
pub struct MonthlyRevenuesQuery {
    /// Range start (RFC 3339 timestamp or `YYYY-MM-DD`); defaults to six
    /// months before now, truncated to the first day of the month.
    pub from: Option<String>,
    /// Range end (RFC 3339 timestamp or `YYYY-MM-DD`); defaults to now.
    pub to: Option<String>,
}

// ============================================================================
// Response Types
// ============================================================================

/// Aggregated revenue for one period.
#[derive(Debug, Serialize)]
pub struct RevenueResponse {
    /// Inclusive period start (ISO date).
    pub from: String,
    /// Inclusive period end (ISO date).
    pub to: String,
    /// Period kind.
    pub period_type: PeriodType,
    /// Collected total.
    pub paid_amount: String,
    /// Billed-but-uncollected total.
    pub invoiced_amount: String,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Builds the JSON error response for an application error.
fn error_response(error: &AppError) -> Response {
    let status = StatusCode::from_u16(error.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        Json(json!({
            "error": error.error_code(),
            "message": error.to_string()
        })),
    )
        .into_response()
}

/// Parses a `from`/`to` query parameter as an RFC 3339 timestamp or a
/// plain ISO date, keeping date-only granularity either way.
fn parse_date_param(name: &str, value: &str) -> Result<NaiveDate, AppError> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.date_naive());
    }

    value
        .parse::<NaiveDate>()
        .map_err(|_| AppError::Validation(format!("invalid '{name}' parameter: {value}")))
}

/// Default monthly range start: six months before `now`, truncated to
/// the first day of the month.
fn default_monthly_from(now: NaiveDate) -> NaiveDate {
    now.checked_sub_months(Months::new(6))
        .and_then(|d| d.with_day(1))
        .unwrap_or(now)
}

/// Formats a Decimal as a string with 2 decimal places.
fn format_money(amount: Decimal) -> String {
    format!("{amount:.2}")
}

/// Converts a core revenue record to its response shape.
fn revenue_to_response(revenue: &Revenue) -> RevenueResponse {
    RevenueResponse {
        from: revenue.from.to_string(),
        to: revenue.to.to_string(),
        period_type: revenue.period_type,
        paid_amount: format_money(revenue.paid_amount),
        invoiced_amount: format_money(revenue.invoiced_amount),
    }
}

/// Resolves the fiscal year configuration for the current user's company.
///
/// An absent company reference, an unknown key, and a company without a
/// configured fiscal year all resolve to the calendar-year default;
/// only a failing lookup is an error.
async fn resolve_fiscal_config(
    state: &AppState,
    company_ref: Option<uuid::Uuid>,
) -> Result<FiscalYearConfig, Response> {
    let Some(key) = company_ref else {
        return Ok(CALENDAR_YEAR);
    };

    let company_repo = CompanyRepository::new((*state.db).clone());
    match company_repo.find_by_key(key).await {
        Ok(Some(company)) => Ok(company.fiscal_config().unwrap_or(CALENDAR_YEAR)),
        Ok(None) => Ok(CALENDAR_YEAR),
        Err(e) => {
            error!(error = %e, company = %key, "Failed to look up company");
            Err(error_response(&AppError::Dependency(
                "company lookup failed".to_string(),
            )))
        }
    }
}

/// Aggregates revenue for each period, preserving period order.
///
/// Per-period lookups are independent, so they run concurrently; the
/// join reassembles results in the input order regardless of completion
/// order and fails the whole request on the first lookup error.
async fn aggregate_periods(
    state: &AppState,
    periods: Vec<Period>,
) -> Result<Vec<RevenueResponse>, Response> {
    let invoice_repo = InvoiceRepository::new((*state.db).clone());

    let lookups = periods.into_iter().map(|period| {
        let repo = invoice_repo.clone();
        async move {
            let invoices = repo.find_by_issue_dates(period.from, period.to).await?;
            let amounts: Vec<InvoiceAmount> =
                invoices.iter().map(|invoice| invoice.amount_view()).collect();
            Ok::<_, DbErr>(RevenueService::aggregate(&period, &amounts))
        }
    });

    match try_join_all(lookups).await {
        Ok(revenues) => Ok(revenues.iter().map(revenue_to_response).collect()),
        Err(e) => {
            error!(error = %e, "Failed to query invoices");
            Err(error_response(&AppError::Dependency(
                "invoice lookup failed".to_string(),
            )))
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /revenues/fiscal
///
/// Returns three yearly revenue records: previous, current, and next
/// fiscal year for the current user's company (calendar year when no
/// company or no configuration is present).
async fn get_fiscal_revenues(State(state): State<AppState>, auth_user: AuthUser) -> Response {
    let today = Utc::now().date_naive();

    let config = match resolve_fiscal_config(&state, auth_user.company_ref()).await {
        Ok(config) => config,
        Err(response) => return response,
    };

    let current = FiscalYear::containing(&config, today);
    let periods = vec![
        yearly_period(&current.previous()),
        yearly_period(&current),
        yearly_period(&current.next()),
    ];

    match aggregate_periods(&state, periods).await {
        Ok(revenues) => Json(revenues).into_response(),
        Err(response) => response,
    }
}

/// GET /revenues/monthly?from=&to=
///
/// Returns one monthly revenue record per calendar month touched by the
/// requested (or defaulted) range, in ascending order.
async fn get_monthly_revenues(
    State(state): State<AppState>,
    Query(query): Query<MonthlyRevenuesQuery>,
) -> Response {
    let now = Utc::now().date_naive();

    let from = match query.from.as_deref() {
        Some(value) => match parse_date_param("from", value) {
            Ok(date) => date,
            Err(e) => return error_response(&e),
        },
        None => default_monthly_from(now),
    };
    let to = match query.to.as_deref() {
        Some(value) => match parse_date_param("to", value) {
            Ok(date) => date,
            Err(e) => return error_response(&e),
        },
        None => now,
    };

    let periods = RevenueService::monthly_periods(from, to);

    match aggregate_periods(&state, periods).await {
        Ok(revenues) => Json(revenues).into_response(),
        Err(response) => response,
    }
}

/// Builds the yearly period for a fiscal year.
fn yearly_period(fiscal_year: &FiscalYear) -> Period {
    RevenueService::yearly_period(fiscal_year.start(), fiscal_year.end())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case("2024-02-10", date(2024, 2, 10))]
    #[case("2024-02-10T14:30:00Z", date(2024, 2, 10))]
    #[case("2024-02-10T23:59:59+02:00", date(2024, 2, 10))]
    fn test_parse_date_param_accepts_dates_and_timestamps(
        #[case] input: &str,
        #[case] expected: NaiveDate,
    ) {
        assert_eq!(parse_date_param("from", input).unwrap(), expected);
    }

    #[rstest]
    #[case("not-a-date")]
    #[case("2024-13-01")]
    #[case("10/02/2024")]
    #[case("")]
    fn test_parse_date_param_rejects_malformed(#[case] input: &str) {
        let error = parse_date_param("from", input).unwrap_err();
        assert_eq!(error.status_code(), 400);
        assert_eq!(error.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_default_monthly_from_truncates_to_month_start() {
        assert_eq!(default_monthly_from(date(2024, 8, 20)), date(2024, 2, 1));
        assert_eq!(default_monthly_from(date(2024, 3, 5)), date(2023, 9, 1));
    }

    #[test]
    fn test_format_money_two_decimals() {
        assert_eq!(format_money(dec!(100)), "100.00");
        assert_eq!(format_money(dec!(0.5)), "0.50");
        assert_eq!(format_money(dec!(1234.56)), "1234.56");
    }

    #[test]
    fn test_revenue_to_response_mapping() {
        let revenue = Revenue {
            from: date(2024, 2, 1),
            to: date(2024, 2, 29),
            period_type: PeriodType::Monthly,
            paid_amount: dec!(100),
            invoiced_amount: dec!(50),
        };

        let response = revenue_to_response(&revenue);

        assert_eq!(response.from, "2024-02-01");
        assert_eq!(response.to, "2024-02-29");
        assert_eq!(response.paid_amount, "100.00");
        assert_eq!(response.invoiced_amount, "50.00");
    }
}

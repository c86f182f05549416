//! Invoice repository for database operations.

use chrono::NaiveDate;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::invoices;

/// Read-only invoice lookup repository.
///
/// The invoicing subsystem owns writes; this service only queries by
/// issue-date range for aggregation.
#[derive(Debug, Clone)]
pub struct InvoiceRepository {
    db: DatabaseConnection,
}

impl InvoiceRepository {
    /// Creates a new invoice repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds all invoices whose issue date falls within `[from, to]`,
    /// inclusive on both ends, ordered by issue date.
    ///
    /// An invoice dated exactly on `to` is included.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_issue_dates(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<invoices::Model>, DbErr> {
        invoices::Entity::find()
            .filter(invoices::Column::IssueDate.gte(from))
            .filter(invoices::Column::IssueDate.lte(to))
            .order_by_asc(invoices::Column::IssueDate)
            .all(&self.db)
            .await
    }
}

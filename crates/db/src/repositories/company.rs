//! Company repository for database operations.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use uuid::Uuid;

use crate::entities::companies;

/// Company lookup repository.
#[derive(Debug, Clone)]
pub struct CompanyRepository {
    db: DatabaseConnection,
}

impl CompanyRepository {
    /// Creates a new company repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a company by its key.
    ///
    /// Absence is a normal outcome, not an error: callers fall back to
    /// the default fiscal year.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_key(&self, key: Uuid) -> Result<Option<companies::Model>, DbErr> {
        companies::Entity::find_by_id(key).one(&self.db).await
    }
}

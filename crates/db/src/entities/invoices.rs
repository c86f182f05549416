//! `SeaORM` Entity for invoices table.
//!
//! Invoices are owned and mutated by the invoicing subsystem; this
//! service only reads them for aggregation.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::InvoiceStatus;

/// Invoice record.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "invoices")]
pub struct Model {
    /// Invoice key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Issuing company.
    pub company_id: Uuid,
    /// Human-readable invoice reference.
    pub reference: String,
    /// Lifecycle status.
    pub status: InvoiceStatus,
    /// Total amount including tax.
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub gross_amount: Decimal,
    /// Date the invoice was issued.
    pub issue_date: Date,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
    /// Last update timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// The issuing company.
    #[sea_orm(
        belongs_to = "super::companies::Entity",
        from = "Column::CompanyId",
        to = "super::companies::Column::Id"
    )]
    Companies,
}

impl Related<super::companies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Companies.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Returns the core read-only view used by the revenue aggregator.
    #[must_use]
    pub fn amount_view(&self) -> revly_core::revenue::InvoiceAmount {
        revly_core::revenue::InvoiceAmount {
            status: self.status.into(),
            gross_amount: self.gross_amount,
        }
    }
}

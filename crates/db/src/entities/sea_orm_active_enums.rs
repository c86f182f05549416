//! `SeaORM` active enums mapped to PostgreSQL enum types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Invoice lifecycle status, mirroring the `invoice_status` database enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "invoice_status")]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Not yet issued.
    #[sea_orm(string_value = "draft")]
    Draft,
    /// Issued and awaiting payment.
    #[sea_orm(string_value = "sent")]
    Sent,
    /// Issued, past its due date.
    #[sea_orm(string_value = "overdue")]
    Overdue,
    /// Fully paid.
    #[sea_orm(string_value = "paid")]
    Paid,
    /// Cancelled after issue.
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

impl From<InvoiceStatus> for revly_core::revenue::InvoiceStatus {
    fn from(status: InvoiceStatus) -> Self {
        match status {
            InvoiceStatus::Draft => Self::Draft,
            InvoiceStatus::Sent => Self::Sent,
            InvoiceStatus::Overdue => Self::Overdue,
            InvoiceStatus::Paid => Self::Paid,
            InvoiceStatus::Cancelled => Self::Cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_maps_onto_core_total() {
        use revly_core::revenue::InvoiceStatus as Core;

        assert_eq!(Core::from(InvoiceStatus::Paid), Core::Paid);
        assert!(Core::from(InvoiceStatus::Paid).is_paid());

        for status in [
            InvoiceStatus::Draft,
            InvoiceStatus::Sent,
            InvoiceStatus::Overdue,
            InvoiceStatus::Cancelled,
        ] {
            assert!(!Core::from(status).is_paid());
        }
    }
}

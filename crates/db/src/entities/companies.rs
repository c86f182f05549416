//! `SeaORM` Entity for companies table.

use revly_core::fiscal::FiscalYearConfig;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Company record.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    /// Company key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Configured fiscal year start month (1-12), if any.
    pub fiscal_year_start_month: Option<i32>,
    /// Configured fiscal year start day (1-28), if any.
    pub fiscal_year_start_day: Option<i32>,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
    /// Last update timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Invoices issued by this company.
    #[sea_orm(has_many = "super::invoices::Entity")]
    Invoices,
}

impl Related<super::invoices::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Invoices.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Returns the company's fiscal year configuration, if one is set.
    ///
    /// Both anchor columns must be present; a partial configuration
    /// counts as unconfigured. Out-of-range stored values are clamped by
    /// `FiscalYearConfig::new`.
    #[must_use]
    pub fn fiscal_config(&self) -> Option<FiscalYearConfig> {
        match (self.fiscal_year_start_month, self.fiscal_year_start_day) {
            (Some(month), Some(day)) => Some(FiscalYearConfig::new(
                u32::try_from(month).unwrap_or(1),
                u32::try_from(day).unwrap_or(1),
            )),
            _ => None,
        }
    }
}

//! `SeaORM` entity definitions.

pub mod companies;
pub mod invoices;
pub mod sea_orm_active_enums;

//! Initial database migration.
//!
//! Creates the invoice status enum, the companies and invoices tables,
//! their indexes, and the updated_at trigger.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(ENUMS_SQL).await?;
        db.execute_unprepared(COMPANIES_SQL).await?;
        db.execute_unprepared(INVOICES_SQL).await?;
        db.execute_unprepared(TRIGGERS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

const ENUMS_SQL: &str = r"
-- Invoice lifecycle status
CREATE TYPE invoice_status AS ENUM (
    'draft',
    'sent',
    'overdue',
    'paid',
    'cancelled'
);
";

const COMPANIES_SQL: &str = r"
CREATE TABLE companies (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(255) NOT NULL,

    -- Fiscal year anchor; both NULL means the calendar-year default
    fiscal_year_start_month SMALLINT,
    fiscal_year_start_day SMALLINT,

    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),

    CONSTRAINT chk_fiscal_start_month CHECK (
        fiscal_year_start_month IS NULL OR fiscal_year_start_month BETWEEN 1 AND 12
    ),
    CONSTRAINT chk_fiscal_start_day CHECK (
        fiscal_year_start_day IS NULL OR fiscal_year_start_day BETWEEN 1 AND 28
    )
);
";

const INVOICES_SQL: &str = r"
CREATE TABLE invoices (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    company_id UUID NOT NULL REFERENCES companies(id) ON DELETE CASCADE,
    reference VARCHAR(100) NOT NULL,
    status invoice_status NOT NULL DEFAULT 'draft',
    gross_amount NUMERIC(19, 4) NOT NULL,
    issue_date DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),

    CONSTRAINT chk_gross_amount_non_negative CHECK (gross_amount >= 0),
    CONSTRAINT uq_invoices_company_reference UNIQUE (company_id, reference)
);

-- Revenue reports query by issue-date range
CREATE INDEX idx_invoices_issue_date ON invoices(issue_date);
CREATE INDEX idx_invoices_company ON invoices(company_id);
";

const TRIGGERS_SQL: &str = r"
CREATE OR REPLACE FUNCTION set_updated_at()
RETURNS TRIGGER AS $$
BEGIN
    NEW.updated_at = now();
    RETURN NEW;
END;
$$ LANGUAGE plpgsql;

CREATE TRIGGER trg_companies_updated_at
BEFORE UPDATE ON companies
FOR EACH ROW
EXECUTE FUNCTION set_updated_at();

CREATE TRIGGER trg_invoices_updated_at
BEFORE UPDATE ON invoices
FOR EACH ROW
EXECUTE FUNCTION set_updated_at();
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS invoices;
DROP TABLE IF EXISTS companies;
DROP FUNCTION IF EXISTS set_updated_at();
DROP TYPE IF EXISTS invoice_status;
";

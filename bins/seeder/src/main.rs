//! Database seeder for Revly development and testing.
//!
//! Seeds a demo company and a spread of invoices across the last year
//! for local development and testing purposes.
//!
//! Usage: cargo run --bin seeder

use chrono::{Datelike, Months, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::str::FromStr;
use uuid::Uuid;
use revly_db::entities::{companies, invoices, sea_orm_active_enums::InvoiceStatus};

/// Demo company ID (consistent for all seeds)
const DEMO_COMPANY_ID: &str = "00000000-0000-0000-0000-000000000001";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = revly_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding demo company...");
    seed_demo_company(&db).await;

    println!("Seeding demo invoices...");
    seed_demo_invoices(&db).await;

    println!("Seeding complete!");
}

fn demo_company_id() -> Uuid {
    Uuid::parse_str(DEMO_COMPANY_ID).unwrap()
}

/// Seeds a demo company with an April-anchored fiscal year.
async fn seed_demo_company(db: &DatabaseConnection) {
    // Check if company already exists
    if companies::Entity::find_by_id(demo_company_id())
        .one(db)
        .await
        .ok()
        .flatten()
        .is_some()
    {
        println!("  Demo company already exists, skipping...");
        return;
    }

    let company = companies::ActiveModel {
        id: Set(demo_company_id()),
        name: Set("Demo Company".to_string()),
        fiscal_year_start_month: Set(Some(4)),
        fiscal_year_start_day: Set(Some(1)),
        created_at: Set(Utc::now().into()),
        updated_at: Set(Utc::now().into()),
    };

    if let Err(e) = company.insert(db).await {
        eprintln!("Failed to insert demo company: {e}");
    } else {
        println!("  Created demo company: Demo Company");
    }
}

/// Seeds one invoice per status per month over the last twelve months.
async fn seed_demo_invoices(db: &DatabaseConnection) {
    let statuses = [
        (InvoiceStatus::Paid, "1200.00"),
        (InvoiceStatus::Sent, "850.50"),
        (InvoiceStatus::Overdue, "430.25"),
        (InvoiceStatus::Draft, "99.90"),
        (InvoiceStatus::Cancelled, "310.00"),
    ];

    let today = Utc::now().date_naive();
    let mut inserted = 0;

    for month_offset in 0..12u32 {
        let Some(issue_date) = today
            .checked_sub_months(Months::new(month_offset))
            .and_then(|d| d.with_day(15))
        else {
            continue;
        };

        for (index, (status, amount)) in statuses.iter().enumerate() {
            let reference = format!(
                "INV-{}{:02}-{:02}",
                issue_date.year(),
                issue_date.month(),
                index + 1
            );

            let invoice = invoices::ActiveModel {
                id: Set(Uuid::new_v4()),
                company_id: Set(demo_company_id()),
                reference: Set(reference.clone()),
                status: Set(*status),
                gross_amount: Set(Decimal::from_str(amount).unwrap()),
                issue_date: Set(issue_date),
                created_at: Set(Utc::now().into()),
                updated_at: Set(Utc::now().into()),
            };

            match invoice.insert(db).await {
                Ok(_) => inserted += 1,
                Err(e) => eprintln!("Failed to insert invoice {reference}: {e}"),
            }
        }
    }

    println!("  Inserted {inserted} invoices");
}

//! Shared test utilities for `CaseTrace`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{case, transaction},
    entities,
    errors::Result,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = crate::config::database::create_connection("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Fixed calendar date used by transaction factories.
#[must_use]
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap_or_default()
}

/// Creates a test case with sensible defaults.
///
/// # Arguments
/// * `db` - Database connection
/// * `title` - Case title
///
/// # Defaults
/// * `description`: None
/// * `status`: `"open"` (assigned by the store)
pub async fn create_test_case(
    db: &DatabaseConnection,
    title: &str,
) -> Result<entities::case::Model> {
    case::create_case(db, title.to_string(), None).await
}

/// Creates a test case with a description.
/// Use this when a test needs the optional field populated.
pub async fn create_custom_case(
    db: &DatabaseConnection,
    title: &str,
    description: Option<String>,
) -> Result<entities::case::Model> {
    case::create_case(db, title.to_string(), description).await
}

/// Creates a test transaction with sensible defaults.
///
/// # Arguments
/// * `db` - Database connection
/// * `case_id` - Owning case ID
/// * `amount` - Transaction amount (must be positive)
///
/// # Defaults
/// * `description`: `"Test transaction"`
/// * `transaction_date`: [`test_date`]
pub async fn create_test_transaction(
    db: &DatabaseConnection,
    case_id: i64,
    amount: Decimal,
) -> Result<entities::transaction::Model> {
    transaction::create_transaction(
        db,
        case_id,
        amount,
        Some("Test transaction".to_string()),
        test_date(),
    )
    .await
}

/// Creates a test transaction with custom parameters.
pub async fn create_custom_transaction(
    db: &DatabaseConnection,
    case_id: i64,
    amount: Decimal,
    description: Option<String>,
    transaction_date: NaiveDate,
) -> Result<entities::transaction::Model> {
    transaction::create_transaction(db, case_id, amount, description, transaction_date).await
}

/// Sets up a complete test environment with a case.
/// Returns (db, case) for common test scenarios.
pub async fn setup_with_case() -> Result<(DatabaseConnection, entities::case::Model)> {
    let db = setup_test_db().await?;
    let case = create_test_case(&db, "Test Case").await?;
    Ok((db, case))
}

//! Database configuration module for `CaseTrace`.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! It provides functions for establishing database connections and creating all necessary tables
//! based on the entity definitions. The module uses `SeaORM`'s `Schema::create_table_from_entity`
//! method to automatically generate SQL statements from the entity models, ensuring that the
//! database schema matches the Rust struct definitions without requiring manual SQL.

use crate::entities::{Case, Transaction};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Establishes a connection to the database at the given URL.
///
/// The URL comes from application settings (`DATABASE_URL`, with a local
/// `SQLite` file as the fallback). This function handles connection errors
/// and provides a clean interface for database access throughout the
/// application.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates all necessary database tables using `SeaORM`'s schema generation from entity definitions.
///
/// This function uses the `DeriveEntityModel` macros to automatically generate proper SQL
/// statements for table creation, ensuring the database schema matches the Rust struct
/// definitions. It creates tables for cases and transactions, skipping any that already
/// exist so startup is idempotent.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    // Use SeaORM's proper table creation using Schema::create_table_from_entity
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut case_table = schema.create_table_from_entity(Case);
    case_table.if_not_exists();
    let mut transaction_table = schema.create_table_from_entity(Transaction);
    transaction_table.if_not_exists();

    db.execute(builder.build(&case_table)).await?;
    db.execute(builder.build(&transaction_table)).await?;

    Ok(())
}

//! Case business logic - Handles all case-related operations.
//!
//! This module provides functions for creating, retrieving, updating, deleting,
//! and analyzing investigation cases. Field constraints (title and description
//! length bounds) are enforced here, before anything touches the database, and
//! multi-row mutations run inside a database transaction so a case is never
//! left half-deleted. All functions are async and return Result types for
//! proper error handling throughout the system.

use crate::{
    core::analysis::{self, AnomalousTransaction},
    entities::{Case, Transaction, case, transaction},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{IntoActiveModel, QueryOrder, QuerySelect, Set, TransactionTrait, prelude::*};
use serde::Serialize;

/// Status assigned to every newly created case.
pub const DEFAULT_STATUS: &str = "open";

/// Minimum case title length in characters.
const TITLE_MIN: usize = 3;
/// Maximum case title length in characters.
const TITLE_MAX: usize = 100;
/// Maximum case description length in characters.
const DESCRIPTION_MAX: usize = 500;

/// A case together with all transactions currently referencing it.
///
/// Serializes as the case record itself plus a `transactions` array, which is
/// the shape clients receive. The transaction collection is resolved by query
/// at read time; it is not a live object graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseRecord {
    /// The case itself
    #[serde(flatten)]
    pub case: case::Model,
    /// All live transactions referencing this case
    pub transactions: Vec<transaction::Model>,
}

/// Partial update for a case: only the supplied fields are applied.
///
/// Each field is wrapped in `Option` as the present/absent marker; `None`
/// leaves the stored value untouched. Supplied fields are re-validated with
/// the same bounds as on creation.
#[derive(Debug, Clone, Default)]
pub struct UpdateCase {
    /// New title, if supplied (3-100 characters)
    pub title: Option<String>,
    /// New description, if supplied (up to 500 characters)
    pub description: Option<String>,
    /// New status, if supplied
    pub status: Option<String>,
}

fn validate_title(title: &str) -> Result<()> {
    let length = title.chars().count();
    if length < TITLE_MIN || length > TITLE_MAX {
        return Err(Error::Validation {
            message: format!(
                "title must be between {TITLE_MIN} and {TITLE_MAX} characters, got {length}"
            ),
        });
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<()> {
    let length = description.chars().count();
    if length > DESCRIPTION_MAX {
        return Err(Error::Validation {
            message: format!(
                "description must be at most {DESCRIPTION_MAX} characters, got {length}"
            ),
        });
    }
    Ok(())
}

/// Creates a new case with the specified title and optional description.
///
/// This function validates the field bounds, trims whitespace from the title,
/// and initializes the case with the default status and matching
/// `created_at`/`updated_at` timestamps.
pub async fn create_case(
    db: &DatabaseConnection,
    title: String,
    description: Option<String>,
) -> Result<case::Model> {
    let title = title.trim().to_string();
    validate_title(&title)?;
    if let Some(description) = &description {
        validate_description(description)?;
    }

    let now = Utc::now();
    let case = case::ActiveModel {
        title: Set(title),
        description: Set(description),
        status: Set(DEFAULT_STATUS.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let result = case.insert(db).await?;
    Ok(result)
}

/// Finds a case by its unique ID, returning None if it does not exist.
///
/// This function is used for direct case lookups by primary key; callers that
/// need a hard failure map the None to [`Error::CaseNotFound`].
pub async fn get_case_by_id(db: &DatabaseConnection, case_id: i64) -> Result<Option<case::Model>> {
    Case::find_by_id(case_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves one offset/limit page of cases, each paired with its transactions.
///
/// Cases come back ordered by ID so pagination is stable across requests.
/// No total-count is computed.
///
/// # Arguments
/// * `db` - Database connection
/// * `skip` - Number of cases to skip from the start
/// * `limit` - Maximum number of cases to return
pub async fn list_cases(db: &DatabaseConnection, skip: u64, limit: u64) -> Result<Vec<CaseRecord>> {
    let cases = Case::find()
        .order_by_asc(case::Column::Id)
        .offset(skip)
        .limit(limit)
        .all(db)
        .await?;

    let mut records = Vec::with_capacity(cases.len());
    for case in cases {
        let transactions = case
            .find_related(Transaction)
            .order_by_asc(transaction::Column::Id)
            .all(db)
            .await?;
        records.push(CaseRecord { case, transactions });
    }

    Ok(records)
}

/// Retrieves a single case with its transaction collection.
///
/// Fails with [`Error::CaseNotFound`] if the ID references no case.
pub async fn get_case_record(db: &DatabaseConnection, case_id: i64) -> Result<CaseRecord> {
    let case = get_case_by_id(db, case_id)
        .await?
        .ok_or(Error::CaseNotFound { id: case_id })?;

    let transactions = case
        .find_related(Transaction)
        .order_by_asc(transaction::Column::Id)
        .all(db)
        .await?;

    Ok(CaseRecord { case, transactions })
}

/// Applies a partial update to a case and refreshes its `updated_at` timestamp.
///
/// Only the fields present in `update` are written; everything else keeps its
/// stored value. Supplied fields are validated with the same bounds as on
/// creation, and validation failures leave the case untouched.
///
/// # Arguments
/// * `db` - Database connection
/// * `case_id` - ID of the case to update
/// * `update` - The fields to change
///
/// # Returns
/// The updated case model, or [`Error::CaseNotFound`] if the ID is absent.
pub async fn update_case(
    db: &DatabaseConnection,
    case_id: i64,
    update: UpdateCase,
) -> Result<case::Model> {
    let case = get_case_by_id(db, case_id)
        .await?
        .ok_or(Error::CaseNotFound { id: case_id })?;

    if let Some(title) = &update.title {
        validate_title(title.trim())?;
    }
    if let Some(description) = &update.description {
        validate_description(description)?;
    }

    let mut active = case.into_active_model();
    if let Some(title) = update.title {
        active.title = Set(title.trim().to_string());
    }
    if let Some(description) = update.description {
        active.description = Set(Some(description));
    }
    if let Some(status) = update.status {
        active.status = Set(status);
    }
    active.updated_at = Set(Utc::now());

    active.update(db).await.map_err(Into::into)
}

/// Deletes a case together with all transactions referencing it.
///
/// The case row and its transactions are removed in one database transaction,
/// so a failure partway through leaves everything in place. Transactions
/// cannot outlive their case.
pub async fn delete_case(db: &DatabaseConnection, case_id: i64) -> Result<()> {
    let txn = db.begin().await?;

    let case = Case::find_by_id(case_id)
        .one(&txn)
        .await?
        .ok_or(Error::CaseNotFound { id: case_id })?;

    Transaction::delete_many()
        .filter(transaction::Column::CaseId.eq(case_id))
        .exec(&txn)
        .await?;

    case.delete(&txn).await?;

    txn.commit().await?;
    Ok(())
}

/// Runs the anomaly screen over one case's transactions.
///
/// Fails with [`Error::CaseNotFound`] before the detector is ever invoked if
/// the case does not exist. Otherwise loads the case's complete transaction
/// set and returns [`analysis::detect_anomalies`] output verbatim, which is
/// empty when the case has no transactions.
pub async fn analyze_case(
    db: &DatabaseConnection,
    case_id: i64,
) -> Result<Vec<AnomalousTransaction>> {
    let case = get_case_by_id(db, case_id)
        .await?
        .ok_or(Error::CaseNotFound { id: case_id })?;

    let transactions = case
        .find_related(Transaction)
        .order_by_asc(transaction::Column::Id)
        .all(db)
        .await?;

    Ok(analysis::detect_anomalies(&transactions))
}

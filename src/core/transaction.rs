//! Transaction business logic - Handles all transaction-related operations.
//!
//! This module provides functions for creating, retrieving, and deleting
//! financial transactions within the case system. Amount validation happens
//! here, at the boundary: zero and negative amounts are rejected before
//! anything is persisted, and accepted amounts are normalized to the two
//! fractional digits the store carries. Creation verifies the owning case
//! inside a database transaction so a transaction row can never be inserted
//! against a case that vanished mid-request.

use crate::{
    entities::{Case, Transaction, transaction},
    errors::{Error, Result},
};
use rust_decimal::{Decimal, RoundingStrategy};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};

/// Maximum transaction description length in characters.
const DESCRIPTION_MAX: usize = 500;

/// Fractional digits carried by the amount column.
const AMOUNT_SCALE: u32 = 2;

fn validate_amount(amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(Error::Validation {
            message: format!("transaction amount must be positive, got {amount}"),
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

/// Creates a new transaction bound to an existing case.
///
/// This function validates that the amount is strictly positive and the
/// description within bounds, verifies the owning case exists, and inserts
/// the row with the amount rounded half-up to two fractional digits. The
/// case check and the insert share one database transaction.
///
/// # Arguments
/// * `db` - Database connection
/// * `case_id` - The case this transaction belongs to
/// * `amount` - Monetary amount, must be > 0
/// * `description` - Optional description of the movement
/// * `transaction_date` - Calendar date the movement occurred on
///
/// # Returns
/// The inserted transaction model, [`Error::CaseNotFound`] if the case is
/// absent, or [`Error::Validation`] if a field violates its constraints.
pub async fn create_transaction(
    db: &DatabaseConnection,
    case_id: i64,
    amount: Decimal,
    description: Option<String>,
    transaction_date: Date,
) -> Result<transaction::Model> {
    validate_amount(amount)?;
    if let Some(description) = &description {
        validate_description(description)?;
    }

    let txn = db.begin().await?;

    Case::find_by_id(case_id)
        .one(&txn)
        .await?
        .ok_or(Error::CaseNotFound { id: case_id })?;

    let transaction_model = transaction::ActiveModel {
        amount: Set(
            amount.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero)
        ),
        description: Set(description),
        transaction_date: Set(transaction_date),
        case_id: Set(case_id),
        ..Default::default()
    };

    let result = transaction_model.insert(&txn).await?;

    txn.commit().await?;

    Ok(result)
}

/// Retrieves all transactions for a specific case, ordered by ID.
///
/// Fails with [`Error::CaseNotFound`] if the case does not exist, so callers
/// can distinguish a case with no transactions from a case that was never
/// created.
pub async fn get_transactions_for_case(
    db: &DatabaseConnection,
    case_id: i64,
) -> Result<Vec<transaction::Model>> {
    Case::find_by_id(case_id)
        .one(db)
        .await?
        .ok_or(Error::CaseNotFound { id: case_id })?;

    Transaction::find()
        .filter(transaction::Column::CaseId.eq(case_id))
        .order_by_asc(transaction::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific transaction by its unique ID.
///
/// Returns None if the transaction doesn't exist, allowing callers to handle
/// missing transactions gracefully without throwing errors.
pub async fn get_transaction_by_id(
    db: &DatabaseConnection,
    transaction_id: i64,
) -> Result<Option<transaction::Model>> {
    Transaction::find_by_id(transaction_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Deletes a transaction by ID.
///
/// Fails with [`Error::TransactionNotFound`] if the ID references no
/// transaction. The owning case is unaffected beyond its transaction
/// collection shrinking.
pub async fn delete_transaction(db: &DatabaseConnection, transaction_id: i64) -> Result<()> {
    let transaction = Transaction::find_by_id(transaction_id)
        .one(db)
        .await?
        .ok_or(Error::TransactionNotFound { id: transaction_id })?;

    transaction.delete(db).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_create_transaction_rejects_zero_amount() -> Result<()> {
        // Validation fires before any query, so a bare mock connection works
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        let result = create_transaction(&db, 1, dec!(0.00), None, test_date()).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Validation { message: _ }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_transaction_rejects_negative_amount() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        let result = create_transaction(&db, 1, dec!(-50.00), None, test_date()).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Validation { message: _ }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_transaction_rejects_long_description() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        let result =
            create_transaction(&db, 1, dec!(10.00), Some("d".repeat(501)), test_date()).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Validation { message: _ }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_transaction_case_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_transaction(&db, 999, dec!(50.00), None, test_date()).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::CaseNotFound { id: 999 }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_transaction_nothing_persisted_on_failure() -> Result<()> {
        let (db, case) = setup_with_case().await?;

        let _ = create_transaction(&db, case.id, dec!(-1.00), None, test_date()).await;
        let _ = create_transaction(&db, 999, dec!(1.00), None, test_date()).await;

        assert!(get_transactions_for_case(&db, case.id).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_create_transaction_stores_fields() -> Result<()> {
        let (db, case) = setup_with_case().await?;
        let date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();

        let transaction = create_transaction(
            &db,
            case.id,
            dec!(1234.56),
            Some("Offshore wire".to_string()),
            date,
        )
        .await?;

        assert_eq!(transaction.case_id, case.id);
        assert_eq!(transaction.amount, dec!(1234.56));
        assert_eq!(transaction.description, Some("Offshore wire".to_string()));
        assert_eq!(transaction.transaction_date, date);

        // Verify persistence
        let retrieved = get_transaction_by_id(&db, transaction.id).await?.unwrap();
        assert_eq!(retrieved, transaction);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_transaction_normalizes_scale() -> Result<()> {
        let (db, case) = setup_with_case().await?;

        let rounded_up = create_transaction(&db, case.id, dec!(10.999), None, test_date()).await?;
        assert_eq!(rounded_up.amount, dec!(11.00));

        let midpoint = create_transaction(&db, case.id, dec!(10.005), None, test_date()).await?;
        assert_eq!(midpoint.amount, dec!(10.01));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_transaction_without_description() -> Result<()> {
        let (db, case) = setup_with_case().await?;
        let date = NaiveDate::from_ymd_opt(2023, 11, 30).unwrap();

        let transaction =
            create_custom_transaction(&db, case.id, dec!(42.00), None, date).await?;

        assert_eq!(transaction.description, None);
        assert_eq!(transaction.transaction_date, date);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_transactions_for_case_empty() -> Result<()> {
        let (db, case) = setup_with_case().await?;

        let transactions = get_transactions_for_case(&db, case.id).await?;
        assert_eq!(transactions.len(), 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_transactions_for_case_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = get_transactions_for_case(&db, 123).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::CaseNotFound { id: 123 }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_transactions_for_case_different_cases() -> Result<()> {
        let db = setup_test_db().await?;

        let case1 = create_test_case(&db, "Case one").await?;
        let case2 = create_test_case(&db, "Case two").await?;

        let created1 = create_test_transaction(&db, case1.id, dec!(50.00)).await?;
        let created2 = create_test_transaction(&db, case2.id, dec!(75.00)).await?;

        // Each case only gets its own transactions
        let queried1 = get_transactions_for_case(&db, case1.id).await?;
        let queried2 = get_transactions_for_case(&db, case2.id).await?;

        assert_eq!(queried1, vec![created1]);
        assert_eq!(queried2, vec![created2]);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_transaction_by_id_not_found() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_results([Vec::<transaction::Model>::new()])
            .into_connection();

        let transaction = get_transaction_by_id(&db, 999).await?;
        assert!(transaction.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_transaction() -> Result<()> {
        let (db, case) = setup_with_case().await?;

        let keep = create_test_transaction(&db, case.id, dec!(10.00)).await?;
        let remove = create_test_transaction(&db, case.id, dec!(20.00)).await?;

        delete_transaction(&db, remove.id).await?;

        // Gone from subsequent listings; the sibling survives
        let remaining = get_transactions_for_case(&db, case.id).await?;
        assert_eq!(remaining, vec![keep]);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_transaction_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = delete_transaction(&db, 404).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::TransactionNotFound { id: 404 }
        ));

        Ok(())
    }
}

//! Transaction HTTP endpoints.
//!
//! Thin handlers over [`crate::core::transaction`]. Creation and listing are
//! nested under the owning case's path; deletion addresses the transaction
//! directly by ID.

use crate::{api::AppState, core::transaction, entities, errors::Result};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, post},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Value, json};

/// Routes for the transaction resource, mounted under `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/cases/:case_id/transactions",
            post(create_transaction).get(list_transactions),
        )
        .route("/transactions/:transaction_id", delete(delete_transaction))
}

/// Payload for creating a transaction under a case.
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    /// Monetary amount, must be strictly positive
    pub amount: Decimal,
    /// Optional description (up to 500 characters)
    pub description: Option<String>,
    /// Calendar date of the movement
    pub transaction_date: NaiveDate,
}

async fn create_transaction(
    State(state): State<AppState>,
    Path(case_id): Path<i64>,
    Json(payload): Json<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<entities::transaction::Model>)> {
    let created = transaction::create_transaction(
        &state.database,
        case_id,
        payload.amount,
        payload.description,
        payload.transaction_date,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list_transactions(
    State(state): State<AppState>,
    Path(case_id): Path<i64>,
) -> Result<Json<Vec<entities::transaction::Model>>> {
    let transactions = transaction::get_transactions_for_case(&state.database, case_id).await?;
    Ok(Json(transactions))
}

async fn delete_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<i64>,
) -> Result<Json<Value>> {
    transaction::delete_transaction(&state.database, transaction_id).await?;
    Ok(Json(json!({ "ok": true })))
}

//! Case HTTP endpoints.
//!
//! Thin handlers over [`crate::core::case`]: deserialize the payload, call
//! the core operation, serialize the result. Responses mirror the shapes the
//! frontend consumes: case records carry their nested transaction array, and
//! deletions acknowledge with `{"ok": true}`.

use crate::{
    api::AppState,
    core::analysis::AnomalousTransaction,
    core::case::{self, CaseRecord, UpdateCase},
    errors::Result,
};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::{Value, json};

/// Routes for the case resource, mounted under `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cases", post(create_case).get(list_cases))
        .route(
            "/cases/:case_id",
            get(get_case).put(update_case).delete(delete_case),
        )
        .route("/cases/:case_id/analyze", post(analyze_case))
}

/// Payload for creating a case.
#[derive(Debug, Deserialize)]
pub struct CreateCaseRequest {
    /// Case title (3-100 characters)
    pub title: String,
    /// Optional description (up to 500 characters)
    pub description: Option<String>,
}

/// Payload for partially updating a case; absent fields are left untouched.
#[derive(Debug, Deserialize, Default)]
pub struct UpdateCaseRequest {
    /// New title, if supplied
    pub title: Option<String>,
    /// New description, if supplied
    pub description: Option<String>,
    /// New status, if supplied
    pub status: Option<String>,
}

/// Offset/limit pagination parameters for case listing.
#[derive(Debug, Deserialize)]
pub struct ListCasesParams {
    /// Number of cases to skip (default 0)
    #[serde(default)]
    pub skip: u64,
    /// Maximum number of cases to return (default 100)
    #[serde(default = "default_limit")]
    pub limit: u64,
}

const fn default_limit() -> u64 {
    100
}

async fn create_case(
    State(state): State<AppState>,
    Json(payload): Json<CreateCaseRequest>,
) -> Result<(StatusCode, Json<CaseRecord>)> {
    let created = case::create_case(&state.database, payload.title, payload.description).await?;
    // A freshly created case cannot have transactions yet
    let record = CaseRecord {
        case: created,
        transactions: Vec::new(),
    };
    Ok((StatusCode::CREATED, Json(record)))
}

async fn list_cases(
    State(state): State<AppState>,
    Query(params): Query<ListCasesParams>,
) -> Result<Json<Vec<CaseRecord>>> {
    let records = case::list_cases(&state.database, params.skip, params.limit).await?;
    Ok(Json(records))
}

async fn get_case(
    State(state): State<AppState>,
    Path(case_id): Path<i64>,
) -> Result<Json<CaseRecord>> {
    let record = case::get_case_record(&state.database, case_id).await?;
    Ok(Json(record))
}

async fn update_case(
    State(state): State<AppState>,
    Path(case_id): Path<i64>,
    Json(payload): Json<UpdateCaseRequest>,
) -> Result<Json<CaseRecord>> {
    case::update_case(
        &state.database,
        case_id,
        UpdateCase {
            title: payload.title,
            description: payload.description,
            status: payload.status,
        },
    )
    .await?;

    // Return the full record, transactions included, as clients expect
    let record = case::get_case_record(&state.database, case_id).await?;
    Ok(Json(record))
}

async fn delete_case(
    State(state): State<AppState>,
    Path(case_id): Path<i64>,
) -> Result<Json<Value>> {
    case::delete_case(&state.database, case_id).await?;
    Ok(Json(json!({ "ok": true })))
}

async fn analyze_case(
    State(state): State<AppState>,
    Path(case_id): Path<i64>,
) -> Result<Json<Vec<AnomalousTransaction>>> {
    let anomalies = case::analyze_case(&state.database, case_id).await?;
    Ok(Json(anomalies))
}

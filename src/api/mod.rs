//! API layer - HTTP+JSON interface and request handlers.
//!
//! This module provides the HTTP boundary for the application: the router,
//! the shared handler state, and the mapping from crate errors to HTTP
//! responses. Handlers are thin shells that deserialize the request, call
//! into [`crate::core`], and serialize the result; no decision logic lives
//! here.

/// Case endpoints (create, list, get, update, delete, analyze)
pub mod cases;
/// Transaction endpoints (create, list by case, delete)
pub mod transactions;

use crate::errors::Error;
use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use sea_orm::DatabaseConnection;
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared data available to all request handlers.
/// This structure holds the database connection and any other global state
/// that handlers need to access.
#[derive(Clone)]
pub struct AppState {
    /// Database connection for all database operations
    pub database: DatabaseConnection,
}

impl AppState {
    /// Creates a new `AppState` instance with the given database connection.
    /// This is typically called during startup to set up the shared context
    /// for all handlers.
    #[must_use]
    pub const fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }
}

/// Builds the complete application router.
///
/// All domain routes are mounted under `/api/v1`; the root path answers with
/// a liveness message. A permissive CORS layer is attached because the
/// browser frontend consumes the API cross-origin.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .merge(cases::router())
        .merge(transactions::router());

    Router::new()
        .route("/", get(root))
        .nest("/api/v1", api)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root endpoint for confirming the service is up.
async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "CaseTrace financial crime investigation API is running."
    }))
}

impl Error {
    /// HTTP status code and client-facing detail message for this error.
    ///
    /// Not-found and validation errors carry their own message; everything
    /// else collapses to a generic server failure so internal details never
    /// reach the client.
    fn status_and_detail(&self) -> (StatusCode, String) {
        match self {
            Self::CaseNotFound { .. } => (StatusCode::NOT_FOUND, "Case not found".to_string()),
            Self::TransactionNotFound { .. } => {
                (StatusCode::NOT_FOUND, "Transaction not found".to_string())
            }
            Self::Validation { message } => (StatusCode::UNPROCESSABLE_ENTITY, message.clone()),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_detail();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {self}");
        }
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

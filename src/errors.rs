//! Unified error types and result handling for the whole crate.
//!
//! Core modules construct these errors directly; the API layer owns the
//! mapping from each variant to an HTTP status code and response body.

use thiserror::Error;

/// All failure modes the application distinguishes.
#[derive(Debug, Error)]
pub enum Error {
    /// The referenced case does not exist.
    #[error("Case {id} not found")]
    CaseNotFound {
        /// ID that was looked up
        id: i64,
    },

    /// The referenced transaction does not exist.
    #[error("Transaction {id} not found")]
    TransactionNotFound {
        /// ID that was looked up
        id: i64,
    },

    /// A request field violated its constraints; the request was not applied.
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable description of the violated constraint
        message: String,
    },

    /// Configuration could not be loaded or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong while loading configuration
        message: String,
    },

    /// Persistence failure, surfaced to the boundary as a server error.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error (startup, listener binding).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error during configuration loading.
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// The configured bind address could not be parsed.
    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

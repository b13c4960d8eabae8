//! Core business logic - framework-agnostic case, transaction, and anomaly
//! screening operations. Nothing in here knows about HTTP; the API layer is a
//! thin shell over these functions.

/// Anomaly screening over one case's transactions
pub mod analysis;
/// Case operations: create, list, get, update, delete, analyze
pub mod case;
/// Transaction operations: create, list by case, delete
pub mod transaction;

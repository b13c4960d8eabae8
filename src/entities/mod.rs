//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod case;
pub mod transaction;

// Re-export specific types to avoid conflicts
pub use case::{Column as CaseColumn, Entity as Case, Model as CaseModel};
pub use transaction::{
    Column as TransactionColumn, Entity as Transaction, Model as TransactionModel,
};

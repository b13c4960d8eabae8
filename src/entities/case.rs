//! Case entity - Represents an investigation case grouping related transactions.
//!
//! Each case has a title, optional description, a free-form status, and
//! store-managed `created_at`/`updated_at` timestamps. A case owns zero or
//! more transactions; the collection is resolved by query rather than held
//! as a live object graph.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Case database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cases")]
pub struct Model {
    /// Unique identifier for the case
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-readable case title (3-100 characters)
    pub title: String,
    /// Optional longer description of the case (up to 500 characters)
    pub description: Option<String>,
    /// Investigation status, defaulted to `"open"` on creation
    pub status: String,
    /// When the case was created; set once and never changed
    pub created_at: DateTimeUtc,
    /// When the case was last mutated; refreshed on every update
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Case and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One case has many transactions
    #[sea_orm(has_many = "super::transaction::Entity")]
    Transactions,
}

impl Related<super::transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

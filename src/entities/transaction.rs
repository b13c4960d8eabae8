//! Transaction entity - Represents a single financial movement under a case.
//!
//! Each transaction has a strictly positive `amount` stored at two decimal
//! places, an optional description, a calendar `transaction_date`, and a
//! `case_id` referencing the owning case. The amount uses a fixed-point
//! decimal column so financial sums never drift through binary floats.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Transaction database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    /// Unique identifier for the transaction
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Monetary amount, strictly positive, two fractional digits
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub amount: Decimal,
    /// Optional human-readable description of the movement
    pub description: Option<String>,
    /// Calendar date the movement occurred on
    pub transaction_date: Date,
    /// ID of the case this transaction belongs to; immutable after creation
    pub case_id: i64,
}

/// Defines relationships between Transaction and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each transaction belongs to one case
    #[sea_orm(
        belongs_to = "super::case::Entity",
        from = "Column::CaseId",
        to = "super::case::Column::Id"
    )]
    Case,
}

impl Related<super::case::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Case.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

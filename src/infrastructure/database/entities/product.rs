//! Product entity

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product model - one sellable catalog item
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique product ID
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Display name
    pub name: String,

    /// Free-form description (basic formatting tags allowed)
    pub description: Option<String>,

    /// Price in smallest currency unit (e.g., cents)
    pub price: i64,

    /// Currency code (ISO 4217, e.g., "USD", "KRW")
    pub currency: String,

    /// Units on hand
    pub stock: i32,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

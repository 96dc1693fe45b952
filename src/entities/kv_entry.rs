//! Key/value entity - One stored text blob per `(namespace, key)` pair.
//!
//! This is the on-disk stand-in for a platform preferences file: every
//! collection of the diary is a single JSON document under its own key.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Key/value database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "kv_entries")]
pub struct Model {
    /// Namespace grouping related keys (e.g., `"PrivateDishesV4"`)
    #[sea_orm(primary_key, auto_increment = false)]
    pub namespace: String,
    /// Key within the namespace (e.g., `"dishes"`)
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,
    /// Encoded text stored under the key
    #[sea_orm(column_type = "Text")]
    pub value: String,
    /// When the value was last written
    pub updated_at: DateTime,
}

/// Key/value entries have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

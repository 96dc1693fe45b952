//! Data model - dishes, orders and the per-order preference types.

pub mod dish;
pub mod order;
pub mod preferences;

pub use dish::{Dish, DishDraft};
pub use order::{Order, OrderItem, Review};
pub use preferences::{Customization, DietaryRestriction, OilLevel, SpicyLevel};

use serde::{Deserialize, Deserializer};

/// Reads an optional string field, treating `""` as absent. Data written by the
/// on-device app stores a missing image, ingredient list or review as an empty string.
pub(crate) fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

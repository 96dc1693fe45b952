//! Persistence - a flat key/value string store and the collection codec on top of it.
//!
//! [`KeyValueStore`] is the seam between the diary and whatever durable string map the
//! host offers. [`SqliteStore`] keeps entries in a `SeaORM` table scoped by namespace;
//! [`MemoryStore`] keeps them in a map. [`DishStore`] encodes the three collections as
//! JSON text under their fixed keys.

use crate::errors::Result;
use std::future::Future;

pub mod collections;
pub mod memory;
pub mod sqlite;

pub use collections::{Collection, DishStore};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Durable get/set of text values by key within one namespace.
pub trait KeyValueStore {
    /// Returns the value under `key`, or `None` if nothing was ever written.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>>> + Send;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<()>> + Send;
}

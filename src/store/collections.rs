//! Collection codec - encodes dishes, categories and orders as JSON text under fixed keys.
//!
//! Loads fail soft: a missing key yields the collection's default and undecodable text
//! yields an empty collection. Before corrupt text is discarded it is copied to a
//! `<key>.corrupt-<unix-millis>` backup key so the data can still be recovered by hand.

use super::KeyValueStore;
use crate::errors::Result;
use crate::models::{Dish, Order};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use tracing::{debug, error, info, instrument, warn};

/// The three independently stored collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// The recipe catalog
    Dishes,
    /// Category names, in display order
    Categories,
    /// Order history, newest first
    Orders,
}

impl Collection {
    /// Fixed storage key of this collection
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Dishes => "dishes",
            Self::Categories => "categories",
            Self::Orders => "orders",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Reads and writes the diary's collections through a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct DishStore<S> {
    kv: S,
    default_categories: Vec<String>,
}

impl<S: KeyValueStore + Sync> DishStore<S> {
    /// Creates a store; `default_categories` is what [`Self::load_categories`] returns
    /// before anything has been saved.
    pub fn new(kv: S, default_categories: Vec<String>) -> Self {
        Self {
            kv,
            default_categories,
        }
    }

    /// The underlying key/value store
    pub const fn kv(&self) -> &S {
        &self.kv
    }

    /// Writes the whole catalog.
    ///
    /// # Errors
    /// Returns an error if the underlying store fails.
    pub async fn save_dishes(&self, dishes: &[Dish]) -> Result<()> {
        self.save(Collection::Dishes, dishes).await
    }

    /// Reads the catalog; empty if never saved.
    ///
    /// # Errors
    /// Returns an error if the underlying store fails.
    pub async fn load_dishes(&self) -> Result<Vec<Dish>> {
        self.load(Collection::Dishes, Vec::new).await
    }

    /// Writes the category list.
    ///
    /// # Errors
    /// Returns an error if the underlying store fails.
    pub async fn save_categories(&self, categories: &[String]) -> Result<()> {
        self.save(Collection::Categories, categories).await
    }

    /// Reads the category list, or the configured defaults if never saved.
    ///
    /// # Errors
    /// Returns an error if the underlying store fails.
    pub async fn load_categories(&self) -> Result<Vec<String>> {
        let defaults = self.default_categories.clone();
        self.load(Collection::Categories, move || defaults).await
    }

    /// Writes the order history.
    ///
    /// # Errors
    /// Returns an error if the underlying store fails.
    pub async fn save_orders(&self, orders: &[Order]) -> Result<()> {
        self.save(Collection::Orders, orders).await
    }

    /// Reads the order history; empty if never saved.
    ///
    /// # Errors
    /// Returns an error if the underlying store fails.
    pub async fn load_orders(&self) -> Result<Vec<Order>> {
        self.load(Collection::Orders, Vec::new).await
    }

    /// Serializes `items` and writes them under the collection's key.
    ///
    /// # Errors
    /// Returns an error if encoding fails or the underlying store rejects the write.
    #[instrument(skip(self, items), fields(count = items.len()))]
    pub async fn save<T: Serialize + Sync>(
        &self,
        collection: Collection,
        items: &[T],
    ) -> Result<()> {
        let text = serde_json::to_string(items)?;
        self.kv.set(collection.key(), &text).await?;
        debug!("Saved {} {}", items.len(), collection);
        Ok(())
    }

    /// Reads the collection, returning `default()` if it was never written and an empty
    /// list if the stored text cannot be decoded.
    ///
    /// # Errors
    /// Returns an error only if the underlying store fails to read. Decode failures are
    /// logged and backed up, never raised.
    #[instrument(skip(self, default))]
    pub async fn load<T, F>(&self, collection: Collection, default: F) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
        F: FnOnce() -> Vec<T> + Send,
    {
        let Some(text) = self.kv.get(collection.key()).await? else {
            debug!("No stored {}, using defaults", collection);
            return Ok(default());
        };

        match serde_json::from_str::<Vec<T>>(&text) {
            Ok(items) => {
                debug!("Loaded {} {}", items.len(), collection);
                Ok(items)
            }
            Err(e) => {
                warn!("Stored {} could not be decoded, discarding: {}", collection, e);
                self.back_up_corrupt(collection, &text).await;
                Ok(Vec::new())
            }
        }
    }

    async fn back_up_corrupt(&self, collection: Collection, text: &str) {
        let backup_key = format!(
            "{}.corrupt-{}",
            collection.key(),
            chrono::Utc::now().timestamp_millis()
        );
        match self.kv.set(&backup_key, text).await {
            Ok(()) => info!("Backed up corrupt {} to '{}'", collection, backup_key),
            Err(e) => error!("Failed to back up corrupt {}: {}", collection, e),
        }
    }
}

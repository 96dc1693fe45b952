//! Shared test utilities for the dish diary.
//!
//! Helpers for setting up stores over an in-memory database and for building sample
//! records with sensible defaults.

use crate::{
    config::{Settings, database},
    errors::Result,
    models::{Customization, Dish, Order},
    store::{DishStore, MemoryStore, SqliteStore},
};
use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once; later calls are no-ops.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    database::create_tables(&db).await?;
    Ok(db)
}

/// Collection store over a fresh [`MemoryStore`] with the default categories.
pub fn memory_dish_store() -> DishStore<MemoryStore> {
    DishStore::new(MemoryStore::new(), Settings::default().default_categories)
}

/// Collection store over a fresh in-memory `SQLite` database.
pub async fn sqlite_dish_store() -> Result<DishStore<SqliteStore>> {
    let settings = Settings::default();
    let kv = SqliteStore::new(setup_test_db().await?, settings.namespace);
    Ok(DishStore::new(kv, settings.default_categories))
}

/// Creates a sample dish.
///
/// # Defaults
/// * `price`: "10"
/// * `first_made_date`: "2024-06-01"
/// * `steps`: two steps
/// * no image, remark or ingredients
pub fn sample_dish(id: i64, name: &str, category: &str) -> Dish {
    Dish {
        id,
        name: name.to_string(),
        image_uri: None,
        price: "10".to_string(),
        first_made_date: "2024-06-01".to_string(),
        remark: String::new(),
        steps: vec!["Prep".to_string(), "Cook".to_string()],
        category: category.to_string(),
        main_ingredients: None,
    }
}

/// Creates an unreviewed order with one default-customized item per dish.
pub fn sample_order(id: i64, dishes: &[Dish]) -> Order {
    let custom = Customization::default();
    Order::new(
        id,
        dishes.iter().map(|d| custom.apply_to(d)).collect(),
        "2024-06-01 19:00".to_string(),
    )
}

//! Database configuration module.
//!
//! Handles the `SQLite` connection backing the key/value store and creates the
//! `kv_entries` table from its `SeaORM` entity definition, so the schema always
//! matches the Rust model without hand-written SQL.

use crate::entities::KvEntry;
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::{info, instrument};

/// Connects to the database at `database_url` and ensures all tables exist.
///
/// # Errors
/// Returns an error if the connection cannot be opened or table creation fails.
#[instrument]
pub async fn init_db(database_url: &str) -> Result<DatabaseConnection> {
    let db = Database::connect(database_url).await?;
    create_tables(&db).await?;
    info!("Database ready");
    Ok(db)
}

/// Creates the key/value table if it does not already exist.
///
/// # Errors
/// Returns an error if the CREATE TABLE statement fails.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut kv_table = schema.create_table_from_entity(KvEntry);
    kv_table.if_not_exists();

    db.execute(builder.build(&kv_table)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::kv_entry::Model as KvEntryModel;
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        let _: Vec<KvEntryModel> = KvEntry::find().limit(1).all(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_twice_is_harmless() -> Result<()> {
        let db = init_db("sqlite::memory:").await?;
        create_tables(&db).await?;

        let _: Vec<KvEntryModel> = KvEntry::find().limit(1).all(&db).await?;
        Ok(())
    }
}

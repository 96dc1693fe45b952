use dish_diary::{
    app::DishDiary,
    config::{database, settings},
    errors::Result,
    store::{DishStore, SqliteStore},
};
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables may also be set externally
    dotenv().ok();

    // 3. Settings from config.toml plus environment overrides
    let settings = settings::load_default_settings()
        .inspect_err(|e| error!("Failed to load settings: {}", e))?;
    info!("Using namespace '{}'", settings.namespace);

    // 4. Open the key/value database
    let db = database::init_db(&settings.database_url)
        .await
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    // 5. Load the diary and report what is stored
    let store = DishStore::new(
        SqliteStore::new(db, settings.namespace),
        settings.default_categories,
    );
    let diary = DishDiary::load(store).await?;

    let completed = diary.orders().iter().filter(|o| o.is_completed).count();
    info!(
        "{} dishes across {} categories; {} orders ({} reviewed)",
        diary.dishes().len(),
        diary.categories().len(),
        diary.orders().len(),
        completed
    );

    Ok(())
}

// Configuration and database bootstrap

pub mod app;
pub mod database;
pub mod seeding;

pub use app::AppConfig;
pub use database::{initialize_schema, DatabaseConfig};
pub use seeding::{DatabaseSeeder, SEED_TRAINING_COUNT};

use anyhow::Result;
use sqlx::SqlitePool;

/// Open the store, create the schema and seed the catalog.
///
/// Safe to run against an existing database: the DDL is idempotent and the
/// catalog is only inserted into an empty table.
pub async fn bootstrap_store(config: &DatabaseConfig) -> Result<SqlitePool> {
    let pool = config.create_pool().await?;
    initialize_schema(&pool).await?;
    DatabaseSeeder::new(pool.clone()).seed_all().await?;
    Ok(pool)
}

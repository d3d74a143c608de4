use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::env;
use std::str::FromStr;
use std::time::Duration;

const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY,
        email TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL
    )
"#;

const CREATE_SESSIONS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS sessions (
        id TEXT NOT NULL PRIMARY KEY,
        expires_at INTEGER NOT NULL,
        user_id INTEGER NOT NULL,
        FOREIGN KEY (user_id) REFERENCES users(id)
    )
"#;

const CREATE_TRAININGS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS trainings (
        id INTEGER PRIMARY KEY,
        title TEXT NOT NULL,
        image TEXT,
        description TEXT,
        category TEXT,
        intensity TEXT,
        duration TEXT,
        group_size TEXT
    )
"#;

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub connect_timeout: Duration,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://training.db".to_string());

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .unwrap_or(5);

        let connect_timeout_secs = env::var("DB_CONNECT_TIMEOUT")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        Ok(DatabaseConfig {
            database_url,
            max_connections,
            connect_timeout: Duration::from_secs(connect_timeout_secs),
        })
    }

    /// Config for a database file at an explicit path, used by tests and tooling.
    pub fn for_path(path: impl AsRef<std::path::Path>) -> Self {
        Self {
            database_url: format!("sqlite://{}", path.as_ref().display()),
            max_connections: 5,
            connect_timeout: Duration::from_secs(30),
        }
    }

    pub async fn create_pool(&self) -> Result<SqlitePool> {
        let options = SqliteConnectOptions::from_str(&self.database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.connect_timeout)
            .connect_with(options)
            .await?;

        Ok(pool)
    }
}

/// Create the users, sessions and trainings tables if they are missing.
pub async fn initialize_schema(pool: &SqlitePool) -> Result<()> {
    for ddl in [CREATE_USERS_TABLE, CREATE_SESSIONS_TABLE, CREATE_TRAININGS_TABLE] {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

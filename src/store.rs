//! Database-backed color lookup, active when DB_URL is set.
//!
//! The store holds a bounded sqlx pool over a single `colors` key/value table.
//! Connecting happens before the listener binds; a connection failure aborts
//! startup so the process never serves traffic without its backing store.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Maximum connections in the pool; the demo serves one lookup per root request
const MAX_CONNECTIONS: u32 = 5;

#[derive(Clone)]
pub struct ColorStore {
    pool: SqlitePool,
}

impl ColorStore {
    /// Connect to the database at `db_url` and run embedded migrations.
    pub async fn connect(db_url: &str) -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(db_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Look up the color stored under `key`. `None` means the key is absent,
    /// which callers treat as "use the statically resolved color".
    pub async fn get_color(&self, key: &str) -> Result<Option<String>, sqlx::Error> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM colors WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|(value,)| value))
    }

    /// Insert or replace the color stored under `key`.
    pub async fn set_color(&self, key: &str, value: &str) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT OR REPLACE INTO colors (key, value) VALUES (?, ?)")
            .bind(key)
            .bind(value)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

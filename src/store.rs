use anyhow::{Context, Result, bail};
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{MySql, Sqlite};
use std::str::FromStr;

use crate::config::Config;

const SQLITE_ITEMS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        is_complete BOOLEAN NOT NULL DEFAULT 0
    )
"#;

const MYSQL_ITEMS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS items (
        id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
        name TEXT NOT NULL,
        is_complete BOOLEAN NOT NULL DEFAULT FALSE
    )
"#;

/// Database engine selected by the scheme of `DATABASE_URL`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Sqlite,
    MySql,
}

impl Backend {
    pub fn from_url(url: &str) -> Result<Self> {
        let scheme = url.split(':').next().unwrap_or_default();
        match scheme {
            "sqlite" => Ok(Backend::Sqlite),
            "mysql" => Ok(Backend::MySql),
            other => bail!(
                "DATABASE_URL scheme '{}' is not supported, expected sqlite: or mysql:",
                other
            ),
        }
    }
}

#[derive(Clone)]
enum Pool {
    Sqlite(SqlitePool),
    MySql(MySqlPool),
}

/// One pooled connection, returned to its pool on drop
pub enum StoreConnection {
    Sqlite(PoolConnection<Sqlite>),
    MySql(PoolConnection<MySql>),
}

/// Run the same sqlx expression against whichever driver backs a connection.
///
/// `$c` is bound to the `PoolConnection` of the matching arm, so `&mut **$c`
/// is the driver's concrete connection.
macro_rules! on_connection {
    ($conn:expr, $c:ident => $body:expr) => {
        match $conn {
            $crate::store::StoreConnection::Sqlite($c) => $body,
            $crate::store::StoreConnection::MySql($c) => $body,
        }
    };
}
pub(crate) use on_connection;

/// Shareable handle to the item store, cloned into every request
#[derive(Clone)]
pub struct Store {
    pool: Pool,
}

impl Store {
    /// Open a connection pool to the configured database
    ///
    /// Also makes sure the `items` table exists, so a fresh database is
    /// usable without any manual setup.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let backend = Backend::from_url(&config.database_url)?;

        let pool = match backend {
            Backend::Sqlite => {
                let options = SqliteConnectOptions::from_str(&config.database_url)
                    .context("DATABASE_URL is not a valid SQLite connection string")?
                    .create_if_missing(true);
                SqlitePoolOptions::new()
                    .max_connections(config.database_max_connections)
                    .connect_with(options)
                    .await
                    .map(Pool::Sqlite)
            }
            Backend::MySql => {
                let options = MySqlConnectOptions::from_str(&config.database_url)
                    .context("DATABASE_URL is not a valid MySQL connection string")?;
                MySqlPoolOptions::new()
                    .max_connections(config.database_max_connections)
                    .connect_with(options)
                    .await
                    .map(Pool::MySql)
            }
        }
        .context("Failed to connect to the database")?;

        ensure_table_exists(&pool).await?;

        tracing::info!("Connected to {:?} database", backend);
        Ok(Self { pool })
    }

    /// Check out one connection for the duration of a request
    pub async fn acquire(&self) -> Result<StoreConnection> {
        let conn = match &self.pool {
            Pool::Sqlite(pool) => pool.acquire().await.map(StoreConnection::Sqlite),
            Pool::MySql(pool) => pool.acquire().await.map(StoreConnection::MySql),
        };
        conn.context("Failed to acquire a database connection")
    }

    /// Round-trip `SELECT 1` on a pooled connection
    pub async fn health_check(&self) -> Result<()> {
        let mut conn = self.acquire().await?;

        let (ok,): (i64,) = on_connection!(&mut conn, c => {
            sqlx::query_as("SELECT 1").fetch_one(&mut **c).await
        })
        .context("Failed to execute health check query")?;

        if ok != 1 {
            bail!("Health check query returned {}", ok);
        }
        Ok(())
    }
}

async fn ensure_table_exists(pool: &Pool) -> Result<()> {
    let result = match pool {
        Pool::Sqlite(pool) => sqlx::query(SQLITE_ITEMS_DDL).execute(pool).await.map(drop),
        Pool::MySql(pool) => sqlx::query(MYSQL_ITEMS_DDL).execute(pool).await.map(drop),
    };
    result.context("Failed to create items table")?;

    tracing::debug!("Table items is ready");
    Ok(())
}

#[cfg(test)]
impl Store {
    /// Private in-memory database; a single connection keeps it alive.
    pub async fn in_memory() -> Self {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");

        let pool = Pool::Sqlite(pool);
        ensure_table_exists(&pool)
            .await
            .expect("Failed to create items table");

        Self { pool }
    }

    /// Simulates an unreachable database: every later acquire fails.
    pub async fn close(&self) {
        match &self.pool {
            Pool::Sqlite(pool) => pool.close().await,
            Pool::MySql(pool) => pool.close().await,
        }
    }
}

//! Database initialization
//!
//! Opens (or creates) the SQLite database file, applies connection pragmas
//! and creates the `devotionals` table if it is absent. Schema creation is
//! idempotent and runs on every startup.

use crate::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Default time a connection waits on a locked database before failing
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

/// SQL expression for the current time in the stored timestamp format
pub const SQL_NOW: &str = "strftime('%Y-%m-%dT%H:%M:%fZ', 'now')";

/// Initialize database connection and create tables if needed
///
/// Every connection in the pool gets the same `busy_timeout` and WAL
/// journal mode, so readers proceed while a single writer holds the lock.
pub async fn init_database(db_path: &Path, busy_timeout_ms: u64) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_millis(busy_timeout_ms));

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    create_devotionals_table(&pool).await?;

    if newly_created {
        info!("Database and all tables created successfully");
    }

    info!("Database busy timeout set to {} ms", busy_timeout_ms);

    Ok(pool)
}

/// Open a private in-memory database with the full schema
///
/// Limited to a single connection that is never recycled: every SQLite
/// `:memory:` connection is its own database.
pub async fn init_memory_database() -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;

    create_devotionals_table(&pool).await?;

    Ok(pool)
}

/// Create the `devotionals` table
///
/// Timestamps are RFC 3339 UTC text with millisecond precision, so the
/// text order of `created_at` is its time order.
pub async fn create_devotionals_table(pool: &SqlitePool) -> Result<()> {
    let sql = format!(
        r#"
        CREATE TABLE IF NOT EXISTS devotionals (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            verse TEXT NOT NULL,
            content TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT ({}),
            updated_at TEXT DEFAULT NULL,
            deleted_at TEXT DEFAULT NULL
        )
        "#,
        SQL_NOW
    );

    sqlx::query(&sql).execute(pool).await?;

    Ok(())
}

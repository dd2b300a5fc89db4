// SQLite Connection Pool Setup

use crate::error::map_sqlx_error;
use jobboard_core::error::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create SQLite connection pool with WAL mode and foreign keys enforced
///
/// Accepts a file path, a `sqlite:` URL or `:memory:`. The file is created
/// when missing.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(map_sqlx_error)?
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .foreign_keys(true)
        .create_if_missing(true);

    debug!(database_url, max_connections, "Opening SQLite pool");

    SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(options)
        .await
        .map_err(map_sqlx_error)
}

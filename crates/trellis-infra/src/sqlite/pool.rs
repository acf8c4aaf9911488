//! Database pool and per-request sessions.
//!
//! [`Database`] owns a SQLite pool in WAL mode with foreign keys enforced.
//! [`Database::session`] checks out a [`DbSession`]: a pooled connection that
//! goes back to the pool when dropped, whichever way the request ends.

use std::ops::{Deref, DerefMut};
use std::str::FromStr;
use std::time::Duration;

use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use sqlx::{Sqlite, SqliteConnection};

/// Upper bound on pooled connections for file-backed databases.
const MAX_CONNECTIONS: u32 = 8;

/// Shared handle to the application database.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the database and create any missing tables.
    ///
    /// In-memory URLs get a single connection that is never recycled, since
    /// every SQLite connection to `:memory:` is its own database.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let in_memory = database_url.contains(":memory:");

        let mut opts = SqliteConnectOptions::from_str(database_url)?
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5))
            .create_if_missing(true);
        if !in_memory {
            opts = opts.journal_mode(SqliteJournalMode::Wal);
        }

        let mut pool_opts = SqlitePoolOptions::new();
        pool_opts = if in_memory {
            pool_opts
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            pool_opts.max_connections(MAX_CONNECTIONS)
        };

        let pool = pool_opts.connect_with(opts).await?;

        sqlx::migrate!("../../migrations").run(&pool).await?;

        tracing::debug!(url = %database_url, "database ready");
        Ok(Self { pool })
    }

    /// Check a connection out of the pool for the duration of one request.
    pub async fn session(&self) -> Result<DbSession, sqlx::Error> {
        let conn = self.pool.acquire().await?;
        Ok(DbSession { conn })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close all connections. Outstanding sessions finish first.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// A request-scoped database connection.
///
/// Dropping the session returns the connection to the pool, on success,
/// on error, and during unwinding alike.
pub struct DbSession {
    conn: PoolConnection<Sqlite>,
}

impl Deref for DbSession {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.conn
    }
}

impl DerefMut for DbSession {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.conn
    }
}

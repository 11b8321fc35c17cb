//! # Connection Provider
//!
//! Opens and releases the database connection each write operation uses.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Connection Provider                                │
//! │                                                                         │
//! │  Startup                                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbConfig::new(path) ← pool size, timeouts, ConnectionMode             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::new(config).await ← Create pool + run migrations            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Write operation                                                       │
//! │       │                                                                 │
//! │       ├── db.open()        → Connection                                │
//! │       ├── one statement on &mut *conn                                  │
//! │       └── conn.close()                                                 │
//! │              │                                                          │
//! │              ├── Pooled:     connection returns to the pool            │
//! │              └── PerRequest: physical connection is closed             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## SQLite Settings
//! - WAL journal: readers don't block the single writer
//! - NORMAL synchronous
//! - Foreign keys ON (off by default in SQLite), so a product cannot point at
//!   a missing brand or category

use sqlx::pool::PoolConnection;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteConnection, SqliteJournalMode, SqlitePoolOptions,
    SqliteSynchronous,
};
use sqlx::{Sqlite, SqlitePool};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::repository::brand::BrandRepository;
use crate::repository::category::CategoryRepository;
use crate::repository::product::ProductRepository;

/// Path value that selects a private in-memory database.
pub const IN_MEMORY_PATH: &str = ":memory:";

// =============================================================================
// Configuration
// =============================================================================

/// What happens to a connection when a write operation closes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionMode {
    /// Connection goes back to the pool for the next request.
    #[default]
    Pooled,

    /// Connection is physically closed after every statement.
    PerRequest,
}

impl std::fmt::Display for ConnectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionMode::Pooled => write!(f, "pooled"),
            ConnectionMode::PerRequest => write!(f, "per_request"),
        }
    }
}

impl FromStr for ConnectionMode {
    type Err = DbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pooled" | "pool" => Ok(ConnectionMode::Pooled),
            "per_request" | "per-request" => Ok(ConnectionMode::PerRequest),
            other => Err(DbError::ConnectionFailed(format!(
                "Unknown connection mode: '{}'. Valid options: pooled, per_request",
                other
            ))),
        }
    }
}

/// Database configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("/var/lib/tienda/tienda.db")
///     .max_connections(5)
///     .connection_mode(ConnectionMode::PerRequest);
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file, or [`IN_MEMORY_PATH`].
    pub database_path: PathBuf,

    /// Maximum number of connections in the pool.
    /// Default: 5
    pub max_connections: u32,

    /// Minimum number of connections to keep alive.
    /// Default: 1 (0 in per-request mode)
    pub min_connections: u32,

    /// How long `open()` waits for a connection.
    /// Default: 30 seconds
    pub connect_timeout: Duration,

    /// Idle timeout before closing a pooled connection.
    /// Default: 10 minutes
    pub idle_timeout: Option<Duration>,

    /// Whether to run migrations on connect.
    /// Default: true
    pub run_migrations: bool,

    /// Pool reuse or close-after-statement.
    pub connection_mode: ConnectionMode,
}

impl DbConfig {
    /// Creates a new database configuration with the given path.
    ///
    /// The file is created on first connect if it doesn't exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Some(Duration::from_secs(600)),
            run_migrations: true,
            connection_mode: ConnectionMode::Pooled,
        }
    }

    /// Sets the maximum number of connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets whether to run migrations on connect.
    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }

    /// Sets the connection mode.
    pub fn connection_mode(mut self, mode: ConnectionMode) -> Self {
        self.connection_mode = mode;
        self
    }

    /// Creates an in-memory database configuration (for testing).
    ///
    /// Every SQLite connection to `:memory:` is a separate database, so the
    /// pool is pinned to one connection that never idles out.
    pub fn in_memory() -> Self {
        DbConfig {
            database_path: PathBuf::from(IN_MEMORY_PATH),
            max_connections: 1,
            min_connections: 1,
            connect_timeout: Duration::from_secs(5),
            idle_timeout: None,
            run_migrations: true,
            connection_mode: ConnectionMode::Pooled,
        }
    }

    /// True if this configuration points at an in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.database_path.as_os_str() == IN_MEMORY_PATH
    }

    fn connect_options(&self) -> DbResult<SqliteConnectOptions> {
        let options = if self.is_in_memory() {
            SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| DbError::ConnectionFailed(e.to_string()))?
        } else {
            SqliteConnectOptions::new()
                .filename(&self.database_path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
        };

        Ok(options.foreign_keys(true))
    }
}

// =============================================================================
// Database
// =============================================================================

/// Main database handle: the connection provider plus repository access.
///
/// Cloning is cheap; all clones share one pool.
#[derive(Debug, Clone)]
pub struct Database {
    /// The SQLite connection pool.
    pool: SqlitePool,

    /// Applied to every connection handed out by `open()`.
    mode: ConnectionMode,
}

impl Database {
    /// Creates the connection pool and, if enabled, runs migrations.
    ///
    /// ## Returns
    /// * `Ok(Database)` - Ready-to-use database handle
    /// * `Err(DbError::ConnectionFailed)` - Database file unreachable
    /// * `Err(DbError::MigrationFailed)` - Schema could not be applied
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(
            path = %config.database_path.display(),
            mode = %config.connection_mode,
            "Initializing database connection"
        );

        let mut mode = config.connection_mode;
        let mut min_connections = config.min_connections;
        let mut max_connections = config.max_connections;

        if config.is_in_memory() {
            if mode == ConnectionMode::PerRequest {
                warn!("Per-request connections would discard an in-memory database; using pooled mode");
            }
            mode = ConnectionMode::Pooled;
            min_connections = 1;
            max_connections = 1;
        } else if mode == ConnectionMode::PerRequest {
            min_connections = 0;
        }

        let connect_options = config.connect_options()?;
        debug!("Connection options configured");

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(config.idle_timeout);

        if config.is_in_memory() {
            pool_options = pool_options
                .max_lifetime(None::<Duration>)
                .idle_timeout(None::<Duration>);
        }

        let pool = pool_options
            .connect_with(connect_options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        info!(max_connections, "Database pool created");

        let db = Database { pool, mode };

        if config.run_migrations {
            db.run_migrations().await?;
        }

        Ok(db)
    }

    /// Runs database migrations.
    pub async fn run_migrations(&self) -> DbResult<()> {
        info!("Running database migrations");
        migrations::run_migrations(&self.pool).await?;
        info!("Migrations complete");
        Ok(())
    }

    /// Opens a connection for one write operation.
    ///
    /// ## Errors
    /// * `DbError::PoolExhausted` - no connection within `connect_timeout`
    /// * `DbError::ConnectionFailed` - database unreachable or pool closed
    pub async fn open(&self) -> DbResult<Connection> {
        let inner = self.pool.acquire().await.map_err(|e| match DbError::from(e) {
            DbError::Internal(msg) => DbError::ConnectionFailed(msg),
            other => other,
        })?;

        Ok(Connection {
            inner,
            mode: self.mode,
        })
    }

    /// Returns the connection mode in effect.
    pub fn connection_mode(&self) -> ConnectionMode {
        self.mode
    }

    /// Returns a reference to the connection pool.
    ///
    /// For diagnostics and ad hoc reads; writes go through repositories.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Returns the product repository.
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.clone())
    }

    /// Returns the brand repository.
    pub fn brands(&self) -> BrandRepository {
        BrandRepository::new(self.clone())
    }

    /// Returns the category repository.
    pub fn categories(&self) -> CategoryRepository {
        CategoryRepository::new(self.clone())
    }

    /// Closes the database connection pool.
    ///
    /// After calling close, every `open()` fails with `ConnectionFailed`.
    pub async fn close(&self) {
        info!("Closing database connection pool");
        self.pool.close().await;
    }

    /// Checks if the database is healthy (can execute queries).
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

// =============================================================================
// Connection
// =============================================================================

/// A live database handle owned by one write operation.
///
/// Dereferences to [`SqliteConnection`], so statements run with
/// `.execute(&mut *conn)`.
#[derive(Debug)]
pub struct Connection {
    inner: PoolConnection<Sqlite>,
    mode: ConnectionMode,
}

impl Connection {
    /// Releases the connection.
    ///
    /// A failure to close is logged and swallowed: the statement that ran on
    /// this connection has already applied.
    pub async fn close(self) {
        match self.mode {
            ConnectionMode::Pooled => drop(self.inner),
            ConnectionMode::PerRequest => {
                if let Err(e) = self.inner.close().await {
                    warn!(error = %e, "Failed to close database connection");
                }
            }
        }
    }
}

impl Deref for Connection {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for Connection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

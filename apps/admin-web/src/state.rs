//! # Application State
//!
//! Shared state handed to every handler through axum's `State` extractor.
//!
//! `Database` wraps a `SqlitePool`, which is already `Send + Sync` and cheap
//! to clone, so no extra locking is needed here.

use tienda_db::Database;

/// State shared by all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        AppState { db }
    }

    /// The connection provider and its repositories.
    pub fn db(&self) -> &Database {
        &self.db
    }
}

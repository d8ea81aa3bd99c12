//! Shared helpers for the crate's unit tests.
//!
//! Every helper builds its own in-memory SQLite database, so tests do not share
//! state and need no `.env` setup.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::account::AccountStore;
use crate::hash::{BcryptHasher, HashError, Hasher, MIN_COST};
use crate::storage::SqliteDataStore;

/// A single-connection in-memory SQLite pool.
///
/// The database lives as long as its only connection, so the connection is
/// never recycled.
pub(crate) async fn sqlite_memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(SqliteConnectOptions::new().in_memory(true))
        .await
        .expect("Failed to open in-memory SQLite database")
}

/// Bcrypt at its lowest cost keeps the tests fast
pub(crate) fn fast_hasher() -> BcryptHasher {
    BcryptHasher::with_cost(MIN_COST).expect("MIN_COST is a valid bcrypt cost")
}

/// An account store over a fresh in-memory database with its table created
pub(crate) async fn test_account_store() -> AccountStore {
    let pool = sqlite_memory_pool().await;
    let store = AccountStore::new(
        Arc::new(fast_hasher()),
        Arc::new(SqliteDataStore::new(pool)),
    )
    .expect("valid table name");
    store.init().await.expect("Failed to initialize account store");
    store
}

/// A hasher whose every call fails
pub(crate) struct FailingHasher;

#[async_trait]
impl Hasher for FailingHasher {
    async fn hash(&self, _plaintext: &str) -> Result<String, HashError> {
        Err(HashError::Hashing("unavailable".to_string()))
    }

    async fn compare(&self, _hash: &str, _plaintext: &str) -> Result<(), HashError> {
        Err(HashError::Hashing("unavailable".to_string()))
    }
}

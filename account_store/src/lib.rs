//! account_store - Relational storage for user accounts
//!
//! Accounts carry a caller-assigned id, a unique username, a password hash and
//! an opaque data payload. [`AccountStore`] owns the backing table and offers
//! create/read/update/delete plus password authentication. Password hashing is
//! a capability injected at construction through the [`Hasher`] trait;
//! [`BcryptHasher`] is provided as the default.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use account_store::{AccountStore, BcryptHasher, DataStoreConfig, connect};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DataStoreConfig::from_env()?;
//! let data_store = connect(&config).await?;
//!
//! let store = AccountStore::new(Arc::new(BcryptHasher::new()), Arc::from(data_store))?;
//! store.init().await?;
//!
//! store.create("u1", "alice", "secret", "{}").await?;
//! let account = store.authenticate("alice", "secret").await?;
//! assert_eq!(account.id(), "u1");
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! - `GENERIC_DATA_STORE_TYPE`: `sqlite` or `postgres`
//! - `GENERIC_DATA_STORE_URL`: connection URL for the store
//! - `DB_TABLE_PREFIX`: table name prefix, default `acs_`
//! - `DB_TABLE_ACCOUNTS`: account table name, default `{prefix}accounts`. Must be
//!   lowercase letters, digits and underscores.
//! - `BCRYPT_COST`: cost factor for [`BcryptHasher::new`]

mod account;
mod hash;
mod storage;

#[cfg(test)]
mod test_utils;

pub use account::{Account, AccountError, AccountStore};
pub use hash::{
    BCRYPT_COST, BcryptHasher, HashError, Hasher, MAX_COST, MAX_PASSWORD_LENGTH, MIN_COST,
};
pub use storage::{
    DataStore, DataStoreConfig, DataStoreType, PostgresDataStore, SqliteDataStore, StorageError,
    connect,
};

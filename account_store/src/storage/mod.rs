mod config;
mod errors;
mod schema_validation;
mod types;

pub use config::{DataStoreConfig, DataStoreType, connect};
pub use errors::StorageError;
pub use types::{DataStore, PostgresDataStore, SqliteDataStore};

pub(crate) use config::db_table_prefix;
pub(crate) use schema_validation::{validate_postgres_table_schema, validate_sqlite_table_schema};

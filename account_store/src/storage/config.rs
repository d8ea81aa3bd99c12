//! Data store connection configuration

use std::{env, fmt, str::FromStr};

use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use super::errors::StorageError;
use super::types::{DataStore, PostgresDataStore, SqliteDataStore};

/// Table prefix from environment variable
pub(crate) fn db_table_prefix() -> String {
    env::var("DB_TABLE_PREFIX").unwrap_or_else(|_| "acs_".to_string())
}

/// Supported relational backends
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataStoreType {
    Sqlite,
    Postgres,
}

impl FromStr for DataStoreType {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            t => Err(StorageError::Config(format!(
                "Unsupported store type: {t}. Supported types are 'sqlite' and 'postgres'"
            ))),
        }
    }
}

impl fmt::Display for DataStoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqlite => write!(f, "sqlite"),
            Self::Postgres => write!(f, "postgres"),
        }
    }
}

/// Where and how to connect to the backing database
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataStoreConfig {
    pub store_type: DataStoreType,
    pub url: String,
}

impl DataStoreConfig {
    pub fn new(store_type: DataStoreType, url: impl Into<String>) -> Self {
        Self {
            store_type,
            url: url.into(),
        }
    }

    /// Read `GENERIC_DATA_STORE_TYPE` and `GENERIC_DATA_STORE_URL`
    pub fn from_env() -> Result<Self, StorageError> {
        let store_type = env::var("GENERIC_DATA_STORE_TYPE").map_err(|_| {
            StorageError::Config("GENERIC_DATA_STORE_TYPE must be set".to_string())
        })?;
        let url = env::var("GENERIC_DATA_STORE_URL")
            .map_err(|_| StorageError::Config("GENERIC_DATA_STORE_URL must be set".to_string()))?;

        Ok(Self {
            store_type: store_type.parse()?,
            url,
        })
    }
}

/// Open a connection pool for the configured backend.
///
/// In-memory SQLite databases live only as long as their connection, so those
/// pools are pinned to a single connection that is never recycled.
pub async fn connect(config: &DataStoreConfig) -> Result<Box<dyn DataStore>, StorageError> {
    tracing::info!(
        "Initializing data store with type: {}, url: {}",
        config.store_type,
        redact_url(&config.url)
    );

    let store = match config.store_type {
        DataStoreType::Sqlite => {
            let opts = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

            let pool_options = if is_sqlite_memory_url(&config.url) {
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .idle_timeout(None)
                    .max_lifetime(None)
            } else {
                SqlitePoolOptions::new()
            };

            Box::new(SqliteDataStore::new(pool_options.connect_with(opts).await?))
                as Box<dyn DataStore>
        }
        DataStoreType::Postgres => Box::new(PostgresDataStore::new(
            PgPoolOptions::new().connect(&config.url).await?,
        )) as Box<dyn DataStore>,
    };

    tracing::info!(
        "Connected to database: type={}, url={}",
        config.store_type,
        redact_url(&config.url)
    );

    Ok(store)
}

fn is_sqlite_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Strip the password component from a connection URL before logging it
fn redact_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let Some((userinfo, host)) = rest.rsplit_once('@') else {
        return url.to_string();
    };
    match userinfo.split_once(':') {
        Some((user, _)) => format!("{scheme}://{user}:***@{host}"),
        None => url.to_string(),
    }
}

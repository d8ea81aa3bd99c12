use std::sync::Arc;

use crate::account::{
    errors::AccountError,
    types::{Account, AccountSearchField},
};
use crate::hash::Hasher;
use crate::storage::DataStore;

use super::config::{db_table_accounts, validate_table_name};
use super::postgres::*;
use super::sqlite::*;

/// Owner of the account table.
///
/// Every operation runs one or more sequential statements against the
/// injected [`DataStore`]. There is no caching and no in-process locking, so
/// concurrent writers to the same account are last-writer-wins.
pub struct AccountStore {
    hasher: Arc<dyn Hasher>,
    store: Arc<dyn DataStore>,
    table_name: String,
}

impl AccountStore {
    /// Create a store over `store`, hashing passwords with `hasher`.
    ///
    /// The table name comes from `DB_TABLE_ACCOUNTS`, falling back to
    /// `{DB_TABLE_PREFIX}accounts`. Fails with [`AccountError::Storage`] if
    /// that name is not a lowercase plain identifier.
    pub fn new(hasher: Arc<dyn Hasher>, store: Arc<dyn DataStore>) -> Result<Self, AccountError> {
        Ok(Self {
            hasher,
            store,
            table_name: db_table_accounts()?,
        })
    }

    /// Use a different table than the configured one
    pub fn with_table_name(mut self, table_name: &str) -> Result<Self, AccountError> {
        validate_table_name(table_name)?;
        self.table_name = table_name.to_string();
        Ok(self)
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Create the account table if missing and check its columns
    pub async fn init(&self) -> Result<(), AccountError> {
        self.create_schema().await?;
        self.validate_schema().await
    }

    /// Create the account table if it does not exist yet
    #[tracing::instrument(skip_all, fields(table = %self.table_name))]
    pub async fn create_schema(&self) -> Result<(), AccountError> {
        let table_name = self.table_name.as_str();

        if let Some(pool) = self.store.as_sqlite() {
            create_tables_sqlite(pool, table_name).await
        } else if let Some(pool) = self.store.as_postgres() {
            create_tables_postgres(pool, table_name).await
        } else {
            Err(AccountError::Storage("Unsupported database type".to_string()))
        }
    }

    /// Check that the account table has the expected columns and types
    pub async fn validate_schema(&self) -> Result<(), AccountError> {
        let table_name = self.table_name.as_str();

        if let Some(pool) = self.store.as_sqlite() {
            validate_account_tables_sqlite(pool, table_name).await
        } else if let Some(pool) = self.store.as_postgres() {
            validate_account_tables_postgres(pool, table_name).await
        } else {
            Err(AccountError::Storage("Unsupported database type".to_string()))
        }
    }

    /// Hash `password` and insert a new account.
    ///
    /// The returned account is built from the inputs, not re-read.
    #[tracing::instrument(skip_all, fields(account_id = %id))]
    pub async fn create(
        &self,
        id: &str,
        username: &str,
        password: &str,
        data: &str,
    ) -> Result<Account, AccountError> {
        let hashed = self.hasher.hash(password).await?;
        let account = Account::new(
            id.to_string(),
            username.to_string(),
            hashed,
            data.to_string(),
        );

        let table_name = self.table_name.as_str();
        let result = if let Some(pool) = self.store.as_sqlite() {
            insert_account_sqlite(pool, table_name, &account).await
        } else if let Some(pool) = self.store.as_postgres() {
            insert_account_postgres(pool, table_name, &account).await
        } else {
            Err(AccountError::Storage("Unsupported database type".to_string()))
        };

        match result {
            Ok(()) => {
                tracing::info!(username = %account.username(), "Account created");
                Ok(account)
            }
            Err(e) => {
                tracing::error!(error = %e, "Account creation failed");
                Err(e)
            }
        }
    }

    /// Look up an account by id
    #[tracing::instrument(skip_all, fields(account_id = %id))]
    pub async fn get(&self, id: &str) -> Result<Account, AccountError> {
        self.get_by(AccountSearchField::Id(id.to_string()))
            .await?
            .ok_or(AccountError::NotFound)
    }

    /// Look up an account by username and check `password` against its hash.
    ///
    /// Read-only: nothing about the account is updated on success.
    #[tracing::instrument(skip_all, fields(username = %username))]
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Account, AccountError> {
        let account = self
            .get_by(AccountSearchField::Username(username.to_string()))
            .await?
            .ok_or(AccountError::NotFound)?;

        self.verify_password(account, password).await
    }

    /// Replace the password after re-checking the old one.
    ///
    /// The returned account is the record read during the check with the new
    /// hash applied. The check and the write are separate statements.
    #[tracing::instrument(skip_all, fields(account_id = %id))]
    pub async fn update_password(
        &self,
        id: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<Account, AccountError> {
        let account = self.authenticate_by_id_and_password(id, old_password).await?;
        let hashed = self.hasher.hash(new_password).await?;

        let table_name = self.table_name.as_str();
        if let Some(pool) = self.store.as_sqlite() {
            update_password_sqlite(pool, table_name, id, &hashed).await?;
        } else if let Some(pool) = self.store.as_postgres() {
            update_password_postgres(pool, table_name, id, &hashed).await?;
        } else {
            return Err(AccountError::Storage("Unsupported database type".to_string()));
        }

        tracing::info!("Account password updated");
        Ok(account.with_password(hashed))
    }

    /// Rename the account after re-checking its password.
    ///
    /// Fails with [`AccountError::Storage`] if `username` is already taken.
    #[tracing::instrument(skip_all, fields(account_id = %id, username = %username))]
    pub async fn update_username(
        &self,
        id: &str,
        username: &str,
        password: &str,
    ) -> Result<Account, AccountError> {
        let account = self.authenticate_by_id_and_password(id, password).await?;

        let table_name = self.table_name.as_str();
        if let Some(pool) = self.store.as_sqlite() {
            update_username_sqlite(pool, table_name, id, username).await?;
        } else if let Some(pool) = self.store.as_postgres() {
            update_username_postgres(pool, table_name, id, username).await?;
        } else {
            return Err(AccountError::Storage("Unsupported database type".to_string()));
        }

        tracing::info!("Account username updated");
        Ok(account.with_username(username.to_string()))
    }

    /// Overwrite the data payload and return the re-read account.
    ///
    /// No password check is made. An unknown id writes nothing and then
    /// fails the re-read with [`AccountError::NotFound`].
    #[tracing::instrument(skip_all, fields(account_id = %id))]
    pub async fn update_data(&self, id: &str, data: &str) -> Result<Account, AccountError> {
        let table_name = self.table_name.as_str();
        if let Some(pool) = self.store.as_sqlite() {
            update_data_sqlite(pool, table_name, id, data).await?;
        } else if let Some(pool) = self.store.as_postgres() {
            update_data_postgres(pool, table_name, id, data).await?;
        } else {
            return Err(AccountError::Storage("Unsupported database type".to_string()));
        }

        self.get(id).await
    }

    /// Hard delete by id.
    ///
    /// Deleting an id that does not exist succeeds, so repeated deletes are
    /// idempotent.
    #[tracing::instrument(skip_all, fields(account_id = %id))]
    pub async fn delete(&self, id: &str) -> Result<(), AccountError> {
        let table_name = self.table_name.as_str();
        if let Some(pool) = self.store.as_sqlite() {
            delete_account_sqlite(pool, table_name, id).await
        } else if let Some(pool) = self.store.as_postgres() {
            delete_account_postgres(pool, table_name, id).await
        } else {
            Err(AccountError::Storage("Unsupported database type".to_string()))
        }
    }

    async fn authenticate_by_id_and_password(
        &self,
        id: &str,
        password: &str,
    ) -> Result<Account, AccountError> {
        let account = self.get(id).await?;
        self.verify_password(account, password).await
    }

    async fn verify_password(
        &self,
        account: Account,
        password: &str,
    ) -> Result<Account, AccountError> {
        let compared = self.hasher.compare(account.password(), password).await;

        match compared {
            Ok(()) => Ok(account),
            Err(e) => {
                tracing::warn!(account_id = %account.id(), error = %e, "Password verification failed");
                Err(AccountError::Authentication(e.to_string()))
            }
        }
    }

    async fn get_by(&self, field: AccountSearchField) -> Result<Option<Account>, AccountError> {
        let table_name = self.table_name.as_str();
        let result = if let Some(pool) = self.store.as_sqlite() {
            get_account_by_field_sqlite(pool, table_name, &field).await
        } else if let Some(pool) = self.store.as_postgres() {
            get_account_by_field_postgres(pool, table_name, &field).await
        } else {
            Err(AccountError::Storage("Unsupported database type".to_string()))
        };

        match &result {
            Ok(Some(_)) => {
                tracing::info!(field = %field, found = true, "Account lookup completed");
            }
            Ok(None) => {
                tracing::info!(field = %field, found = false, "Account lookup completed - not found");
            }
            Err(e) => {
                tracing::error!(field = %field, error = %e, "Account lookup failed");
            }
        }

        result
    }
}

use std::env;

use crate::account::errors::AccountError;
use crate::storage::db_table_prefix;

/// Accounts table name from `DB_TABLE_ACCOUNTS`, or `{DB_TABLE_PREFIX}accounts`
pub(super) fn db_table_accounts() -> Result<String, AccountError> {
    let table_name = env::var("DB_TABLE_ACCOUNTS")
        .unwrap_or_else(|_| format!("{}{}", db_table_prefix(), "accounts"));
    validate_table_name(&table_name)?;
    Ok(table_name)
}

/// Table names are interpolated into SQL unquoted, so only lowercase plain
/// identifiers pass. Postgres folds unquoted names to lowercase, and the
/// schema check looks the table up by the name as given.
fn is_valid_table_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= 63
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

pub(super) fn validate_table_name(name: &str) -> Result<(), AccountError> {
    if is_valid_table_name(name) {
        Ok(())
    } else {
        Err(AccountError::Storage(format!("Invalid table name: {name}")))
    }
}

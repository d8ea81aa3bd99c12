use thiserror::Error;

use crate::hash::HashError;

#[derive(Clone, Error, Debug, PartialEq)]
pub enum AccountError {
    #[error("Account not found")]
    NotFound,

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Hash error: {0}")]
    Hash(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Failures from the hashing side of a write path.
///
/// Comparison results are mapped by the caller, since a mismatch there is an
/// authentication failure rather than a hashing one.
impl From<HashError> for AccountError {
    fn from(err: HashError) -> Self {
        AccountError::Hash(err.to_string())
    }
}

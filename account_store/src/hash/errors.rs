use thiserror::Error;

/// Errors reported by a [`Hasher`](super::Hasher) implementation.
#[derive(Clone, Error, Debug, PartialEq)]
pub enum HashError {
    /// The plaintext does not match the stored hash
    #[error("Password does not match")]
    Mismatch,

    /// The hashing algorithm failed or the stored hash is malformed
    #[error("Hashing error: {0}")]
    Hashing(String),
}

impl From<bcrypt::BcryptError> for HashError {
    fn from(err: bcrypt::BcryptError) -> Self {
        HashError::Hashing(err.to_string())
    }
}

impl From<tokio::task::JoinError> for HashError {
    fn from(err: tokio::task::JoinError) -> Self {
        HashError::Hashing(format!("Task join error: {err}"))
    }
}

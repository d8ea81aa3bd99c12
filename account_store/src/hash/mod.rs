//! Password hashing capability consumed by the account store.

mod bcrypt_hasher;
mod errors;

use async_trait::async_trait;

pub use bcrypt_hasher::{BCRYPT_COST, BcryptHasher, MAX_COST, MAX_PASSWORD_LENGTH, MIN_COST};
pub use errors::HashError;

/// One-way password hashing with comparison against a plaintext.
///
/// Implementations must never return the plaintext from [`Hasher::hash`], and
/// [`Hasher::compare`] must be safe against timing attacks.
#[async_trait]
pub trait Hasher: Send + Sync {
    /// Hash a plaintext password for storage
    async fn hash(&self, plaintext: &str) -> Result<String, HashError>;

    /// Compare a stored hash with a plaintext password.
    ///
    /// Returns `Ok(())` on match and [`HashError::Mismatch`] otherwise.
    async fn compare(&self, hash: &str, plaintext: &str) -> Result<(), HashError>;
}

use std::{env, sync::LazyLock};

use async_trait::async_trait;

use super::{HashError, Hasher};

/// Lowest cost factor bcrypt accepts
pub const MIN_COST: u32 = 4;
/// Highest cost factor bcrypt accepts
pub const MAX_COST: u32 = 31;

/// Longest password bcrypt hashes in full; bytes past this are ignored by the
/// algorithm, so longer passwords are refused instead of truncated
pub const MAX_PASSWORD_LENGTH: usize = 72;

/// Bcrypt cost from environment variable, clamped to the range bcrypt accepts
pub static BCRYPT_COST: LazyLock<u32> = LazyLock::new(|| {
    env::var("BCRYPT_COST")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .map(|cost| cost.clamp(MIN_COST, MAX_COST))
        .unwrap_or(bcrypt::DEFAULT_COST)
});

/// Default [`Hasher`] backed by bcrypt.
///
/// Hashing and verification are CPU bound, so both run on the blocking
/// thread pool.
#[derive(Clone, Debug)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// Create a hasher using the configured `BCRYPT_COST`
    pub fn new() -> Self {
        Self { cost: *BCRYPT_COST }
    }

    /// Create a hasher with an explicit cost factor
    pub fn with_cost(cost: u32) -> Result<Self, HashError> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(HashError::Hashing(format!(
                "Cost needs to be between {} and {}, got {}",
                MIN_COST,
                MAX_COST,
                cost
            )));
        }
        Ok(Self { cost })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Hasher for BcryptHasher {
    async fn hash(&self, plaintext: &str) -> Result<String, HashError> {
        if plaintext.len() > MAX_PASSWORD_LENGTH {
            return Err(HashError::Hashing(format!(
                "Password must be at most {MAX_PASSWORD_LENGTH} bytes"
            )));
        }

        let plaintext = plaintext.to_string();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, cost))
            .await?
            .map_err(HashError::from)
    }

    async fn compare(&self, hash: &str, plaintext: &str) -> Result<(), HashError> {
        // Could never have been hashed, and must not match on its prefix
        if plaintext.len() > MAX_PASSWORD_LENGTH {
            return Err(HashError::Mismatch);
        }

        let plaintext = plaintext.to_string();
        let hash = hash.to_string();

        let matched = tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &hash))
            .await??;

        if matched {
            Ok(())
        } else {
            Err(HashError::Mismatch)
        }
    }
}

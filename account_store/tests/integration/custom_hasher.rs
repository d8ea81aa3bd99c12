use std::sync::Arc;

use account_store::{AccountError, HashError, Hasher};
use async_trait::async_trait;

use crate::common::account_store_with;

/// Reversible toy hasher, only useful for checking that the store always
/// goes through the injected capability
struct PrefixHasher;

#[async_trait]
impl Hasher for PrefixHasher {
    async fn hash(&self, plaintext: &str) -> Result<String, HashError> {
        if plaintext.is_empty() {
            return Err(HashError::Hashing("empty password".to_string()));
        }
        Ok(format!("prefix:{plaintext}"))
    }

    async fn compare(&self, hash: &str, plaintext: &str) -> Result<(), HashError> {
        match hash.strip_prefix("prefix:") {
            Some(stored) if stored == plaintext => Ok(()),
            _ => Err(HashError::Mismatch),
        }
    }
}

#[tokio::test]
async fn test_store_uses_injected_hasher() {
    let store = account_store_with(Arc::new(PrefixHasher)).await;

    let created = store
        .create("u1", "alice", "secret", "{}")
        .await
        .expect("Failed to create account");
    assert_eq!(created.password(), "prefix:secret");

    let updated = store
        .update_password("u1", "secret", "changed")
        .await
        .expect("Failed to update password");
    assert_eq!(updated.password(), "prefix:changed");
    assert_eq!(
        store.get("u1").await.expect("Failed to get").password(),
        "prefix:changed"
    );
}

#[tokio::test]
async fn test_hash_failure_surfaces_as_hash_error() {
    let store = account_store_with(Arc::new(PrefixHasher)).await;

    assert!(matches!(
        store.create("u1", "alice", "", "{}").await,
        Err(AccountError::Hash(_))
    ));
    assert_eq!(store.get("u1").await, Err(AccountError::NotFound));

    store
        .create("u2", "bob", "secret", "{}")
        .await
        .expect("Failed to create account");
    assert!(matches!(
        store.update_password("u2", "secret", "").await,
        Err(AccountError::Hash(_))
    ));
    assert!(store.authenticate("bob", "secret").await.is_ok());
}

#[tokio::test]
async fn test_mismatch_is_authentication_error() {
    let store = account_store_with(Arc::new(PrefixHasher)).await;
    store
        .create("u1", "alice", "secret", "{}")
        .await
        .expect("Failed to create account");

    assert_eq!(
        store.authenticate("alice", "nope").await,
        Err(AccountError::Authentication(
            HashError::Mismatch.to_string()
        ))
    );
}

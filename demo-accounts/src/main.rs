//! Walks one account through its whole lifecycle against the configured store.
//!
//! Reads `GENERIC_DATA_STORE_TYPE` / `GENERIC_DATA_STORE_URL` from the
//! environment or `.env`, e.g.
//!
//! ```text
//! GENERIC_DATA_STORE_TYPE=sqlite
//! GENERIC_DATA_STORE_URL=sqlite:./accounts.db
//! ```

mod tracing_setup;

use std::sync::Arc;

use account_store::{AccountError, AccountStore, BcryptHasher, DataStoreConfig, connect};

use crate::tracing_setup::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing("demo_accounts");

    let config = DataStoreConfig::from_env()?;
    let data_store = connect(&config).await?;

    let store = AccountStore::new(Arc::new(BcryptHasher::new()), Arc::from(data_store))?;
    store.init().await?;
    tracing::info!(table = %store.table_name(), "Account store ready");

    let id = uuid::Uuid::new_v4().to_string();
    let username = format!("demo_{}", &id[..8]);
    let data = serde_json::json!({ "display_name": "Demo User" }).to_string();

    let account = store.create(&id, &username, "correct horse", &data).await?;
    tracing::info!(id = %account.id(), username = %account.username(), "Created account");

    match store.authenticate(&username, "battery staple").await {
        Err(AccountError::Authentication(_)) => {
            tracing::info!("Wrong password rejected as expected");
        }
        other => tracing::warn!(result = ?other, "Unexpected result for wrong password"),
    }

    store
        .update_password(&id, "correct horse", "battery staple")
        .await?;
    let account = store.authenticate(&username, "battery staple").await?;
    tracing::info!(id = %account.id(), "Authenticated with new password");

    let renamed = format!("{username}_renamed");
    store
        .update_username(&id, &renamed, "battery staple")
        .await?;

    let data = serde_json::json!({ "display_name": "Renamed Demo User" }).to_string();
    let account = store.update_data(&id, &data).await?;
    println!(
        "{}",
        serde_json::to_string_pretty(&account).unwrap_or_else(|_| format!("{account:?}"))
    );

    store.delete(&id).await?;
    match store.get(&id).await {
        Err(AccountError::NotFound) => tracing::info!(id = %id, "Account deleted"),
        other => tracing::warn!(result = ?other, "Account still present after delete"),
    }

    Ok(())
}

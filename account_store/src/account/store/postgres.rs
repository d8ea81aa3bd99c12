use sqlx::{Pool, Postgres};

use crate::account::{
    errors::AccountError,
    types::{Account, AccountSearchField},
};
use crate::storage::validate_postgres_table_schema;

// PostgreSQL implementations
pub(super) async fn create_tables_postgres(
    pool: &Pool<Postgres>,
    table_name: &str,
) -> Result<(), AccountError> {
    let statement = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table_name} (
            id TEXT NOT NULL PRIMARY KEY,
            username TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL,
            data TEXT
        )
        "#
    );

    sqlx::query(&statement).execute(pool).await.map_err(|e| {
        tracing::warn!(statement = %statement.trim(), error = %e, "Error creating schema");
        AccountError::Storage(e.to_string())
    })?;

    Ok(())
}

/// Validates that the account table schema matches what we expect
pub(super) async fn validate_account_tables_postgres(
    pool: &Pool<Postgres>,
    table_name: &str,
) -> Result<(), AccountError> {
    let expected_columns = vec![
        ("id", "text"),
        ("username", "text"),
        ("password", "text"),
        ("data", "text"),
    ];

    validate_postgres_table_schema(pool, table_name, &expected_columns, AccountError::Storage).await
}

pub(super) async fn insert_account_postgres(
    pool: &Pool<Postgres>,
    table_name: &str,
    account: &Account,
) -> Result<(), AccountError> {
    sqlx::query(&format!(
        r#"
        INSERT INTO {table_name} (id, username, password, data) VALUES ($1, $2, $3, $4)
        "#
    ))
    .bind(account.id())
    .bind(account.username())
    .bind(account.password())
    .bind(account.data())
    .execute(pool)
    .await
    .map_err(|e| AccountError::Storage(e.to_string()))?;

    Ok(())
}

pub(super) async fn get_account_by_field_postgres(
    pool: &Pool<Postgres>,
    table_name: &str,
    field: &AccountSearchField,
) -> Result<Option<Account>, AccountError> {
    match field {
        AccountSearchField::Id(id) => sqlx::query_as::<_, Account>(&format!(
            r#"
                SELECT id, username, password, data FROM {table_name} WHERE id = $1 LIMIT 1
                "#
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| AccountError::Storage(e.to_string())),
        AccountSearchField::Username(username) => sqlx::query_as::<_, Account>(&format!(
            r#"
                SELECT id, username, password, data FROM {table_name} WHERE username = $1 LIMIT 1
                "#
        ))
        .bind(username)
        .fetch_optional(pool)
        .await
        .map_err(|e| AccountError::Storage(e.to_string())),
    }
}

pub(super) async fn update_password_postgres(
    pool: &Pool<Postgres>,
    table_name: &str,
    id: &str,
    password: &str,
) -> Result<(), AccountError> {
    sqlx::query(&format!(
        r#"
        UPDATE {table_name} SET password = $1 WHERE id = $2
        "#
    ))
    .bind(password)
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| AccountError::Storage(e.to_string()))?;

    Ok(())
}

pub(super) async fn update_username_postgres(
    pool: &Pool<Postgres>,
    table_name: &str,
    id: &str,
    username: &str,
) -> Result<(), AccountError> {
    sqlx::query(&format!(
        r#"
        UPDATE {table_name} SET username = $1 WHERE id = $2
        "#
    ))
    .bind(username)
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| AccountError::Storage(e.to_string()))?;

    Ok(())
}

pub(super) async fn update_data_postgres(
    pool: &Pool<Postgres>,
    table_name: &str,
    id: &str,
    data: &str,
) -> Result<(), AccountError> {
    sqlx::query(&format!(
        r#"
        UPDATE {table_name} SET data = $1 WHERE id = $2
        "#
    ))
    .bind(data)
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| AccountError::Storage(e.to_string()))?;

    Ok(())
}

pub(super) async fn delete_account_postgres(
    pool: &Pool<Postgres>,
    table_name: &str,
    id: &str,
) -> Result<(), AccountError> {
    sqlx::query(&format!(
        r#"
        DELETE FROM {table_name} WHERE id = $1
        "#
    ))
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| AccountError::Storage(e.to_string()))?;

    Ok(())
}

use serde::Serialize;
use sqlx::FromRow;

/// A stored user account.
///
/// Fields are read-only outside the crate; changes go through
/// [`AccountStore`](crate::AccountStore) so the password field only ever
/// holds a hash.
#[derive(Debug, Clone, Serialize, FromRow, PartialEq, Eq)]
pub struct Account {
    id: String,
    username: String,
    #[serde(skip_serializing)]
    password: String,
    data: Option<String>,
}

impl Account {
    pub(crate) fn new(id: String, username: String, password: String, data: String) -> Self {
        Self {
            id,
            username,
            password,
            data: Some(data),
        }
    }

    /// Unique, caller-assigned identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// The password hash
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Opaque caller-owned payload, empty when the column is NULL
    pub fn data(&self) -> &str {
        self.data.as_deref().unwrap_or_default()
    }

    pub(crate) fn with_password(self, password: String) -> Self {
        Self { password, ..self }
    }

    pub(crate) fn with_username(self, username: String) -> Self {
        Self { username, ..self }
    }
}

/// Column an account lookup is keyed on
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AccountSearchField {
    Id(String),
    Username(String),
}

impl std::fmt::Display for AccountSearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountSearchField::Id(id) => write!(f, "id={id}"),
            AccountSearchField::Username(username) => write!(f, "username={username}"),
        }
    }
}

use async_trait::async_trait;
use serde::Deserialize;
use std::fmt;

use crate::errors::InitError;

const DEFAULT_PORT: u16 = 5432;

/// Database credentials as stored in the secret document.
#[derive(Clone, Deserialize)]
pub struct DatabaseSecret {
    pub username: String,
    pub password: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

const fn default_port() -> u16 {
    DEFAULT_PORT
}

impl DatabaseSecret {
    /// Parse a JSON secret document such as
    /// `{"username": "app", "password": "…", "port": 5432}`.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::Secret`] if the document is not valid JSON or
    /// lacks `username`/`password`. The error never echoes the document.
    pub fn from_json(document: &str) -> Result<Self, InitError> {
        serde_json::from_str(document).map_err(|err| {
            InitError::Secret(format!(
                "secret document is malformed ({:?} at line {}, column {})",
                err.classify(),
                err.line(),
                err.column()
            ))
        })
    }
}

impl fmt::Debug for DatabaseSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSecret")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("port", &self.port)
            .finish()
    }
}

/// Source of database credentials.
#[async_trait]
pub trait SecretProvider: Send + Sync {
    /// Fetch the current credentials.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::Secret`] when the secret is unavailable or
    /// cannot be parsed.
    async fn fetch(&self) -> Result<DatabaseSecret, InitError>;
}

/// Reads the secret document from an environment variable (`DB_SECRET` by
/// default), as injected by the deployment platform.
#[derive(Debug, Clone)]
pub struct EnvSecretProvider {
    var: String,
}

impl EnvSecretProvider {
    #[must_use]
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvSecretProvider {
    fn default() -> Self {
        Self::new("DB_SECRET")
    }
}

#[async_trait]
impl SecretProvider for EnvSecretProvider {
    async fn fetch(&self) -> Result<DatabaseSecret, InitError> {
        let document = std::env::var(&self.var)
            .map_err(|_| InitError::Secret(format!("{} must be set", self.var)))?;
        DatabaseSecret::from_json(&document)
    }
}

/// Fixed credentials, for callers that already hold them.
#[derive(Debug, Clone)]
pub struct StaticSecretProvider(pub DatabaseSecret);

#[async_trait]
impl SecretProvider for StaticSecretProvider {
    async fn fetch(&self) -> Result<DatabaseSecret, InitError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_when_absent() {
        let secret = DatabaseSecret::from_json(r#"{"username":"app","password":"hunter2"}"#)
            .unwrap_or_else(|err| unreachable!("{err}"));
        assert_eq!(secret.username, "app");
        assert_eq!(secret.port, 5432);
    }

    #[test]
    fn explicit_port_is_kept() {
        let secret =
            DatabaseSecret::from_json(r#"{"username":"app","password":"pw","port":6543}"#)
                .unwrap_or_else(|err| unreachable!("{err}"));
        assert_eq!(secret.port, 6543);
    }

    #[test]
    fn malformed_document_does_not_leak() {
        let err = DatabaseSecret::from_json(r#"{"username":"app","pass":"hunter2"}"#).err();
        match err {
            Some(InitError::Secret(msg)) => assert!(!msg.contains("hunter2"), "{msg}"),
            other => unreachable!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn debug_redacts_password() {
        let secret = DatabaseSecret {
            username: "app".to_string(),
            password: "hunter2".to_string(),
            port: 5432,
        };
        assert!(!format!("{secret:?}").contains("hunter2"));
    }

    #[tokio::test]
    async fn missing_variable_is_secret_error() {
        let provider = EnvSecretProvider::new("GAMEDB_SCHEMA_TEST_UNSET_SECRET");
        assert!(matches!(provider.fetch().await, Err(InitError::Secret(_))));
    }
}

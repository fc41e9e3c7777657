use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::fmt;
use std::time::Duration;

use crate::config::Config;
use crate::errors::InitError;
use crate::secrets::DatabaseSecret;

/// Everything needed to open the target database.
#[derive(Clone)]
pub struct ConnectionSettings {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    pub password: String,
}

impl ConnectionSettings {
    #[must_use]
    pub fn new(config: &Config, secret: DatabaseSecret) -> Self {
        Self {
            host: config.db_host.clone(),
            port: secret.port,
            database: config.db_name.clone(),
            username: secret.username,
            password: secret.password,
        }
    }

    /// `postgres://` URL with percent-encoded credentials and database name.
    #[must_use]
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            urlencoding::encode(&self.username),
            urlencoding::encode(&self.password),
            self.host,
            self.port,
            urlencoding::encode(&self.database),
        )
    }
}

impl fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Open a single autocommitting connection to the target database.
///
/// Statements executed on the returned handle run outside any explicit
/// transaction, so each one commits as soon as it completes.
///
/// # Errors
///
/// Returns [`InitError::Connect`] if the database cannot be reached or
/// rejects the credentials.
pub async fn connect(settings: &ConnectionSettings) -> Result<DatabaseConnection, InitError> {
    let mut opts = ConnectOptions::new(settings.url());
    opts.max_connections(1)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(10))
        .acquire_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    let db = Database::connect(opts).await?;
    Ok(db)
}

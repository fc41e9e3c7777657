use sea_orm::DbErr;
use std::fmt;

/// Schema initialization error types
#[derive(Debug)]
pub enum InitError {
    /// Required configuration missing or malformed
    Config(String),
    /// Database credentials could not be retrieved or parsed
    Secret(String),
    /// Database could not be reached or refused the credentials
    Connect(DbErr),
    /// A schema statement failed; later statements were not run
    Statement { step: String, source: DbErr },
}

impl InitError {
    /// Message safe to hand back to the caller.
    ///
    /// Names the failure category (and the failing step) but never carries
    /// driver output, host names or credentials. Full detail is only logged.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Config(_) => "Invalid configuration".to_string(),
            Self::Secret(_) => "Could not load database credentials".to_string(),
            Self::Connect(_) => "Could not connect to database".to_string(),
            Self::Statement { step, .. } => format!("Schema statement '{step}' failed"),
        }
    }
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Secret(msg) => write!(f, "Secret error: {msg}"),
            Self::Connect(err) => write!(f, "Connection error: {err}"),
            Self::Statement { step, source } => write!(f, "Statement '{step}' failed: {source}"),
        }
    }
}

impl std::error::Error for InitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Connect(err) | Self::Statement { source: err, .. } => Some(err),
            Self::Config(_) | Self::Secret(_) => None,
        }
    }
}

/// Convert `SeaORM` connection errors to `InitError`
impl From<DbErr> for InitError {
    fn from(err: DbErr) -> Self {
        Self::Connect(err)
    }
}

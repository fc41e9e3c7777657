use schema::{PlanOptions, TriggerMode};

use crate::errors::InitError;

/// Initializer configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_host: String,
    pub db_name: String,
    pub environment: Environment,
    pub trigger_mode: TriggerMode,
    pub log_level: String,
}

/// Deployment environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Map an `ENVIRONMENT` value. Only the exact, lower-case names are
    /// recognized; anything else is treated as development.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "production" => Self::Production,
            "staging" => Self::Staging,
            _ => Self::Development,
        }
    }

    /// Sample rows are inserted everywhere except production.
    #[must_use]
    pub fn seeds_sample_data(&self) -> bool {
        *self != Self::Production
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required: `DB_HOST`, `DB_NAME`
    /// Optional with defaults: `ENVIRONMENT`, `TRIGGER_MODE`, `LOG_LEVEL`
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or `TRIGGER_MODE`
    /// holds an unknown value.
    pub fn from_env() -> Result<Self, InitError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, InitError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| InitError::Config(format!("{key} must be set")))
        };

        let db_host = required("DB_HOST")?;
        let db_name = required("DB_NAME")?;

        let environment = Environment::from_name(
            &lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
        );

        let trigger_mode = lookup("TRIGGER_MODE")
            .map(|value| value.parse::<TriggerMode>())
            .transpose()
            .map_err(InitError::Config)?
            .unwrap_or_default();

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Ok(Self {
            db_host,
            db_name,
            environment,
            trigger_mode,
            log_level,
        })
    }

    /// Schema program options implied by this configuration.
    #[must_use]
    pub fn plan_options(&self) -> PlanOptions {
        PlanOptions {
            seed_sample_data: self.environment.seeds_sample_data(),
            trigger_mode: self.trigger_mode,
        }
    }
}

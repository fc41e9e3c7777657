use tracing::Instrument;

use crate::applier::{self, ApplyReport};
use crate::config::Config;
use crate::db::{self, ConnectionSettings};
use crate::errors::InitError;
use crate::response::InvocationResponse;
use crate::secrets::{EnvSecretProvider, SecretProvider};

/// Load configuration from the environment and run [`invoke`].
///
/// Configuration failures are reported through the same failure envelope as
/// every other error.
pub async fn invoke_from_env() -> InvocationResponse {
    match Config::from_env() {
        Ok(config) => invoke(&config, &EnvSecretProvider::default()).await,
        Err(err) => {
            tracing::error!(error = %err, "Error creating schema");
            InvocationResponse::failure(&err)
        }
    }
}

/// Initialize the schema described by `config` and report the outcome.
///
/// Never fails: every error is logged with its full detail and converted into
/// a failure envelope that carries only a public message.
pub async fn invoke(config: &Config, secrets: &dyn SecretProvider) -> InvocationResponse {
    let span = tracing::info_span!(
        "init_schema",
        database = %config.db_name,
        environment = ?config.environment,
    );

    async {
        match run(config, secrets).await {
            Ok(report) => {
                tracing::info!(
                    statements = report.total(),
                    elapsed_ms = report.elapsed.as_millis(),
                    "Schema creation completed successfully"
                );
                InvocationResponse::success(&config.db_name)
            }
            Err(err) => {
                tracing::error!(error = %err, "Error creating schema");
                InvocationResponse::failure(&err)
            }
        }
    }
    .instrument(span)
    .await
}

async fn run(config: &Config, secrets: &dyn SecretProvider) -> Result<ApplyReport, InitError> {
    let secret = secrets.fetch().await?;
    let settings = ConnectionSettings::new(config, secret);

    tracing::info!(host = %settings.host, port = settings.port, "Connecting to database");
    let db = db::connect(&settings).await?;

    let options = config.plan_options();
    tracing::info!(
        seed_sample_data = options.seed_sample_data,
        trigger_mode = %options.trigger_mode,
        "Applying schema"
    );
    let result = applier::apply(&db, &schema::plan(&options)).await;

    if let Err(err) = db.close().await {
        tracing::warn!(error = %err, "Failed to close database connection");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;
    use async_trait::async_trait;
    use schema::TriggerMode;

    struct UnavailableSecret;

    #[async_trait]
    impl SecretProvider for UnavailableSecret {
        async fn fetch(&self) -> Result<crate::secrets::DatabaseSecret, InitError> {
            Err(InitError::Secret(
                "access denied for arn:secret:db-credentials".to_string(),
            ))
        }
    }

    fn config() -> Config {
        Config {
            db_host: "db.internal".to_string(),
            db_name: "gamedb".to_string(),
            environment: Environment::Development,
            trigger_mode: TriggerMode::DropAndCreate,
            log_level: "warn".to_string(),
        }
    }

    #[tokio::test]
    async fn secret_failure_becomes_failure_envelope() {
        let response = invoke(&config(), &UnavailableSecret).await;

        assert_eq!(response.status_code, 500);
        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap_or_default();
        assert_eq!(body["error"], "Could not load database credentials");
        assert_eq!(body["message"], "Failed to create schema");
        assert!(!response.body.contains("arn:secret"));
    }
}

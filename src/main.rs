use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use gamedb_schema::handler;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize structured logging before configuration so config errors are logged too
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    init_tracing(&log_level);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting schema initializer");

    let response = handler::invoke_from_env().await;
    println!("{}", serde_json::to_string(&response)?);

    if !response.is_success() {
        anyhow::bail!("schema initialization failed");
    }

    Ok(())
}

/// Initialize the `tracing` subscriber with an environment-based filter.
///
/// Logs go to stderr; stdout carries only the response envelope.
fn init_tracing(log_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("gamedb_schema={log_level},sea_orm=warn,sqlx=warn").into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

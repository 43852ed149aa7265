use tracing_subscriber::EnvFilter;

use mindcheck_lambda::config::ApiConfig;
use mindcheck_lambda::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ApiConfig::from_env()?;
    tracing::info!(
        storage = ?config.storage,
        bucket = %config.bucket,
        watched_questions = config.safety.watched_questions.len(),
        "starting mindcheck api"
    );

    let state = AppState::from_config(&config).await;

    lambda_http::run(mindcheck_lambda::app(state))
        .await
        .map_err(|e| eyre::eyre!(e))
}

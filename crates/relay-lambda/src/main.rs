use tracing_subscriber::EnvFilter;

use relay_inference::client::InferenceClient;
use relay_lambda::config::RelayConfig;
use relay_lambda::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = RelayConfig::from_env()?;
    let inference = InferenceClient::new(config.inference_url.clone())?;

    tracing::info!(endpoint = %config.inference_url, "relay configured");

    let state = AppState { inference };

    lambda_http::run(relay_lambda::app(state))
        .await
        .map_err(|e| eyre::eyre!(e))
}

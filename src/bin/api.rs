use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use precis::api::build_router;
use precis::clients::{LlmClient, TextGenerator};
use precis::core::config::AppConfig;
use precis::core::summarize::Summarizer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A local .env is honored when present; deployments use the process
    // environment directly.
    dotenvy::dotenv().ok();

    precis::setup_logging();

    let config = AppConfig::from_env()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    let backend: Option<Arc<dyn TextGenerator>> = match &config.openai_api_key {
        Some(key) => {
            info!("OpenAI backend configured (model {})", config.openai_model);
            Some(Arc::new(LlmClient::new(
                key.clone(),
                config.openai_org_id.clone(),
                config.openai_model.clone(),
                config.request_timeout,
            )))
        }
        None => {
            info!("No OPENAI_API_KEY set, running in demo mode with mock summaries");
            None
        }
    };

    let router = build_router(Arc::new(Summarizer::new(backend)));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("Listening on http://{}", config.bind_addr);

    axum::serve(listener, router)
        .await
        .context("Server error")?;

    Ok(())
}

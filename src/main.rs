use anyhow::Result;
use clap::Parser;
use gemini_edit_relay::ai::{GeminiEditClient, GenerationService};
use gemini_edit_relay::edit::EditOrchestrator;
use gemini_edit_relay::models::Config;
use gemini_edit_relay::server::{create_router, AppState};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "gemini-edit-relay")]
#[command(about = "Relay prompt-driven image edits to Gemini")]
struct CliArgs {
    /// Address to bind, e.g. 127.0.0.1:8787. Overrides BIND_ADDR.
    #[arg(long, value_name = "ADDR")]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gemini_edit_relay=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();
    let config = Config::from_env()?;
    let bind_addr = args.bind.unwrap_or_else(|| config.bind_addr.clone());

    if config.gemini_api_key.is_none() {
        // Startup proceeds; the endpoint reports the missing key per request.
        warn!("GEMINI_API_KEY is not set; edit requests will fail with a configuration error");
    }

    let upstream: Arc<dyn GenerationService> = Arc::new(GeminiEditClient::new(
        config.gemini_api_key.clone().unwrap_or_default(),
        config.gemini_model.clone(),
    ));
    let orchestrator = Arc::new(EditOrchestrator::new(
        upstream,
        config.gemini_api_key.clone(),
    ));
    let app = create_router(AppState::new(orchestrator));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(
        "gemini-edit-relay listening on {} (model: {})",
        bind_addr, config.gemini_model
    );
    axum::serve(listener, app).await?;

    Ok(())
}

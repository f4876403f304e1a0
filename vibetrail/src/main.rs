use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vibetrail::api::{create_router, AppState};
use vibetrail::config::Config;
use vibetrail::llm::LlmProvider;
use vibetrail::taste::TasteClient;

#[derive(Parser)]
#[command(name = "vibetrail")]
#[command(about = "Taste-to-itinerary service: free-text vibe in, day plan out")]
struct Args {
    /// Override the listen port from VIBETRAIL_PORT
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vibetrail=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env();
    if let Some(port) = args.port {
        config.server.port = port;
    }

    if let Some(llm_config) = &config.llm {
        tracing::info!("Initializing LLM provider: {}...", llm_config.model);
    }
    let llm = LlmProvider::new(config.llm.as_ref());
    if !llm.is_available() {
        tracing::warn!(
            "LLM_MODEL is not set — seed extraction, ecosystem analysis, and day planning \
             are unavailable"
        );
    }

    let taste = match &config.taste {
        Some(taste_config) => {
            tracing::info!("Initializing taste client: {}...", taste_config.base_url);
            Some(TasteClient::new(taste_config)?)
        }
        None => {
            tracing::warn!("TASTE_API_KEY is not set — /recommendations will be unavailable");
            None
        }
    };

    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = AppState::new(config, llm, taste);
    let app = create_router(state);

    tracing::info!("VibeTrail starting on http://{}", addr);
    tracing::info!("  Health check: http://{}/api/v1/health", addr);
    tracing::info!("  API docs:     http://{}/api/v1/docs", addr);
    tracing::info!("  OpenAPI spec: http://{}/api/v1/openapi.json", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

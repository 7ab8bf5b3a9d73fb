use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{fmt, EnvFilter};

use prompt_atelier::{
    config::Config,
    gemini::GeminiClient,
    routes::{router, AppState},
    site::{parse_site_url, SiteConfig},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Init tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = Config::from_env();
    match &config.api_key {
        Some(key) => tracing::info!("Using API key: {}...", key.chars().take(4).collect::<String>()),
        None => tracing::warn!("GEMINI_API_KEY is not set; /api/generate will answer 500"),
    }
    tracing::info!(model = %config.model, "Gemini model configured");

    let site = SiteConfig::new(parse_site_url(config.site_url.as_deref()));
    let state = AppState {
        generator: Arc::new(GeminiClient::new(config.api_base.clone(), config.model.clone())),
        site: Arc::new(site),
        config: Arc::new(config.clone()),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(%addr, "Starting server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Shutting down");
        })
        .await?;
    Ok(())
}

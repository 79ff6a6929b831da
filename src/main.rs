mod config;
mod deepseek;
mod error;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("deepseek_translate=debug,tower_http=debug")
        .init();

    let config = Config::from_env()?;
    if config.api_key.is_none() {
        warn!("DEEPSEEK_API_KEY is not set; translation requests will be rejected");
    }

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let app_state = AppState::new(config)?;

    let app = routes::create_routes()
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

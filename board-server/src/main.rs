use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use board_server::comuline::{ComulineClient, ComulineConfig};
use board_server::web::{AppState, create_router};

/// Directory for static assets, relative to the workspace root.
const STATIC_DIR: &str = "board-server/static";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Base URL is injected configuration; COMULINE_BASE_URL overrides
    // the public default.
    let mut config = ComulineConfig::new();
    if let Ok(url) = std::env::var("COMULINE_BASE_URL") {
        config = config.with_base_url(url);
    }

    let comuline = ComulineClient::new(config).expect("Failed to create Comuline client");

    let state = AppState::new(comuline);
    let app = create_router(state, STATIC_DIR);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    tracing::info!("departure board listening on http://{addr}");
    tracing::info!("pages: /  /stations  /stations/{{id}}");
    tracing::info!("api:   /health  /api/stations  /api/schedule/{{id}}");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

//! TRITOE Server - HTTP API for the shared cube game
//!
//! This crate provides the web backend:
//! - Move / reset / state endpoints over the one shared game
//! - Static file serving for the board viewer
//! - Permissive CORS so the viewer may be hosted elsewhere

mod routes;
mod state;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir};
use tritoe_core::DEFAULT_BOARD_SIZE;

pub use state::ServerState;

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
    pub board_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8002,
            static_dir: "static".to_string(),
            board_size: DEFAULT_BOARD_SIZE,
        }
    }
}

/// Create the router with all routes
pub fn create_router(config: &ServerConfig, state: Arc<ServerState>) -> Router {
    let static_service = ServeDir::new(&config.static_dir);

    Router::new()
        // Status endpoint
        .route("/api/status", get(routes::status::status_handler))
        // Game API
        .route("/move", post(routes::game::make_move))
        .route("/reset", post(routes::game::reset_game))
        .route("/state", get(routes::game::get_state))
        // Shared state
        .with_state(state)
        // Static file serving (must be last)
        .fallback_service(static_service)
        .layer(CorsLayer::permissive())
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(ServerState::with_board_size(config.board_size)?);
    let router = create_router(&config, state);

    tracing::info!("TRITOE Server starting on http://0.0.0.0:{}", config.port);
    tracing::info!(
        "Board {n}x{n}x{n}, static files served from: {}",
        config.static_dir,
        n = config.board_size
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

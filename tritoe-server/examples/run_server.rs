//! Example to run the TRITOE server standalone
//!
//! Run with: cargo run -p tritoe-server --example run_server

use tritoe_server::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = ServerConfig {
        board_size: 3,
        ..ServerConfig::default()
    };

    println!("Starting TRITOE server on port {}", config.port);
    println!("Static files from: {}", config.static_dir);
    println!("Open http://localhost:{}/", config.port);

    run_server(config).await
}

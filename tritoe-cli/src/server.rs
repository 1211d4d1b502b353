//! `tritoe serve` - host the shared game over HTTP
//!
//! Turns command-line flags into a `ServerConfig`, rejecting a cube size
//! the core would refuse and a `--static-dir` that points at a file, then
//! blocks on the server inside its own tokio runtime. A missing viewer
//! directory only warns: the JSON API works without it.

use std::path::{Path, PathBuf};

use anyhow::{ensure, Result};
use clap::Args;

use tritoe_core::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
use tritoe_server::{run_server, ServerConfig};

// ============================================================================
// FLAGS
// ============================================================================

#[derive(Args)]
pub struct ServerArgs {
    /// Port number to listen on
    #[arg(long, default_value = "8002")]
    pub port: u16,

    /// Directory holding the board viewer (index.html)
    #[arg(long, default_value = "static")]
    pub static_dir: PathBuf,

    /// Edge length of the cube
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    pub board_size: usize,
}

// ============================================================================
// COMMAND
// ============================================================================

pub fn run(args: ServerArgs) -> Result<()> {
    let config = server_config(&args)?;

    tracing::info!(
        "Serving a {n}x{n}x{n} game on port {}",
        config.port,
        n = config.board_size
    );

    tokio::runtime::Runtime::new()?.block_on(run_server(config))
}

/// Flags to server configuration, after checking them
fn server_config(args: &ServerArgs) -> Result<ServerConfig> {
    ensure!(
        (1..=MAX_BOARD_SIZE).contains(&args.board_size),
        "Board size must be between 1 and {}, got {}",
        MAX_BOARD_SIZE,
        args.board_size
    );
    check_viewer_dir(&args.static_dir)?;

    Ok(ServerConfig {
        port: args.port,
        static_dir: args.static_dir.to_string_lossy().into_owned(),
        board_size: args.board_size,
    })
}

fn check_viewer_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        tracing::warn!(
            "No viewer at {}; only the JSON API will be available",
            path.display()
        );
        return Ok(());
    }
    ensure!(
        path.is_dir(),
        "--static-dir must be a directory: {}",
        path.display()
    );
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

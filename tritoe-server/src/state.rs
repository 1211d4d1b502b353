//! Server state management

use tritoe_core::{GameError, SharedGame};

/// Server-wide shared state
///
/// Handed to every handler through `State<Arc<ServerState>>`.
#[derive(Debug, Default)]
pub struct ServerState {
    pub game: SharedGame,
}

impl ServerState {
    /// State around a fresh game on a board of edge `size`
    pub fn with_board_size(size: usize) -> Result<Self, GameError> {
        Ok(Self {
            game: SharedGame::with_size(size)?,
        })
    }
}

//! TRITOE Core - 3D tic-tac-toe engine
//!
//! This crate provides the game logic shared by the server and CLI:
//! - Cube board storage with bounds-checked access
//! - The 13 line directions of the cube
//! - Win detection with line endpoints
//! - Turn/status state machine
//! - A lock-guarded game for concurrent callers

pub mod board;
pub mod coord;
pub mod error;
pub mod game;
pub mod shared;
pub mod win;

// Re-exports for convenient access
pub use board::{Board, Cell, Mark, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
pub use coord::{all_directions, Coord, Direction, DIRECTIONS};
pub use error::GameError;
pub use game::{GameSnapshot, GameState, GameStatus, MoveOutcome, Rejection};
pub use shared::SharedGame;
pub use win::{find_winner, line_through, WinningLine};

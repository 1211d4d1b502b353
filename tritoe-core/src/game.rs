//! Game state and move application

use crate::board::{Board, Cell, Mark};
use crate::coord::Coord;
use crate::error::Result;
use crate::win::{find_winner, WinningLine};
use serde::{Deserialize, Serialize};

// ============================================================================
// CORE TYPES
// ============================================================================

/// Game status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "winner")]
pub enum GameStatus {
    InProgress,
    Won(Mark),
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Why a placement was refused without touching the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    #[serde(rename = "cell occupied")]
    CellOccupied,
    #[serde(rename = "game already decided")]
    GameAlreadyDecided,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::CellOccupied => write!(f, "cell occupied"),
            Rejection::GameAlreadyDecided => write!(f, "game already decided"),
        }
    }
}

/// Result of one placement attempt
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Rejection>,
    /// The player who moved (or would have moved, if rejected)
    pub player: Mark,
    pub winner: Option<Mark>,
    pub start: Option<Coord>,
    pub end: Option<Coord>,
    /// Last free cell taken without a line; the game stays in progress
    pub draw: bool,
}

impl MoveOutcome {
    fn rejected(player: Mark, rejection: Rejection) -> Self {
        Self {
            accepted: false,
            reason: Some(rejection),
            player,
            winner: None,
            start: None,
            end: None,
            draw: false,
        }
    }

    fn accepted(player: Mark, line: Option<WinningLine>, draw: bool) -> Self {
        Self {
            accepted: true,
            reason: None,
            player,
            winner: line.map(|l| l.winner),
            start: line.map(|l| l.start),
            end: line.map(|l| l.end),
            draw,
        }
    }
}

/// Read-only copy of the game for rendering
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub size: usize,
    /// `cells[x][y][z]`
    pub cells: Vec<Vec<Vec<Cell>>>,
    pub current_player: Mark,
    pub status: GameStatus,
    pub ended: bool,
    /// No free cell left; further moves can only be rejected
    pub board_full: bool,
    pub winner: Option<Mark>,
    pub start: Option<Coord>,
    pub end: Option<Coord>,
    pub moves: u32,
}

// ============================================================================
// GAME STATE
// ============================================================================

/// One game on one board
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    current_player: Mark,
    status: GameStatus,
    /// Line that decided the game, kept for late viewers
    winning_line: Option<WinningLine>,
    moves: u32,
}

impl GameState {
    /// Fresh game, X to move
    pub fn new(board: Board) -> Self {
        let mut state = Self {
            board,
            current_player: Mark::X,
            status: GameStatus::InProgress,
            winning_line: None,
            moves: 0,
        };
        state.reset();
        state
    }

    /// Fresh game on an empty board of edge `size`
    pub fn with_size(size: usize) -> Result<Self> {
        Board::new(size).map(Self::new)
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    /// Accepted moves since the last reset
    pub fn moves(&self) -> u32 {
        self.moves
    }

    // ========================================================================
    // TRANSITIONS
    // ========================================================================

    /// Place the current player's mark
    ///
    /// Occupied cells and finished games come back as rejected outcomes.
    /// Off-board coordinates are an error. Neither changes any state.
    pub fn place(&mut self, coord: Coord) -> Result<MoveOutcome> {
        let player = self.current_player;

        if self.status.is_over() {
            return Ok(MoveOutcome::rejected(player, Rejection::GameAlreadyDecided));
        }
        if self.board.get(coord)?.is_some() {
            return Ok(MoveOutcome::rejected(player, Rejection::CellOccupied));
        }

        self.board.set(coord, Some(player))?;
        self.moves += 1;

        if let Some(line) = find_winner(&self.board) {
            self.status = GameStatus::Won(line.winner);
            self.winning_line = Some(line);
            return Ok(MoveOutcome::accepted(player, Some(line), false));
        }

        self.current_player = player.opponent();
        Ok(MoveOutcome::accepted(player, None, self.board.is_full()))
    }

    /// Back to an empty board with X to move
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Mark::X;
        self.status = GameStatus::InProgress;
        self.winning_line = None;
        self.moves = 0;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            size: self.board.size(),
            cells: self.board.to_nested(),
            current_player: self.current_player,
            status: self.status,
            ended: self.status.is_over(),
            board_full: self.board.is_full(),
            winner: self.winning_line.map(|l| l.winner),
            start: self.winning_line.map(|l| l.start),
            end: self.winning_line.map(|l| l.end),
            moves: self.moves,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Board::default())
    }
}

// ============================================================================
// TESTS
// ============================================================================

//! Lock-guarded game shared between request handlers

use crate::error::Result;
use crate::game::{GameSnapshot, GameState, MoveOutcome};
use crate::Coord;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// The one game every client plays on
///
/// Each operation holds the lock for its whole duration, so the
/// occupancy check, write, win scan and turn change of a placement
/// are never interleaved with another request.
#[derive(Debug, Default)]
pub struct SharedGame {
    inner: Mutex<GameState>,
}

impl SharedGame {
    pub fn new(game: GameState) -> Self {
        Self {
            inner: Mutex::new(game),
        }
    }

    /// Shared game on an empty board of edge `size`
    pub fn with_size(size: usize) -> Result<Self> {
        GameState::with_size(size).map(Self::new)
    }

    pub fn place(&self, coord: Coord) -> Result<MoveOutcome> {
        self.lock().place(coord)
    }

    pub fn reset(&self) {
        self.lock().reset();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.lock().snapshot()
    }

    pub fn size(&self) -> usize {
        self.lock().board().size()
    }

    // Every mutation validates before writing, so a panicking holder
    // cannot leave a half-applied move behind.
    fn lock(&self) -> MutexGuard<'_, GameState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_concurrent_claims_on_one_cell() {
        let game = Arc::new(SharedGame::with_size(3).unwrap());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let game = Arc::clone(&game);
                thread::spawn(move || game.place(Coord::new(1, 1, 1)).unwrap().accepted)
            })
            .collect();

        let accepted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&a| a)
            .count();
        assert_eq!(accepted, 1);

        let snap = game.snapshot();
        assert_eq!(snap.moves, 1);
        assert_eq!(snap.cells[1][1][1], Some(Mark::X));
        assert_eq!(snap.current_player, Mark::O);
    }

    #[test]
    fn test_concurrent_distinct_cells_alternate() {
        let game = Arc::new(SharedGame::with_size(4).unwrap());
        // The 2x2x2 corner holds no line of four, whatever the interleaving
        let coords: Vec<Coord> = (0..8)
            .map(|i| Coord::new(i & 1, (i >> 1) & 1, (i >> 2) & 1))
            .collect();
        let handles: Vec<_> = coords
            .into_iter()
            .map(|c| {
                let game = Arc::clone(&game);
                thread::spawn(move || game.place(c).unwrap())
            })
            .collect();
        let outcomes: Vec<MoveOutcome> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert!(outcomes.iter().all(|o| o.accepted));
        let xs = outcomes.iter().filter(|o| o.player == Mark::X).count();
        let os = outcomes.iter().filter(|o| o.player == Mark::O).count();
        assert_eq!((xs, os), (4, 4));
    }

    #[test]
    fn test_reset_through_shared_handle() {
        let game = SharedGame::default();
        assert_eq!(game.size(), 5);
        game.place(Coord::new(0, 0, 0)).unwrap();
        game.reset();
        let snap = game.snapshot();
        assert_eq!(snap.moves, 0);
        assert_eq!(snap.current_player, Mark::X);
        assert!(!snap.ended);
    }
}

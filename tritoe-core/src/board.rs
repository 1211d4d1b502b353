//! Cube board storage with bounds-checked access

use crate::coord::Coord;
use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};

/// Default edge length
pub const DEFAULT_BOARD_SIZE: usize = 5;

/// Largest accepted edge length
pub const MAX_BOARD_SIZE: usize = 16;

/// Player mark
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Cell content; `None` is empty
pub type Cell = Option<Mark>;

/// N×N×N grid of cells (dense, x-major)
///
/// The board only guards bounds. Occupancy rules belong to the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board with edge length `size`
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(GameError::InvalidSize {
                size,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(Self {
            size,
            cells: vec![None; size * size * size],
        })
    }

    /// Edge length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if a coordinate is on the board
    pub fn in_bounds(&self, coord: Coord) -> bool {
        let n = self.size as i32;
        (0..n).contains(&coord.x) && (0..n).contains(&coord.y) && (0..n).contains(&coord.z)
    }

    /// Read a cell
    pub fn get(&self, coord: Coord) -> Result<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Overwrite a cell unconditionally
    pub fn set(&mut self, coord: Coord, cell: Cell) -> Result<()> {
        let i = self.index(coord)?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Iterate all cells in scan order: x, then y, then z
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (self.coord_of(i), cell))
    }

    /// Nested `[x][y][z]` copy of the grid for rendering
    pub fn to_nested(&self) -> Vec<Vec<Vec<Cell>>> {
        self.cells
            .chunks(self.size * self.size)
            .map(|plane| plane.chunks(self.size).map(<[Cell]>::to_vec).collect())
            .collect()
    }

    fn index(&self, coord: Coord) -> Result<usize> {
        if !self.in_bounds(coord) {
            return Err(GameError::OutOfRange {
                coord,
                size: self.size,
            });
        }
        let n = self.size;
        Ok((coord.x as usize * n + coord.y as usize) * n + coord.z as usize)
    }

    fn coord_of(&self, index: usize) -> Coord {
        let n = self.size;
        Coord::new(
            (index / (n * n)) as i32,
            (index / n % n) as i32,
            (index % n) as i32,
        )
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            cells: vec![None; DEFAULT_BOARD_SIZE.pow(3)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let board = Board::new(3).unwrap();
        assert!(board.in_bounds(Coord::new(0, 0, 0)));
        assert!(board.in_bounds(Coord::new(2, 2, 2)));
        assert!(!board.in_bounds(Coord::new(3, 0, 0)));
        assert!(!board.in_bounds(Coord::new(0, -1, 0)));
        assert!(!board.in_bounds(Coord::new(0, 0, 3)));
    }

    #[test]
    fn test_get_set_clear() {
        let mut board = Board::default();
        let c = Coord::new(1, 2, 3);
        assert_eq!(board.get(c), Ok(None));

        board.set(c, Some(Mark::O)).unwrap();
        assert_eq!(board.get(c), Ok(Some(Mark::O)));
        assert_eq!(board.occupied(), 1);

        // No occupancy check at this level
        board.set(c, Some(Mark::X)).unwrap();
        assert_eq!(board.get(c), Ok(Some(Mark::X)));

        board.clear();
        assert_eq!(board.occupied(), 0);
        assert_eq!(board.get(c), Ok(None));
    }

    #[test]
    fn test_out_of_range_is_an_error() {
        let mut board = Board::new(4).unwrap();
        let bad = Coord::new(4, 0, 0);
        let err = GameError::OutOfRange { coord: bad, size: 4 };
        assert_eq!(board.get(bad), Err(err.clone()));
        assert_eq!(board.set(bad, Some(Mark::X)), Err(err));
        assert_eq!(board.occupied(), 0);
    }

    #[test]
    fn test_invalid_size() {
        assert!(matches!(Board::new(0), Err(GameError::InvalidSize { .. })));
        assert!(matches!(
            Board::new(MAX_BOARD_SIZE + 1),
            Err(GameError::InvalidSize { .. })
        ));
        assert!(Board::new(1).is_ok());
    }

    #[test]
    fn test_scan_order_and_nesting() {
        let mut board = Board::new(2).unwrap();
        let order: Vec<Coord> = board.cells().map(|(c, _)| c).collect();
        assert_eq!(order.len(), 8);
        assert_eq!(order[0], Coord::new(0, 0, 0));
        assert_eq!(order[1], Coord::new(0, 0, 1));
        assert_eq!(order[2], Coord::new(0, 1, 0));
        assert_eq!(order[4], Coord::new(1, 0, 0));

        board.set(Coord::new(1, 0, 1), Some(Mark::X)).unwrap();
        let nested = board.to_nested();
        assert_eq!(nested[1][0][1], Some(Mark::X));
        assert_eq!(nested[0][0][1], None);
    }

    #[test]
    fn test_full() {
        let mut board = Board::new(1).unwrap();
        assert!(!board.is_full());
        board.set(Coord::new(0, 0, 0), Some(Mark::X)).unwrap();
        assert!(board.is_full());
    }
}

//! Win detection along the 13 lines of the cube

use crate::board::{Board, Mark};
use crate::coord::{Coord, Direction, DIRECTIONS};
use serde::{Deserialize, Serialize};

/// A completed run of one mark
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    pub winner: Mark,
    /// Farthest matching cell walking backward
    pub start: Coord,
    /// Farthest matching cell walking forward
    pub end: Coord,
    pub length: usize,
}

/// Scan the whole board for a winning run
///
/// First hit wins: cells in scan order, then directions in `DIRECTIONS` order.
pub fn find_winner(board: &Board) -> Option<WinningLine> {
    board
        .cells()
        .filter(|(_, cell)| cell.is_some())
        .find_map(|(coord, _)| line_through(board, coord))
}

/// Check only the lines through one cell
///
/// Enough after a single placement, since only that cell changed.
pub fn line_through(board: &Board, coord: Coord) -> Option<WinningLine> {
    let mark = board.get(coord).ok().flatten()?;
    let needed = board.size();

    DIRECTIONS.iter().find_map(|&dir| {
        let (forward, end) = walk(board, coord, dir, mark);
        let (backward, start) = walk(board, coord, dir.reversed(), mark);
        let length = 1 + forward + backward;
        (length >= needed).then_some(WinningLine {
            winner: mark,
            start,
            end,
            length,
        })
    })
}

/// Count consecutive `mark` cells after `from`; returns the count and the last match
fn walk(board: &Board, from: Coord, dir: Direction, mark: Mark) -> (usize, Coord) {
    let mut last = from;
    let mut count = 0;
    loop {
        let next = last.offset(dir, 1);
        match board.get(next) {
            Ok(Some(m)) if m == mark => {
                last = next;
                count += 1;
            }
            _ => return (count, last),
        }
    }
}

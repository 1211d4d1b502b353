//! Cube coordinates and line directions

use serde::{Deserialize, Serialize};

/// Cell address on the cube, `(x, y, z)`
///
/// Serialized as a plain `[x, y, z]` array so clients can index their
/// own grids directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 3]", into = "[i32; 3]")]
pub struct Coord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Step `steps` cells along a direction (negative steps walk backward)
    pub fn offset(&self, dir: Direction, steps: i32) -> Coord {
        Coord::new(
            self.x + dir.dx * steps,
            self.y + dir.dy * steps,
            self.z + dir.dz * steps,
        )
    }
}

impl From<[i32; 3]> for Coord {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Coord::new(x, y, z)
    }
}

impl From<Coord> for [i32; 3] {
    fn from(c: Coord) -> Self {
        [c.x, c.y, c.z]
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Unit step through the cube, each component in {-1, 0, 1}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dx: i32,
    pub dy: i32,
    pub dz: i32,
}

impl Direction {
    pub const fn new(dx: i32, dy: i32, dz: i32) -> Self {
        Self { dx, dy, dz }
    }

    /// The opposite vector; together with `self` it spans one line
    pub const fn reversed(self) -> Self {
        Self::new(-self.dx, -self.dy, -self.dz)
    }

    /// True for the representative of each `(d, -d)` pair:
    /// the first nonzero component is positive.
    pub fn is_canonical(&self) -> bool {
        [self.dx, self.dy, self.dz]
            .into_iter()
            .find(|&c| c != 0)
            .is_some_and(|c| c > 0)
    }
}

/// One representative per undirected line, in scan order
/// 0-2: axes, 3-8: face diagonals, 9-12: space diagonals
pub const DIRECTIONS: [Direction; 13] = [
    Direction::new(1, 0, 0),   // X axis
    Direction::new(0, 1, 0),   // Y axis
    Direction::new(0, 0, 1),   // Z axis
    Direction::new(1, 1, 0),   // XY diagonal
    Direction::new(1, -1, 0),  // XY anti-diagonal
    Direction::new(1, 0, 1),   // XZ diagonal
    Direction::new(1, 0, -1),  // XZ anti-diagonal
    Direction::new(0, 1, 1),   // YZ diagonal
    Direction::new(0, 1, -1),  // YZ anti-diagonal
    Direction::new(1, 1, 1),   // space diagonals
    Direction::new(1, 1, -1),
    Direction::new(1, -1, 1),
    Direction::new(1, -1, -1),
];

/// All 26 directed unit vectors
pub fn all_directions() -> impl Iterator<Item = Direction> {
    DIRECTIONS
        .into_iter()
        .flat_map(|d| [d, d.reversed()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_canonical_directions_cover_every_line_once() {
        let all: HashSet<Direction> = all_directions().collect();
        assert_eq!(all.len(), 26);
        assert!(!all.contains(&Direction::new(0, 0, 0)));

        for d in DIRECTIONS {
            assert!(d.is_canonical(), "{:?} should be canonical", d);
            assert!(!d.reversed().is_canonical());
        }

        // Every nonzero vector in {-1,0,1}^3 is reachable
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    if (dx, dy, dz) != (0, 0, 0) {
                        assert!(all.contains(&Direction::new(dx, dy, dz)));
                    }
                }
            }
        }
    }

    #[test]
    fn test_offset() {
        let c = Coord::new(2, 2, 2);
        let d = Direction::new(1, -1, 0);
        assert_eq!(c.offset(d, 2), Coord::new(4, 0, 2));
        assert_eq!(c.offset(d, -1), Coord::new(1, 3, 2));
    }

    #[test]
    fn test_coord_serializes_as_array() {
        let json = serde_json::to_string(&Coord::new(1, 2, 3)).unwrap();
        assert_eq!(json, "[1,2,3]");
        let back: Coord = serde_json::from_str("[4,0,-1]").unwrap();
        assert_eq!(back, Coord::new(4, 0, -1));
    }
}

//! Blank-move directions and child generation.
//!
//! A move names the direction the blank travels. Sliding produces a fresh
//! [`Board`] with the blank swapped against the adjacent tile; the input board
//! is never touched. `successors` yields the children in the canonical
//! Up, Down, Left, Right order that every search strategy expands in.

use crate::puzzle::board::Board;
use core::fmt;
use smallvec::SmallVec;

/// Direction the blank moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in canonical expansion order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// The move that undoes this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Left => "Left",
            Self::Right => "Right",
        };
        write!(f, "{label}")
    }
}

impl Board {
    /// Slides the blank one cell in `direction`.
    ///
    /// Returns `None` when the blank sits on the corresponding edge: `Up` in
    /// row 0, `Down` in row n-1, `Left` in column 0, `Right` in column n-1.
    #[must_use]
    pub fn slide(&self, direction: Direction) -> Option<Self> {
        let n = self.n;
        let row = self.blank / n;
        let col = self.blank % n;

        let target = match direction {
            Direction::Up if row > 0 => self.blank - n,
            Direction::Down if row + 1 < n => self.blank + n,
            Direction::Left if col > 0 => self.blank - 1,
            Direction::Right if col + 1 < n => self.blank + 1,
            _ => return None,
        };

        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, target);

        Some(Self {
            tiles,
            n,
            blank: target,
        })
    }

    /// All boards one blank move away, tagged with the move taken, in
    /// canonical order.
    #[must_use]
    pub fn successors(&self) -> SmallVec<[(Direction, Self); 4]> {
        Direction::ALL
            .iter()
            .filter_map(|&direction| self.slide(direction).map(|board| (direction, board)))
            .collect()
    }
}

//! Grid coordinates and ship axes.
//!
//! Cells are 1-indexed (x, y) pairs. Coordinates are `i32` on purpose: the
//! targeting logic builds dead-zone rectangles one cell beyond a sunk ship,
//! which may reach coordinate 0 or `width + 1`. Such cells are only ever
//! tested for set membership, never dereferenced into a board.

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// One grid coordinate. Equality and hashing are by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Neighbor with x − 1.
    pub const fn left(self) -> Self {
        Self::new(self.x - 1, self.y)
    }

    /// Neighbor with x + 1.
    pub const fn right(self) -> Self {
        Self::new(self.x + 1, self.y)
    }

    /// Neighbor with y − 1.
    pub const fn above(self) -> Self {
        Self::new(self.x, self.y - 1)
    }

    /// Neighbor with y + 1.
    pub const fn below(self) -> Self {
        Self::new(self.x, self.y + 1)
    }

    /// Step one cell away from the ship body along `axis`, toward the start
    /// extremity (left or above).
    pub const fn back_along(self, axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => self.left(),
            Axis::Vertical => self.above(),
        }
    }

    /// Step one cell away from the ship body along `axis`, toward the end
    /// extremity (right or below).
    pub const fn forward_along(self, axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => self.right(),
            Axis::Vertical => self.below(),
        }
    }

    /// The coordinate that varies along `axis` (x when horizontal, y when
    /// vertical).
    pub const fn coord_along(self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Letter-column notation: column x as a letter, row y as a number, so
/// (1, 1) prints as "A1" and (5, 3) as "E3".
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (1..=26).contains(&self.x) && self.y >= 1 {
            let col = (b'A' + (self.x - 1) as u8) as char;
            write!(f, "{}{}", col, self.y)
        } else {
            // off-board cells (dead-zone fringes) have no letter form
            write!(f, "({},{})", self.x, self.y)
        }
    }
}

/// Error from parsing a coordinate string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCellError;

impl fmt::Display for ParseCellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected a coordinate like E3")
    }
}

impl std::error::Error for ParseCellError {}

impl FromStr for Cell {
    type Err = ParseCellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let col_ch = chars.next().ok_or(ParseCellError)?.to_ascii_uppercase();
        if !col_ch.is_ascii_uppercase() {
            return Err(ParseCellError);
        }
        let x = (col_ch as u8 - b'A') as i32 + 1;
        let row_str = chars.as_str();
        let y: i32 = row_str.parse().map_err(|_| ParseCellError)?;
        if y < 1 {
            return Err(ParseCellError);
        }
        Ok(Cell::new(x, y))
    }
}

//! Ship definitions and per-segment hit tracking.

use core::fmt;

use crate::cell::{Axis, Cell};
use crate::common::BoardError;

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship placed on the board. Segments run from `origin` along `axis`;
/// hits are tracked as a bitmask over segment indices (lengths are small).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    axis: Axis,
    origin: Cell,
    hit_mask: u8,
}

impl Ship {
    /// Place a ship at `origin` running along `axis`. The origin must be the
    /// segment with the smallest coordinate. Bounds are the board's concern;
    /// only the segment count is validated here.
    pub fn new(ship_type: ShipType, axis: Axis, origin: Cell) -> Result<Self, BoardError> {
        if ship_type.length() == 0 || ship_type.length() > 8 {
            return Err(BoardError::ShipOutOfBounds);
        }
        Ok(Ship {
            ship_type,
            axis,
            origin,
            hit_mask: 0,
        })
    }

    /// Segment index occupied at `cell`, if any.
    pub fn segment_at(&self, cell: Cell) -> Option<usize> {
        let offset = match self.axis {
            Axis::Horizontal => {
                if cell.y != self.origin.y {
                    return None;
                }
                cell.x - self.origin.x
            }
            Axis::Vertical => {
                if cell.x != self.origin.x {
                    return None;
                }
                cell.y - self.origin.y
            }
        };
        if offset >= 0 && (offset as usize) < self.ship_type.length() {
            Some(offset as usize)
        } else {
            None
        }
    }

    /// Whether the ship occupies `cell`.
    pub fn occupies(&self, cell: Cell) -> bool {
        self.segment_at(cell).is_some()
    }

    /// Iterate over the cells this ship occupies.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let origin = self.origin;
        let axis = self.axis;
        (0..self.ship_type.length() as i32).map(move |i| match axis {
            Axis::Horizontal => Cell::new(origin.x + i, origin.y),
            Axis::Vertical => Cell::new(origin.x, origin.y + i),
        })
    }

    /// Register a hit at `cell`. Returns `true` if the ship occupies the
    /// cell and records it.
    pub fn guess(&mut self, cell: Cell) -> bool {
        match self.segment_at(cell) {
            Some(i) => {
                self.hit_mask |= 1 << i;
                true
            }
            None => false,
        }
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hit_mask.count_ones() as usize == self.ship_type.length()
    }

    /// Ship's type.
    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    /// Origin of the ship (smallest-coordinate segment).
    pub fn origin(&self) -> Cell {
        self.origin
    }

    /// Axis the ship runs along.
    pub fn axis(&self) -> Axis {
        self.axis
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: {}, axis: {:?}, hits: {} }}",
            self.ship_type.name(),
            self.origin,
            self.axis,
            self.hit_mask.count_ones(),
        )
    }
}

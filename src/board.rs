//! Game board state: ship placements, hits and misses.

use std::collections::HashSet;

use rand::Rng;

use crate::cell::{Axis, Cell};
use crate::common::{BoardError, GuessResult};
use crate::config::{BOARD_HEIGHT, BOARD_WIDTH, NUM_SHIPS, SHIPS};
use crate::ship::Ship;

/// Name and sunk flag for one fleet slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipState {
    pub name: &'static str,
    pub sunk: bool,
}

/// Main board state: ship placements, hits, misses. Cells are 1-indexed
/// (x, y) with x in `1..=width` and y in `1..=height`.
pub struct Board {
    width: i32,
    height: i32,
    ship_states: [ShipState; NUM_SHIPS],
    ships: [Option<Ship>; NUM_SHIPS],
    hits: HashSet<Cell>,
    misses: HashSet<Cell>,
}

impl Board {
    /// Create an empty board with the standard dimensions (no ships placed).
    pub fn new() -> Self {
        Self::with_size(BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// Create an empty board with explicit dimensions.
    pub fn with_size(width: i32, height: i32) -> Self {
        let ship_states = core::array::from_fn(|i| ShipState {
            name: SHIPS[i].name(),
            sunk: false,
        });
        Board {
            width,
            height,
            ship_states,
            ships: [None; NUM_SHIPS],
            hits: HashSet::new(),
            misses: HashSet::new(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `cell` lies on the board.
    pub fn contains(&self, cell: Cell) -> bool {
        (1..=self.width).contains(&cell.x) && (1..=self.height).contains(&cell.y)
    }

    /// Immutable view of ship states.
    pub fn ship_states(&self) -> &[ShipState] {
        &self.ship_states
    }

    /// Returns `true` when all ships are sunk.
    pub fn all_sunk(&self) -> bool {
        self.ship_states.iter().all(|s| s.sunk)
    }

    /// Cells where guesses hit a ship.
    pub fn hits(&self) -> &HashSet<Cell> {
        &self.hits
    }

    /// Cells where guesses missed.
    pub fn misses(&self) -> &HashSet<Cell> {
        &self.misses
    }

    /// Whether any placed ship occupies `cell`.
    pub fn occupied(&self, cell: Cell) -> bool {
        self.ships
            .iter()
            .flatten()
            .any(|ship| ship.occupies(cell))
    }

    /// Whether any placed ship occupies `cell` or one of its eight
    /// neighbors.
    fn touches_ship(&self, cell: Cell) -> bool {
        (cell.x - 1..=cell.x + 1)
            .any(|x| (cell.y - 1..=cell.y + 1).any(|y| self.occupied(Cell::new(x, y))))
    }

    /// Place a single ship by fleet index at `origin` along `axis`.
    ///
    /// Ships may not overlap and may not touch, not even diagonally. The
    /// no-touch rule is what makes the one-cell dead zone around a sunk
    /// ship a sound deduction for the targeting engine.
    pub fn place(&mut self, ship_index: usize, origin: Cell, axis: Axis) -> Result<(), BoardError> {
        if ship_index >= NUM_SHIPS {
            return Err(BoardError::InvalidIndex);
        }
        if self.ships[ship_index].is_some() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let def = SHIPS[ship_index];
        let ship = Ship::new(def, axis, origin)?;
        for cell in ship.cells() {
            if !self.contains(cell) {
                return Err(BoardError::ShipOutOfBounds);
            }
            if self.occupied(cell) {
                return Err(BoardError::ShipOverlaps);
            }
        }
        if ship.cells().any(|c| self.touches_ship(c)) {
            return Err(BoardError::ShipsTouch);
        }
        self.ship_states[ship_index].name = def.name();
        self.ships[ship_index] = Some(ship);
        Ok(())
    }

    /// Returns a random non-overlapping `(origin, axis)` for `ship_index`.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ship_index: usize,
    ) -> Result<(Cell, Axis), BoardError> {
        if ship_index >= NUM_SHIPS {
            return Err(BoardError::InvalidIndex);
        }
        let def = SHIPS[ship_index];
        let len = def.length() as i32;
        let mut attempts = 0;
        while attempts < 100 {
            attempts += 1;
            let axis = if rng.random() {
                Axis::Horizontal
            } else {
                Axis::Vertical
            };
            let max_x = if axis == Axis::Horizontal {
                self.width - len + 1
            } else {
                self.width
            };
            let max_y = if axis == Axis::Vertical {
                self.height - len + 1
            } else {
                self.height
            };
            if max_x < 1 || max_y < 1 {
                return Err(BoardError::ShipOutOfBounds);
            }
            let origin = Cell::new(rng.random_range(1..=max_x), rng.random_range(1..=max_y));
            let ship = Ship::new(def, axis, origin)?;
            if ship.cells().all(|c| !self.touches_ship(c)) {
                return Ok((origin, axis));
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Process a guess at `cell`, marking hits/misses and reporting result.
    pub fn guess(&mut self, cell: Cell) -> Result<GuessResult, BoardError> {
        if !self.contains(cell) {
            return Err(BoardError::CellOutOfBounds(cell));
        }
        // prevent duplicates
        if self.hits.contains(&cell) || self.misses.contains(&cell) {
            return Err(BoardError::AlreadyGuessed);
        }
        for (i, slot) in self.ships.iter_mut().enumerate() {
            if let Some(ship) = slot {
                if ship.guess(cell) {
                    self.hits.insert(cell);
                    if ship.is_sunk() && !self.ship_states[i].sunk {
                        self.ship_states[i].sunk = true;
                        return Ok(GuessResult::Sink(ship.ship_type().name()));
                    }
                    return Ok(GuessResult::Hit);
                }
            }
        }
        self.misses.insert(cell);
        Ok(GuessResult::Miss)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Board {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(
            f,
            "Board {{ {}x{}, hits: {}, misses: {}, states: {:?} }}",
            self.width,
            self.height,
            self.hits.len(),
            self.misses.len(),
            self.ship_states,
        )
    }
}

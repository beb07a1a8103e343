//! Common types: board errors and guess results.

use crate::cell::Cell;

/// Result of a guess attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// Guess hit an undepleted ship segment.
    Hit,
    /// Guess missed all ships.
    Miss,
    /// Guess sank a ship, carrying its name.
    Sink(&'static str),
}

impl GuessResult {
    /// `(is_hit, has_sunk)` view of the result, the shape the targeting
    /// engine consumes.
    pub fn flags(self) -> (bool, bool) {
        match self {
            GuessResult::Hit => (true, false),
            GuessResult::Miss => (false, false),
            GuessResult::Sink(_) => (true, true),
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Specified ship index is out of range.
    InvalidIndex,
    /// Named ship not found in configuration.
    NameNotFound,
    /// Attempted to place a ship that is already placed.
    ShipAlreadyPlaced,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship placement touches another ship.
    ShipsTouch,
    /// Ship placement is out of bounds.
    ShipOutOfBounds,
    /// Guess coordinate lies outside the board.
    CellOutOfBounds(Cell),
    /// Guess was already made at this position.
    AlreadyGuessed,
    /// Unable to place ship (random placement failed).
    UnableToPlaceShip,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidIndex => write!(f, "Ship index is out of range"),
            BoardError::NameNotFound => write!(f, "Ship name not found in configuration"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipsTouch => write!(f, "Ships may not touch each other"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::CellOutOfBounds(c) => write!(f, "Cell {} is outside the board", c),
            BoardError::AlreadyGuessed => write!(f, "Guess was already made at this position"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

impl std::error::Error for BoardError {}

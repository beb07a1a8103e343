//! Automatic player backed by the targeting engine.

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::cell::Cell;
use crate::common::{BoardError, GuessResult};
use crate::player::{place_fleet_randomly, Player};
use crate::targeting::TargetingEngine;

/// Player that hunts ships with the stateful hunt/target/destroy search.
pub struct AutoPlayer {
    name: String,
    engine: TargetingEngine,
}

impl AutoPlayer {
    /// Create an automatic player targeting a `width` x `height` opponent
    /// grid.
    pub fn new(name: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            name: name.into(),
            engine: TargetingEngine::new(width, height),
        }
    }

    /// The underlying targeting engine, for inspection.
    pub fn engine(&self) -> &TargetingEngine {
        &self.engine
    }
}

impl Player for AutoPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        place_fleet_randomly(rng, board)
    }

    fn select_target(&mut self, rng: &mut SmallRng) -> Cell {
        self.engine.select_target(rng)
    }

    fn receive_result(&mut self, _cell: Cell, result: GuessResult) {
        let (is_hit, has_sunk) = result.flags();
        self.engine.receive_result(is_hit, has_sunk);
    }
}

//! Naive player that fires at random, avoiding only its own repeats.

use std::collections::HashSet;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::Board;
use crate::cell::Cell;
use crate::common::BoardError;
use crate::player::{place_fleet_randomly, Player};

pub struct RandomPlayer {
    name: String,
    width: i32,
    height: i32,
    tried: HashSet<Cell>,
}

impl RandomPlayer {
    pub fn new(name: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            tried: HashSet::new(),
        }
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        place_fleet_randomly(rng, board)
    }

    fn select_target(&mut self, rng: &mut SmallRng) -> Cell {
        loop {
            let cell = Cell::new(
                rng.random_range(1..=self.width),
                rng.random_range(1..=self.height),
            );
            if self.tried.insert(cell) {
                return cell;
            }
        }
    }
}

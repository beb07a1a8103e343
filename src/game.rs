//! Core game state and the synchronous local turn loop.

use std::collections::HashSet;

use log::debug;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::cell::Cell;
use crate::common::{BoardError, GuessResult};
use crate::config::{NUM_SHIPS, SHIPS, TOTAL_SHIP_CELLS};
use crate::player::Player;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Core game logic holding the player's board and guess history.
pub struct GameEngine {
    board: Board,
    guess_hits: HashSet<Cell>,
    guess_misses: HashSet<Cell>,
    enemy_remaining: usize,
    enemy_ships_remaining: [bool; NUM_SHIPS],
}

impl GameEngine {
    /// Create a new engine with an empty board and no guesses recorded.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            guess_hits: HashSet::new(),
            guess_misses: HashSet::new(),
            enemy_remaining: TOTAL_SHIP_CELLS,
            enemy_ships_remaining: [true; NUM_SHIPS],
        }
    }

    /// Mutable reference to the player's board for ship placement.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Immutable reference to the player's board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cells where our guesses hit the opponent.
    pub fn guess_hits(&self) -> &HashSet<Cell> {
        &self.guess_hits
    }

    /// Cells where our guesses missed.
    pub fn guess_misses(&self) -> &HashSet<Cell> {
        &self.guess_misses
    }

    /// Number of guesses made against the opponent.
    pub fn guess_count(&self) -> usize {
        self.guess_hits.len() + self.guess_misses.len()
    }

    /// Handle an opponent guess on the player's board.
    pub fn opponent_guess(&mut self, cell: Cell) -> Result<GuessResult, BoardError> {
        self.board.guess(cell)
    }

    /// Record the result of a guess made against the opponent.
    pub fn record_guess(&mut self, cell: Cell, result: GuessResult) -> Result<(), BoardError> {
        if self.guess_hits.contains(&cell) || self.guess_misses.contains(&cell) {
            return Err(BoardError::AlreadyGuessed);
        }
        match result {
            GuessResult::Hit => {
                self.guess_hits.insert(cell);
                self.enemy_remaining = self.enemy_remaining.saturating_sub(1);
            }
            GuessResult::Sink(name) => {
                self.guess_hits.insert(cell);
                self.enemy_remaining = self.enemy_remaining.saturating_sub(1);
                if let Some(idx) = SHIPS.iter().position(|s| s.name() == name) {
                    self.enemy_ships_remaining[idx] = false;
                } else {
                    return Err(BoardError::NameNotFound);
                }
            }
            GuessResult::Miss => {
                self.guess_misses.insert(cell);
            }
        }
        Ok(())
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.board.all_sunk() {
            GameStatus::Lost
        } else if self.enemy_remaining == 0 {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of one finished local game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalGameReport {
    pub status1: GameStatus,
    pub status2: GameStatus,
    pub guesses1: usize,
    pub guesses2: usize,
    pub turns: usize,
}

/// Run one turn for the attacker: select a target, resolve it against the
/// defender's board, and report the outcome back to both sides.
fn play_turn(
    attacker: &mut dyn Player,
    attacker_engine: &mut GameEngine,
    defender: &mut dyn Player,
    defender_engine: &mut GameEngine,
    rng: &mut SmallRng,
) -> anyhow::Result<()> {
    let cell = attacker.select_target(rng);
    let result = defender_engine
        .opponent_guess(cell)
        .map_err(|e| anyhow::anyhow!(e))?;
    attacker_engine
        .record_guess(cell, result)
        .map_err(|e| anyhow::anyhow!(e))?;
    debug!("{} fires at {} -> {:?}", attacker.name(), cell, result);
    attacker.receive_result(cell, result);
    defender.handle_opponent_guess(cell, result);
    Ok(())
}

/// Alternate turns between two local players until one fleet is destroyed.
/// Both players must have placed their ships already.
pub fn run_local_game(
    p1: &mut dyn Player,
    e1: &mut GameEngine,
    p2: &mut dyn Player,
    e2: &mut GameEngine,
    rng: &mut SmallRng,
) -> anyhow::Result<LocalGameReport> {
    let max_turns = (e1.board().width() * e1.board().height()) as usize * 2;
    let mut turns = 0;
    loop {
        turns += 1;
        if turns > max_turns {
            return Err(anyhow::anyhow!("game did not finish in {} turns", max_turns));
        }
        play_turn(p1, e1, p2, e2, rng)?;
        if e2.status() == GameStatus::Lost {
            break;
        }
        play_turn(p2, e2, p1, e1, rng)?;
        if e1.status() == GameStatus::Lost {
            break;
        }
    }
    Ok(LocalGameReport {
        status1: e1.status(),
        status2: e2.status(),
        guesses1: e1.guess_count(),
        guesses2: e2.guess_count(),
        turns,
    })
}

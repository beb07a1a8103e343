use rand::rngs::SmallRng;

use crate::board::Board;
use crate::cell::Cell;
use crate::common::{BoardError, GuessResult};

/// Interface implemented by different player types.
pub trait Player {
    /// Display name for turn banners and the sim report.
    fn name(&self) -> &str;

    /// Place all ships onto the provided board.
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError>;

    /// Choose the next cell to attack on the opponent's board.
    fn select_target(&mut self, rng: &mut SmallRng) -> Cell;

    /// Inform the player of the result of its last guess.
    fn receive_result(&mut self, _cell: Cell, _result: GuessResult) {}

    /// Inform the player of an opponent guess against its board.
    fn handle_opponent_guess(&mut self, _cell: Cell, _result: GuessResult) {}
}

/// Place the whole fleet at random positions.
pub fn place_fleet_randomly(
    rng: &mut SmallRng,
    board: &mut Board,
) -> Result<(), BoardError> {
    for i in 0..crate::config::NUM_SHIPS {
        let (origin, axis) = board.random_placement(rng, i)?;
        board.place(i, origin, axis)?;
    }
    Ok(())
}

mod board;
mod cell;
mod common;
mod config;
mod game;
mod logging;
mod player;
mod player_ai;
mod player_cli;
mod player_random;
mod ship;
mod targeting;

pub use board::*;
pub use cell::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use logging::init_logging;
pub use player::*;
pub use player_ai::*;
pub use player_cli::*;
pub use player_random::*;
pub use ship::*;
pub use targeting::*;

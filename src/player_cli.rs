//! Terminal player: manual placement and targeting via stdin.

use std::collections::HashSet;
use std::io::{self, Write};

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::cell::{Axis, Cell};
use crate::common::{BoardError, GuessResult};
use crate::config::{NUM_SHIPS, SHIPS};
use crate::game::GameEngine;
use crate::player::Player;

pub struct CliPlayer {
    name: String,
    width: i32,
    height: i32,
    hits: HashSet<Cell>,
    misses: HashSet<Cell>,
}

impl CliPlayer {
    pub fn new(name: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            hits: HashSet::new(),
            misses: HashSet::new(),
        }
    }
}

fn print_board(board: &Board, reveal: bool) {
    print!("   ");
    for x in 1..=board.width() {
        let ch = (b'A' + (x - 1) as u8) as char;
        print!(" {}", ch);
    }
    println!();
    for y in 1..=board.height() {
        print!("{:2} ", y);
        for x in 1..=board.width() {
            let cell = Cell::new(x, y);
            let ch = if board.hits().contains(&cell) {
                'X'
            } else if board.misses().contains(&cell) {
                'o'
            } else if reveal && board.occupied(cell) {
                'S'
            } else {
                '.'
            };
            print!(" {}", ch);
        }
        println!();
    }
}

fn print_guess_board(width: i32, height: i32, hits: &HashSet<Cell>, misses: &HashSet<Cell>) {
    print!("   ");
    for x in 1..=width {
        let ch = (b'A' + (x - 1) as u8) as char;
        print!(" {}", ch);
    }
    println!();
    for y in 1..=height {
        print!("{:2} ", y);
        for x in 1..=width {
            let cell = Cell::new(x, y);
            let ch = if hits.contains(&cell) {
                'X'
            } else if misses.contains(&cell) {
                'o'
            } else {
                '.'
            };
            print!(" {}", ch);
        }
        println!();
    }
}

/// Display the opponent board (top) and the player's board (bottom).
pub fn print_player_view(engine: &GameEngine) {
    println!("Opponent board:");
    print_guess_board(
        engine.board().width(),
        engine.board().height(),
        engine.guess_hits(),
        engine.guess_misses(),
    );
    println!("\nYour board:");
    print_board(engine.board(), true);
}

fn read_line() -> String {
    let mut line = String::new();
    let _ = io::stdin().read_line(&mut line);
    line.trim().to_string()
}

impl Player for CliPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        println!("Place your ships (e.g. A5 H). Press enter for random placement.");
        for i in 0..NUM_SHIPS {
            let def = SHIPS[i];
            loop {
                print_board(board, true);
                print!("Place {} (length {}): ", def.name(), def.length());
                let _ = io::stdout().flush();
                let line = read_line();
                if line.is_empty() {
                    let (origin, axis) = board.random_placement(rng, i)?;
                    board.place(i, origin, axis)?;
                    break;
                }
                let mut parts = line.split_whitespace();
                let origin = parts.next().and_then(|p| p.parse::<Cell>().ok());
                let axis = match parts.next().map(|p| p.chars().next().unwrap_or('H')) {
                    Some('v') | Some('V') => Axis::Vertical,
                    _ => Axis::Horizontal,
                };
                if let Some(origin) = origin {
                    match board.place(i, origin, axis) {
                        Ok(()) => break,
                        Err(e) => println!("Error: {}", e),
                    }
                } else {
                    println!("Invalid input");
                }
            }
        }
        Ok(())
    }

    fn select_target(&mut self, _rng: &mut SmallRng) -> Cell {
        println!("\nIt is now {}'s turn.", self.name);
        print_guess_board(self.width, self.height, &self.hits, &self.misses);
        loop {
            print!("Enter guess: ");
            let _ = io::stdout().flush();
            let cell = match read_line().parse::<Cell>() {
                Ok(cell) => cell,
                Err(e) => {
                    println!("{}", e);
                    continue;
                }
            };
            if !(1..=self.width).contains(&cell.x) || !(1..=self.height).contains(&cell.y) {
                println!("{} is outside the board", cell);
                continue;
            }
            if self.hits.contains(&cell) || self.misses.contains(&cell) {
                println!("You already guessed {}", cell);
                continue;
            }
            return cell;
        }
    }

    fn receive_result(&mut self, cell: Cell, result: GuessResult) {
        match result {
            GuessResult::Sink(ship) => {
                self.hits.insert(cell);
                println!("You guessed {} -> sank the {}!", cell, ship);
            }
            GuessResult::Hit => {
                self.hits.insert(cell);
                println!("You guessed {} -> hit", cell);
            }
            GuessResult::Miss => {
                self.misses.insert(cell);
                println!("You guessed {} -> miss", cell);
            }
        }
    }

    fn handle_opponent_guess(&mut self, cell: Cell, result: GuessResult) {
        match result {
            GuessResult::Sink(ship) => {
                println!("Opponent guessed {} and sank your {}!", cell, ship)
            }
            GuessResult::Hit => println!("Opponent guessed {} -> hit", cell),
            GuessResult::Miss => println!("Opponent guessed {} -> miss", cell),
        }
    }
}

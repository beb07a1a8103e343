use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    init_logging, print_player_view, AutoPlayer, CliPlayer, GameEngine, GameStatus, Player,
    RandomPlayer, BOARD_HEIGHT, BOARD_WIDTH,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Debug)]
enum OpponentType {
    /// Hunt/target/destroy search.
    Auto,
    /// Uniformly random shots.
    Random,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, value_enum, default_value_t = OpponentType::Auto)]
        opponent: OpponentType,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch a computer-vs-computer game.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { opponent, seed } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = make_rng(seed);
            let mut human = CliPlayer::new("You", BOARD_WIDTH, BOARD_HEIGHT);
            let mut computer: Box<dyn Player> = match opponent {
                OpponentType::Auto => {
                    Box::new(AutoPlayer::new("Computer", BOARD_WIDTH, BOARD_HEIGHT))
                }
                OpponentType::Random => {
                    Box::new(RandomPlayer::new("Computer", BOARD_WIDTH, BOARD_HEIGHT))
                }
            };
            let mut e1 = GameEngine::new();
            let mut e2 = GameEngine::new();
            human
                .place_ships(&mut rng, e1.board_mut())
                .map_err(|e| anyhow::anyhow!(e))?;
            computer
                .place_ships(&mut rng, e2.board_mut())
                .map_err(|e| anyhow::anyhow!(e))?;

            let report =
                seabattle::run_local_game(&mut human, &mut e1, computer.as_mut(), &mut e2, &mut rng)?;

            println!("\n=== GAME OVER ===\n");
            print_player_view(&e1);
            match report.status1 {
                GameStatus::Won => println!("\nVictory! You have sunk all enemy ships."),
                GameStatus::Lost => println!("\nDefeat. All your ships have been destroyed."),
                GameStatus::InProgress => {}
            }
        }
        Commands::Watch { seed } => {
            println!("Starting computer vs computer game...");
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = make_rng(seed);
            let mut p1 = AutoPlayer::new("Player 1", BOARD_WIDTH, BOARD_HEIGHT);
            let mut p2 = AutoPlayer::new("Player 2", BOARD_WIDTH, BOARD_HEIGHT);
            let mut e1 = GameEngine::new();
            let mut e2 = GameEngine::new();
            p1.place_ships(&mut rng, e1.board_mut())
                .map_err(|e| anyhow::anyhow!(e))?;
            p2.place_ships(&mut rng, e2.board_mut())
                .map_err(|e| anyhow::anyhow!(e))?;

            let report = seabattle::run_local_game(&mut p1, &mut e1, &mut p2, &mut e2, &mut rng)?;

            let winner = match (report.status1, report.status2) {
                (GameStatus::Won, _) => p1.name(),
                (_, GameStatus::Won) => p2.name(),
                _ => "nobody",
            };
            println!(
                "{} wins after {} turns ({} + {} guesses)",
                winner, report.turns, report.guesses1, report.guesses2
            );
        }
    }
    Ok(())
}

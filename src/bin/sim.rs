use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{AutoPlayer, GameEngine, Player, BOARD_HEIGHT, BOARD_WIDTH};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);

    let mut p1 = AutoPlayer::new("player1", BOARD_WIDTH, BOARD_HEIGHT);
    let mut p2 = AutoPlayer::new("player2", BOARD_WIDTH, BOARD_HEIGHT);
    let mut e1 = GameEngine::new();
    let mut e2 = GameEngine::new();

    p1.place_ships(&mut rng, e1.board_mut())
        .map_err(|e| anyhow::anyhow!(e))?;
    p2.place_ships(&mut rng, e2.board_mut())
        .map_err(|e| anyhow::anyhow!(e))?;

    let report = seabattle::run_local_game(&mut p1, &mut e1, &mut p2, &mut e2, &mut rng)?;

    let winner = match (report.status1, report.status2) {
        (seabattle::GameStatus::Won, seabattle::GameStatus::Lost) => Some("player1"),
        (seabattle::GameStatus::Lost, seabattle::GameStatus::Won) => Some("player2"),
        _ => None,
    };

    let result = json!({
        "player1": {"status": format!("{:?}", report.status1), "guesses": report.guesses1},
        "player2": {"status": format!("{:?}", report.status2), "guesses": report.guesses2},
        "turns": report.turns,
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

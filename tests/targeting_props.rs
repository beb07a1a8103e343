use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{Board, Cell, Pursuit, TargetingEngine, NUM_SHIPS, TOTAL_SHIP_CELLS};

fn placed_board(rng: &mut SmallRng) -> Board {
    let mut board = Board::new();
    for i in 0..NUM_SHIPS {
        let (origin, axis) = board.random_placement(rng, i).unwrap();
        board.place(i, origin, axis).unwrap();
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// A full game against a random fleet never repeats a target, never
    /// fires into a dead zone, and sinks the fleet within width x height
    /// turns.
    #[test]
    fn full_game_invariants(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = placed_board(&mut rng);
        let mut engine = TargetingEngine::new(board.width(), board.height());
        let grid_cells = (board.width() * board.height()) as usize;

        let mut turns = 0;
        let mut hits = 0;
        while !board.all_sunk() {
            turns += 1;
            prop_assert!(turns <= grid_cells, "fleet not sunk after {} turns", grid_cells);

            let excluded_before = engine.excluded().clone();
            let attempted_before = engine.attempted().clone();
            let cell = engine.select_target(&mut rng);

            prop_assert!(!attempted_before.contains(&cell), "repeated target {}", cell);
            prop_assert!(!excluded_before.contains(&cell), "targeted dead zone {}", cell);
            prop_assert!(board.contains(cell), "target {} out of bounds", cell);
            prop_assert!(engine.attempted().contains(&cell));

            let (is_hit, has_sunk) = board.guess(cell).unwrap().flags();
            if is_hit {
                hits += 1;
            }
            engine.receive_result(is_hit, has_sunk);
        }

        prop_assert_eq!(hits, TOTAL_SHIP_CELLS);
        prop_assert_eq!(engine.attempted().len(), turns);
        // All pursuits resolved once the fleet is gone.
        prop_assert!(matches!(engine.pursuit(), Pursuit::Idle));
    }

    /// Extremities stay ordered along the pursuit axis throughout a game.
    #[test]
    fn pursuit_extremities_stay_ordered(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = placed_board(&mut rng);
        let mut engine = TargetingEngine::new(board.width(), board.height());

        while !board.all_sunk() {
            let cell = engine.select_target(&mut rng);
            let (is_hit, has_sunk) = board.guess(cell).unwrap().flags();
            engine.receive_result(is_hit, has_sunk);

            if let Pursuit::Extending { axis, start, end, hits, .. } = engine.pursuit() {
                prop_assert!(start.coord_along(*axis) <= end.coord_along(*axis));
                // The off-axis coordinate is shared by every recorded hit.
                let fixed = match axis {
                    seabattle::Axis::Horizontal => start.y,
                    seabattle::Axis::Vertical => start.x,
                };
                for h in hits {
                    let h_fixed = match axis {
                        seabattle::Axis::Horizontal => h.y,
                        seabattle::Axis::Vertical => h.x,
                    };
                    prop_assert_eq!(h_fixed, fixed);
                }
            }
        }
    }

    /// Snapshots taken mid-game restore to an engine that continues
    /// identically under the same RNG stream.
    #[test]
    fn snapshot_resumes_identically(seed in any::<u64>(), pause in 1..40usize) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = placed_board(&mut rng);
        let mut engine = TargetingEngine::new(board.width(), board.height());

        for _ in 0..pause {
            if board.all_sunk() {
                break;
            }
            let cell = engine.select_target(&mut rng);
            let (is_hit, has_sunk) = board.guess(cell).unwrap().flags();
            engine.receive_result(is_hit, has_sunk);
        }

        let snapshot = engine.state();
        let mut restored = TargetingEngine::from_state(board.width(), board.height(), snapshot);

        let mut rng_a = SmallRng::seed_from_u64(seed ^ 0x5eed);
        let mut rng_b = rng_a.clone();
        for _ in 0..10 {
            let a: Cell = engine.select_target(&mut rng_a);
            let b: Cell = restored.select_target(&mut rng_b);
            prop_assert_eq!(a, b);
            engine.receive_result(false, false);
            restored.receive_result(false, false);
        }
    }
}

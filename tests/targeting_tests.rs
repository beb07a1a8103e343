use std::collections::HashSet;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{Axis, Cell, Pursuit, TargetingEngine, TargetingState};

fn cells(coords: &[(i32, i32)]) -> HashSet<Cell> {
    coords.iter().map(|&(x, y)| Cell::new(x, y)).collect()
}

/// Build an engine in a mid-hunt state via the snapshot seam.
fn engine_with(
    width: i32,
    height: i32,
    attempted: &[(i32, i32)],
    pursuit: Pursuit,
    last_target: Option<(i32, i32)>,
) -> TargetingEngine {
    TargetingEngine::from_state(
        width,
        height,
        TargetingState {
            attempted: cells(attempted),
            excluded: HashSet::new(),
            pursuit,
            last_target: last_target.map(|(x, y)| Cell::new(x, y)),
        },
    )
}

#[test]
fn test_no_repetition_covers_grid() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut engine = TargetingEngine::new(5, 5);
    let mut seen = HashSet::new();
    for _ in 0..25 {
        let cell = engine.select_target(&mut rng);
        assert!(seen.insert(cell), "cell {} repeated", cell);
        assert!((1..=5).contains(&cell.x) && (1..=5).contains(&cell.y));
        assert!(engine.attempted().contains(&cell));
        engine.receive_result(false, false);
    }
    assert_eq!(seen.len(), 25);
}

#[test]
fn test_seeking_probes_left_up_right_down() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut engine = engine_with(
        10,
        10,
        &[(5, 5)],
        Pursuit::Seeking {
            origin: Cell::new(5, 5),
            hits: vec![Cell::new(5, 5)],
        },
        Some((5, 5)),
    );
    let expected = [(4, 5), (5, 4), (6, 5), (5, 6)];
    for (x, y) in expected {
        let cell = engine.select_target(&mut rng);
        assert_eq!(cell, Cell::new(x, y));
        engine.receive_result(false, false);
    }
}

#[test]
fn test_seeking_skips_forbidden_neighbors() {
    let mut rng = SmallRng::seed_from_u64(1);
    // Origin in the top-left corner: left and up are off the grid.
    let mut engine = engine_with(
        10,
        10,
        &[(1, 1)],
        Pursuit::Seeking {
            origin: Cell::new(1, 1),
            hits: vec![Cell::new(1, 1)],
        },
        Some((1, 1)),
    );
    assert_eq!(engine.select_target(&mut rng), Cell::new(2, 1));
}

#[test]
fn test_direction_inference_vertical() {
    let mut engine = engine_with(
        10,
        10,
        &[(4, 4), (4, 6)],
        Pursuit::Seeking {
            origin: Cell::new(4, 4),
            hits: vec![Cell::new(4, 4)],
        },
        Some((4, 6)),
    );
    engine.receive_result(true, false);
    match engine.pursuit() {
        Pursuit::Extending {
            axis,
            start,
            end,
            start_found,
            end_found,
            hits,
        } => {
            assert_eq!(*axis, Axis::Vertical);
            assert_eq!(*start, Cell::new(4, 4));
            assert_eq!(*end, Cell::new(4, 6));
            assert!(!start_found && !end_found);
            assert_eq!(hits.len(), 2);
        }
        other => panic!("expected Extending, got {:?}", other),
    }
}

#[test]
fn test_direction_inference_horizontal_reorders_extremities() {
    // Second hit left of the origin must become the new start.
    let mut engine = engine_with(
        10,
        10,
        &[(4, 4), (3, 4)],
        Pursuit::Seeking {
            origin: Cell::new(4, 4),
            hits: vec![Cell::new(4, 4)],
        },
        Some((3, 4)),
    );
    engine.receive_result(true, false);
    match engine.pursuit() {
        Pursuit::Extending { axis, start, end, .. } => {
            assert_eq!(*axis, Axis::Horizontal);
            assert_eq!(*start, Cell::new(3, 4));
            assert_eq!(*end, Cell::new(4, 4));
        }
        other => panic!("expected Extending, got {:?}", other),
    }
}

#[test]
fn test_inconsistent_hit_keeps_orientation_open() {
    // A reported hit sharing neither coordinate with the anchor cannot fix
    // an axis; the pursuit stays in Seeking.
    let mut engine = engine_with(
        10,
        10,
        &[(4, 4), (6, 6)],
        Pursuit::Seeking {
            origin: Cell::new(4, 4),
            hits: vec![Cell::new(4, 4)],
        },
        Some((6, 6)),
    );
    engine.receive_result(true, false);
    assert!(matches!(engine.pursuit(), Pursuit::Seeking { .. }));
}

#[test]
fn test_extension_probes_start_side_first() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut engine = engine_with(
        10,
        10,
        &[(2, 5)],
        Pursuit::Extending {
            axis: Axis::Horizontal,
            start: Cell::new(2, 5),
            end: Cell::new(2, 5),
            start_found: false,
            end_found: false,
            hits: vec![Cell::new(2, 5)],
        },
        Some((2, 5)),
    );
    assert_eq!(engine.select_target(&mut rng), Cell::new(1, 5));
}

#[test]
fn test_extension_falls_through_when_start_side_attempted() {
    let mut rng = SmallRng::seed_from_u64(1);
    // (1,5) already attempted: the start extremity is settled, so the probe
    // goes right of the end instead and the marking persists.
    let mut engine = engine_with(
        10,
        10,
        &[(1, 5), (2, 5)],
        Pursuit::Extending {
            axis: Axis::Horizontal,
            start: Cell::new(2, 5),
            end: Cell::new(2, 5),
            start_found: false,
            end_found: false,
            hits: vec![Cell::new(2, 5)],
        },
        Some((2, 5)),
    );
    assert_eq!(engine.select_target(&mut rng), Cell::new(3, 5));
    match engine.pursuit() {
        Pursuit::Extending { start_found, .. } => assert!(*start_found),
        other => panic!("expected Extending, got {:?}", other),
    }
}

#[test]
fn test_extension_falls_through_at_grid_edge() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut engine = engine_with(
        10,
        10,
        &[(1, 5)],
        Pursuit::Extending {
            axis: Axis::Horizontal,
            start: Cell::new(1, 5),
            end: Cell::new(1, 5),
            start_found: false,
            end_found: false,
            hits: vec![Cell::new(1, 5)],
        },
        Some((1, 5)),
    );
    // Left of (1,5) is off the grid.
    assert_eq!(engine.select_target(&mut rng), Cell::new(2, 5));
    assert!(matches!(
        engine.pursuit(),
        Pursuit::Extending { start_found: true, .. }
    ));
}

#[test]
fn test_miss_beyond_start_marks_start_found() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut engine = engine_with(
        10,
        10,
        &[(3, 5), (4, 5)],
        Pursuit::Extending {
            axis: Axis::Horizontal,
            start: Cell::new(3, 5),
            end: Cell::new(4, 5),
            start_found: false,
            end_found: false,
            hits: vec![Cell::new(3, 5), Cell::new(4, 5)],
        },
        Some((4, 5)),
    );
    // Probe left of start, report a miss: the boundary signal.
    assert_eq!(engine.select_target(&mut rng), Cell::new(2, 5));
    engine.receive_result(false, false);
    assert!(matches!(
        engine.pursuit(),
        Pursuit::Extending { start_found: true, end_found: false, .. }
    ));
    // All further probes walk the end side.
    assert_eq!(engine.select_target(&mut rng), Cell::new(5, 5));
}

#[test]
fn test_exclusion_zone_on_sink() {
    let mut rng = SmallRng::seed_from_u64(1);
    // Vertical pursuit (3,3)..(3,4); sinking hit at (3,5) makes the ship
    // span (3,3)..(3,5) and the dead zone its one-cell border.
    let mut engine = engine_with(
        10,
        10,
        &[(3, 3), (3, 4)],
        Pursuit::Extending {
            axis: Axis::Vertical,
            start: Cell::new(3, 3),
            end: Cell::new(3, 4),
            start_found: true,
            end_found: false,
            hits: vec![Cell::new(3, 3), Cell::new(3, 4)],
        },
        Some((3, 4)),
    );
    assert_eq!(engine.select_target(&mut rng), Cell::new(3, 5));
    engine.receive_result(true, true);

    let mut expected = HashSet::new();
    for x in 2..=4 {
        for y in 2..=6 {
            expected.insert(Cell::new(x, y));
        }
    }
    assert_eq!(engine.excluded(), &expected);
    assert!(matches!(engine.pursuit(), Pursuit::Idle));
}

#[test]
fn test_sink_without_pursuit_excludes_single_cell_zone() {
    let mut engine = engine_with(10, 10, &[(5, 5)], Pursuit::Idle, Some((5, 5)));
    engine.receive_result(true, true);
    let mut expected = HashSet::new();
    for x in 4..=6 {
        for y in 4..=6 {
            expected.insert(Cell::new(x, y));
        }
    }
    assert_eq!(engine.excluded(), &expected);
    assert!(matches!(engine.pursuit(), Pursuit::Idle));
}

#[test]
fn test_exclusion_zone_may_reach_off_grid() {
    // Ship against the top-left corner: the dead zone carries coordinate 0
    // members, which are harmless and never selected.
    let mut engine = engine_with(10, 10, &[(1, 1)], Pursuit::Idle, Some((1, 1)));
    engine.receive_result(true, true);
    assert!(engine.excluded().contains(&Cell::new(0, 0)));
    assert!(engine.excluded().contains(&Cell::new(2, 2)));
}

#[test]
fn test_reset_after_sink_returns_to_random_search() {
    let mut rng = SmallRng::seed_from_u64(99);
    // 4x3 grid; sinking a single-cell pursuit at (1,1) excludes the block
    // x in 0..=2, y in 0..=2. The remaining open cells must all come up
    // exactly once under pure random search.
    let mut engine = engine_with(4, 3, &[(1, 1)], Pursuit::Idle, Some((1, 1)));
    engine.receive_result(true, true);

    let open: HashSet<Cell> = (1..=4)
        .flat_map(|x| (1..=3).map(move |y| Cell::new(x, y)))
        .filter(|c| !(c.x <= 2 && c.y <= 2))
        .collect();
    let mut seen = HashSet::new();
    for _ in 0..open.len() {
        let cell = engine.select_target(&mut rng);
        assert!(open.contains(&cell), "{} not an open cell", cell);
        assert!(seen.insert(cell));
        engine.receive_result(false, false);
    }
    assert_eq!(seen, open);
}

#[test]
fn test_hit_activates_pursuit() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut engine = TargetingEngine::new(10, 10);
    let first = engine.select_target(&mut rng);
    assert!(!engine.pursuit().is_active());
    engine.receive_result(true, false);
    assert!(engine.pursuit().is_active());
    match engine.pursuit() {
        Pursuit::Seeking { origin, hits } => {
            assert_eq!(*origin, first);
            assert_eq!(hits.as_slice(), &[first]);
        }
        other => panic!("expected Seeking, got {:?}", other),
    }
}

#[test]
fn test_state_snapshot_roundtrip() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut engine = TargetingEngine::new(10, 10);
    for _ in 0..5 {
        engine.select_target(&mut rng);
        engine.receive_result(false, false);
    }
    engine.select_target(&mut rng);
    engine.receive_result(true, false);

    let snapshot = engine.state();
    let restored = TargetingEngine::from_state(10, 10, snapshot.clone());
    assert_eq!(restored.state(), snapshot);
    assert_eq!(restored.attempted(), engine.attempted());
    assert_eq!(restored.pursuit(), engine.pursuit());
}

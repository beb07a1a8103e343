//! Hunt/target/destroy search over an opponent's hidden grid.
//!
//! The engine is driven in lockstep by the turn harness: one `select_target`
//! call, then exactly one `receive_result` call reporting the outcome of the
//! attack at that cell. It keeps three pieces of state across turns: every
//! cell already attempted, every cell deduced empty around sunk ships, and at
//! most one in-progress pursuit of a located ship.
//!
//! While idle it fires at random among the remaining open cells. The first
//! hit opens a pursuit: orthogonal neighbors of the hit are probed until a
//! second hit fixes the ship's axis, after which the engine walks outward
//! from the known extremities, start side first, until the ship is reported
//! sunk. A sink closes the pursuit and excludes the one-cell border around
//! the ship's bounding line, since the fleet never places ships adjacent to
//! each other in that zone's interior.

use std::collections::HashSet;

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cell::{Axis, Cell};

/// The in-progress effort to sink one located ship.
///
/// Modeled as a tagged variant so that contradictory flag combinations
/// (axis known but no extremities, extremities without an axis) cannot be
/// represented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pursuit {
    /// No ship located; targets are chosen at random.
    Idle,
    /// One or more hits on a ship whose axis is still unknown. `origin` is
    /// the first hit, the anchor for neighbor probing.
    Seeking { origin: Cell, hits: Vec<Cell> },
    /// Axis known; walking outward from the extremities. `start` holds the
    /// smallest coordinate along the axis and `end` the largest. An
    /// extremity is "found" once bounded by a miss, the grid edge, or a
    /// previously attempted cell.
    Extending {
        axis: Axis,
        start: Cell,
        end: Cell,
        start_found: bool,
        end_found: bool,
        hits: Vec<Cell>,
    },
}

impl Pursuit {
    /// Whether a pursuit is in progress.
    pub fn is_active(&self) -> bool {
        !matches!(self, Pursuit::Idle)
    }
}

/// Snapshot of engine state, for inspection or injection (tests, tools).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetingState {
    pub attempted: HashSet<Cell>,
    pub excluded: HashSet<Cell>,
    pub pursuit: Pursuit,
    pub last_target: Option<Cell>,
}

/// Stateful target selector for one agent.
///
/// Call sequence per turn: `select_target`, then `receive_result` with the
/// outcome at the returned cell. The engine never repeats a cell and never
/// targets a cell it has deduced empty.
pub struct TargetingEngine {
    width: i32,
    height: i32,
    attempted: HashSet<Cell>,
    excluded: HashSet<Cell>,
    pursuit: Pursuit,
    last_target: Option<Cell>,
}

impl TargetingEngine {
    /// Create an engine for a `width` x `height` grid with 1-indexed cells.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            attempted: HashSet::new(),
            excluded: HashSet::new(),
            pursuit: Pursuit::Idle,
            last_target: None,
        }
    }

    /// Cells already attacked this game.
    pub fn attempted(&self) -> &HashSet<Cell> {
        &self.attempted
    }

    /// Cells deduced empty around sunk ships.
    pub fn excluded(&self) -> &HashSet<Cell> {
        &self.excluded
    }

    /// Current pursuit state.
    pub fn pursuit(&self) -> &Pursuit {
        &self.pursuit
    }

    /// Snapshot of the mutable engine state.
    pub fn state(&self) -> TargetingState {
        TargetingState {
            attempted: self.attempted.clone(),
            excluded: self.excluded.clone(),
            pursuit: self.pursuit.clone(),
            last_target: self.last_target,
        }
    }

    /// Restore an engine from a snapshot.
    pub fn from_state(width: i32, height: i32, state: TargetingState) -> Self {
        Self {
            width,
            height,
            attempted: state.attempted,
            excluded: state.excluded,
            pursuit: state.pursuit,
            last_target: state.last_target,
        }
    }

    /// Choose the next cell to attack.
    ///
    /// The returned cell is always in bounds, never previously attempted and
    /// never excluded. It is recorded as attempted before returning, so a
    /// well-behaved harness can never receive the same cell twice. Callers
    /// must guarantee the game ends before the open cells run out.
    pub fn select_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Cell {
        let probed = if let Pursuit::Seeking { origin, .. } = self.pursuit {
            self.probe_around(origin)
        } else if matches!(self.pursuit, Pursuit::Extending { .. }) {
            self.extend_target()
        } else {
            None
        };
        let cell = probed.unwrap_or_else(|| self.random_target(rng));
        self.attempted.insert(cell);
        self.last_target = Some(cell);
        cell
    }

    /// Report the outcome of the attack at the last selected cell.
    pub fn receive_result(&mut self, is_hit: bool, has_sunk: bool) {
        let Some(cell) = self.last_target else {
            return;
        };
        if has_sunk {
            // Fold the sinking hit into the extremities so the exclusion
            // rectangle spans the full ship, then retire the pursuit.
            self.fold_hit(cell);
            self.exclude_dead_zone();
            debug!("sank ship, pursuit closed at {}", cell);
            self.pursuit = Pursuit::Idle;
        } else if is_hit {
            self.fold_hit(cell);
        } else {
            self.note_boundary(cell);
        }
    }

    /// Whether `cell` is a legal target: in bounds, untried, not excluded.
    fn is_open(&self, cell: Cell) -> bool {
        (1..=self.width).contains(&cell.x)
            && (1..=self.height).contains(&cell.y)
            && !self.attempted.contains(&cell)
            && !self.excluded.contains(&cell)
    }

    /// Uniform sample over open cells, by resampling until one comes up.
    /// Terminates as long as any open cell remains, which the harness
    /// guarantees by ending the game when the fleet is destroyed.
    fn random_target<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        loop {
            let cell = Cell::new(
                rng.random_range(1..=self.width),
                rng.random_range(1..=self.height),
            );
            if self.is_open(cell) {
                return cell;
            }
        }
    }

    /// First open orthogonal neighbor of `origin`, probing left, up, right,
    /// down in that fixed order.
    fn probe_around(&self, origin: Cell) -> Option<Cell> {
        [
            origin.left(),
            origin.above(),
            origin.right(),
            origin.below(),
        ]
        .into_iter()
        .find(|&c| self.is_open(c))
    }

    /// Next probe while walking a ship whose axis is known: one past `start`
    /// until that extremity is bounded, then one past `end`. Rejecting the
    /// start-side probe durably marks the start extremity as found so it is
    /// never re-probed.
    fn extend_target(&mut self) -> Option<Cell> {
        let (axis, start, end, start_found) = match self.pursuit {
            Pursuit::Extending {
                axis,
                start,
                end,
                start_found,
                ..
            } => (axis, start, end, start_found),
            _ => return None,
        };
        if !start_found {
            let back = start.back_along(axis);
            if self.is_open(back) {
                return Some(back);
            }
            // Off the grid or already forbidden: the start extremity is
            // settled, the remainder of the ship lies past `end`.
            if let Pursuit::Extending { start_found, .. } = &mut self.pursuit {
                *start_found = true;
            }
        }
        let forward = end.forward_along(axis);
        self.is_open(forward).then_some(forward)
    }

    /// Fold a reported hit into the pursuit: activate on the first hit,
    /// infer the axis on the second, extend an extremity thereafter.
    fn fold_hit(&mut self, cell: Cell) {
        self.pursuit = match std::mem::replace(&mut self.pursuit, Pursuit::Idle) {
            Pursuit::Idle => {
                debug!("pursuit opened at {}", cell);
                Pursuit::Seeking {
                    origin: cell,
                    hits: vec![cell],
                }
            }
            Pursuit::Seeking { origin, mut hits } => {
                hits.push(cell);
                let axis = if cell.x == origin.x {
                    Some(Axis::Vertical)
                } else if cell.y == origin.y {
                    Some(Axis::Horizontal)
                } else {
                    // Hit shares neither coordinate with the anchor. That
                    // contradicts the probe geometry, so keep orientation
                    // open rather than guessing.
                    None
                };
                match axis {
                    None => Pursuit::Seeking { origin, hits },
                    Some(axis) => {
                        let (start, end) = if cell.coord_along(axis) < origin.coord_along(axis) {
                            (cell, origin)
                        } else {
                            (origin, cell)
                        };
                        debug!("pursuit axis fixed {:?}, {}..{}", axis, start, end);
                        Pursuit::Extending {
                            axis,
                            start,
                            end,
                            start_found: false,
                            end_found: false,
                            hits,
                        }
                    }
                }
            }
            Pursuit::Extending {
                axis,
                mut start,
                mut end,
                start_found,
                end_found,
                mut hits,
            } => {
                hits.push(cell);
                if cell.coord_along(axis) < start.coord_along(axis) {
                    start = cell;
                } else if cell.coord_along(axis) > end.coord_along(axis) {
                    end = cell;
                }
                Pursuit::Extending {
                    axis,
                    start,
                    end,
                    start_found,
                    end_found,
                    hits,
                }
            }
        };
    }

    /// A miss while walking a known axis bounds whichever extremity the
    /// missed cell lies beyond. Misses in other states carry no information
    /// past the attempted-cell record.
    fn note_boundary(&mut self, cell: Cell) {
        if let Pursuit::Extending {
            axis,
            start,
            end,
            start_found,
            end_found,
            ..
        } = &mut self.pursuit
        {
            if cell.coord_along(*axis) < start.coord_along(*axis) {
                *start_found = true;
            } else if cell.coord_along(*axis) > end.coord_along(*axis) {
                *end_found = true;
            }
        }
    }

    /// Exclude the one-cell border around the sunk ship's bounding line:
    /// the rectangle from `start - (1,1)` to `end + (1,1)` inclusive. Cells
    /// off the grid are inserted as-is; they are only ever consulted for
    /// membership, so they are harmless.
    fn exclude_dead_zone(&mut self) {
        let (start, end) = match &self.pursuit {
            Pursuit::Idle => return,
            Pursuit::Seeking { origin, .. } => (*origin, *origin),
            Pursuit::Extending { start, end, .. } => (*start, *end),
        };
        for x in start.x - 1..=end.x + 1 {
            for y in start.y - 1..=end.y + 1 {
                self.excluded.insert(Cell::new(x, y));
            }
        }
    }
}

use alloc::collections::BTreeSet;
use core::mem;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FloodPhase {
    /// Frontier is just the origin and nothing was visited yet.
    Idle,
    /// An episode is spreading, one adjacency layer per step.
    Flooding,
    /// The frontier ran out. The next step restarts from the origin.
    EpisodeComplete,
}

/// What a single [`FloodEngine::step`] did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FloodStep {
    /// The previous episode had finished and the frontier was reset to the origin first.
    pub restarted: bool,
    /// Cells painted during this step.
    pub processed: CellCount,
    /// Cells scheduled for the next step.
    pub queued: CellCount,
}

/// Layer-by-layer flood from the origin.
///
/// A cell index enters the frontier at most once per episode: candidates already visited, in the
/// current frontier, or already queued are skipped. `visited` is cleared only when a new episode starts.
///
/// Only serialized, since loaded indices could not be checked against a board.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FloodEngine {
    frontier: BTreeSet<CellIndex>,
    visited: BTreeSet<CellIndex>,
}

impl FloodEngine {
    pub fn new() -> Self {
        Self {
            frontier: BTreeSet::from([ORIGIN]),
            visited: BTreeSet::new(),
        }
    }

    pub fn phase(&self) -> FloodPhase {
        if self.frontier.is_empty() {
            FloodPhase::EpisodeComplete
        } else if self.visited.is_empty() {
            FloodPhase::Idle
        } else {
            FloodPhase::Flooding
        }
    }

    pub fn is_episode_complete(&self) -> bool {
        self.frontier.is_empty()
    }

    pub fn frontier(&self) -> &BTreeSet<CellIndex> {
        &self.frontier
    }

    pub fn visited(&self) -> &BTreeSet<CellIndex> {
        &self.visited
    }

    pub fn restart(&mut self) {
        self.frontier.clear();
        self.frontier.insert(ORIGIN);
        self.visited.clear();
    }

    /// Paints the current frontier with `target` and gathers the next layer.
    ///
    /// A neighbor joins when it matches either the color the painted cell had before this step or
    /// `target` itself. Joining cells are flagged flooded right away.
    pub fn step(&mut self, board: &mut Board, target: Color) -> FloodStep {
        let restarted = self.frontier.is_empty();
        if restarted {
            self.restart();
        }

        let frontier = mem::take(&mut self.frontier);
        let mut next = BTreeSet::new();

        for &index in &frontier {
            let cell = board.cell_mut(index);
            let previous = cell.color();
            cell.paint(target);

            for neighbor_index in cell.neighbors() {
                if self.visited.contains(&neighbor_index)
                    || frontier.contains(&neighbor_index)
                    || next.contains(&neighbor_index)
                {
                    continue;
                }

                let neighbor = board.cell_mut(neighbor_index);
                if neighbor.should_flood(previous, target) {
                    neighbor.mark_flooded();
                    next.insert(neighbor_index);
                }
            }
        }

        // both bounded by the board's cell count
        let step = FloodStep {
            restarted,
            processed: frontier.len() as CellCount,
            queued: next.len() as CellCount,
        };
        log::trace!(
            "Flood step to {:?}: painted {:?}, next frontier {:?}",
            target,
            frontier,
            next
        );

        self.visited.extend(frontier);
        self.frontier = next;
        step
    }
}

impl Default for FloodEngine {
    fn default() -> Self {
        Self::new()
    }
}

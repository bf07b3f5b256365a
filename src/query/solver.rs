// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt;

use super::tables::{DistanceTable, PredecessorTable};
use crate::graph::Graph;
use crate::model::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveOptions {
    /// Stop as soon as the goal is finalized instead of settling every reachable cell.
    pub stop_at_goal: bool,
    /// Give up after finalizing this many cells.
    pub max_expansions: Option<usize>,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self { stop_at_goal: true, max_expansions: None }
    }
}

impl SolveOptions {
    pub fn exhaustive() -> Self {
        Self { stop_at_goal: false, ..Self::default() }
    }

    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }
}

/// Frontier entries pop cheapest first; equal costs pop in cell order.
#[derive(Debug, Clone, Copy, PartialEq)]
struct FrontierEntry {
    cost: f64,
    cell: Cell,
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost.total_cmp(&other.cost).then_with(|| self.cell.cmp(&other.cell))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Output of one solve: distances, predecessor links, and which cells were finalized.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    start: Cell,
    distances: DistanceTable,
    predecessors: PredecessorTable,
    finalized: Vec<bool>,
    width: u32,
}

impl ShortestPaths {
    pub fn start(&self) -> Cell {
        self.start
    }

    /// Best known distance, `None` if the cell was never reached.
    pub fn distance(&self, cell: Cell) -> Option<f64> {
        self.distances.is_reached(cell).then(|| self.distances.get(cell))
    }

    pub fn predecessor(&self, cell: Cell) -> Option<Cell> {
        self.predecessors.get(cell)
    }

    pub fn is_finalized(&self, cell: Cell) -> bool {
        let idx = cell.y() as usize * self.width as usize + cell.x() as usize;
        cell.x() < self.width && self.finalized.get(idx).copied().unwrap_or(false)
    }

    pub fn predecessors(&self) -> &PredecessorTable {
        &self.predecessors
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionLimitReached {
    pub limit: usize,
}

impl fmt::Display for ExpansionLimitReached {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "search gave up after finalizing {} cells", self.limit)
    }
}

impl std::error::Error for ExpansionLimitReached {}

/// Dijkstra from `start` over `graph`.
///
/// With a `goal` and `options.stop_at_goal`, the search ends once the goal is
/// finalized. `start == goal` returns immediately with distance 0.
/// An out-of-bounds `start` reaches nothing.
pub fn solve(
    graph: &Graph,
    start: Cell,
    goal: Option<Cell>,
    options: SolveOptions,
) -> Result<ShortestPaths, ExpansionLimitReached> {
    let mut paths = ShortestPaths {
        start,
        distances: DistanceTable::new(graph.width(), graph.height()),
        predecessors: PredecessorTable::new(graph.width(), graph.height()),
        finalized: vec![false; graph.cell_count()],
        width: graph.width(),
    };

    let Some(start_idx) = graph.index_of(start) else {
        return Ok(paths);
    };
    paths.distances.set(start, 0.0);

    if goal == Some(start) {
        paths.finalized[start_idx] = true;
        return Ok(paths);
    }

    let mut frontier: BinaryHeap<Reverse<FrontierEntry>> = BinaryHeap::new();
    frontier.push(Reverse(FrontierEntry { cost: 0.0, cell: start }));

    let mut expansions = 0usize;
    let mut stale = 0usize;
    while let Some(Reverse(entry)) = frontier.pop() {
        let Some(idx) = graph.index_of(entry.cell) else {
            continue;
        };
        if paths.finalized[idx] || entry.cost > paths.distances.get(entry.cell) {
            stale += 1;
            continue;
        }

        if let Some(limit) = options.max_expansions {
            if expansions >= limit {
                tracing::debug!(%start, limit, "expansion limit reached");
                return Err(ExpansionLimitReached { limit });
            }
        }
        paths.finalized[idx] = true;
        expansions += 1;

        if options.stop_at_goal && goal == Some(entry.cell) {
            break;
        }

        for edge in graph.edges_from(entry.cell) {
            let Some(next_idx) = graph.index_of(edge.to) else {
                continue;
            };
            if paths.finalized[next_idx] {
                continue;
            }
            let candidate = entry.cost + edge.cost;
            if candidate < paths.distances.get(edge.to) {
                paths.distances.set(edge.to, candidate);
                paths.predecessors.set(edge.to, entry.cell);
                frontier.push(Reverse(FrontierEntry { cost: candidate, cell: edge.to }));
            }
        }
    }

    tracing::debug!(%start, expansions, stale, "solve finished");

    Ok(paths)
}

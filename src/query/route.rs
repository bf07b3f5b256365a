// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::convert::Infallible;

use rayon::prelude::*;
use serde::Serialize;

use super::error::RouteError;
use super::reconstruct::reconstruct_path;
use super::solver::{solve, SolveOptions};
use crate::graph::Graph;
use crate::model::{Cell, GridModel, MazeMap};

/// A route from start to goal inclusive, with its total cost.
///
/// An empty path means the goal is unreachable; it carries no cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path {
    #[serde(rename = "path")]
    cells: Vec<Cell>,
    cost: Option<f64>,
}

impl Path {
    pub fn unreachable() -> Self {
        Self { cells: Vec::new(), cost: None }
    }

    pub(crate) fn new(cells: Vec<Cell>, cost: f64) -> Self {
        if cells.is_empty() {
            return Self::unreachable();
        }
        Self { cells, cost: Some(cost) }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cost(&self) -> Option<f64> {
        self.cost
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn start(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    pub fn goal(&self) -> Option<Cell> {
        self.cells.last().copied()
    }
}

/// Cheapest route from `start` to `goal` in `map`.
///
/// The maze is snapshotted and the graph rebuilt on every call.
pub fn find_shortest_path<M: MazeMap + ?Sized>(
    start: Cell,
    goal: Cell,
    map: &M,
) -> Result<Path, RouteError<M::Error>> {
    find_shortest_path_with(start, goal, map, SolveOptions::default())
}

pub fn find_shortest_path_with<M: MazeMap + ?Sized>(
    start: Cell,
    goal: Cell,
    map: &M,
    options: SolveOptions,
) -> Result<Path, RouteError<M::Error>> {
    let (width, height) = (map.width(), map.height());
    RouteError::<M::Error>::check_in_bounds("start", start, width, height)?;
    RouteError::<M::Error>::check_in_bounds("goal", goal, width, height)?;

    if start == goal {
        return Ok(Path::new(vec![start], 0.0));
    }

    let grid = GridModel::capture(map).map_err(RouteError::Maze)?;
    let graph = Graph::build(&grid)?;
    shortest_path_in(&graph, start, goal, options).map_err(|err| err.widen())
}

/// Cheapest route over an already built graph.
pub fn shortest_path_in(
    graph: &Graph,
    start: Cell,
    goal: Cell,
    options: SolveOptions,
) -> Result<Path, RouteError> {
    RouteError::<Infallible>::check_in_bounds("start", start, graph.width(), graph.height())?;
    RouteError::<Infallible>::check_in_bounds("goal", goal, graph.width(), graph.height())?;

    let paths = solve(graph, start, Some(goal), options)?;
    let cells = reconstruct_path(paths.predecessors(), start, goal)?;
    let cost = paths.distance(goal).unwrap_or(f64::INFINITY);

    tracing::debug!(%start, %goal, len = cells.len(), cost, "route resolved");

    Ok(Path::new(cells, cost))
}

/// Runs independent queries in parallel; results keep request order.
///
/// Each query captures its own snapshot and builds its own graph, so the
/// only shared state is the read-only collaborator.
pub fn find_shortest_paths<M>(
    requests: &[(Cell, Cell)],
    map: &M,
) -> Vec<Result<Path, RouteError<M::Error>>>
where
    M: MazeMap + Sync + ?Sized,
    M::Error: Send,
{
    requests.par_iter().map(|&(start, goal)| find_shortest_path(start, goal, map)).collect()
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smallvec::SmallVec;

use super::edge::{classify_wall, is_valid_cost, Edge, EdgeKind, InvalidCost};
use crate::model::{Cell, GridModel, Vent, VentDirection};

type EdgeList = SmallVec<[Edge; 4]>;

/// Weighted adjacency over the cells of one grid snapshot.
///
/// Edge lists keep insertion order: grid edges in row-major build order, then
/// vents in the order the maze declared them.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    width: u32,
    height: u32,
    adjacency: Vec<EdgeList>,
}

impl Graph {
    pub fn build(grid: &GridModel) -> Result<Self, MalformedMaze> {
        let mut graph = Self {
            width: grid.width(),
            height: grid.height(),
            adjacency: vec![EdgeList::new(); grid.cell_count()],
        };

        for cell in grid.cells() {
            if let Some(left) = cell.left() {
                let wall = grid.vertical_wall(cell.x(), cell.y()).unwrap_or_default();
                let class = classify_wall(wall).map_err(|InvalidCost(cost)| {
                    MalformedMaze::InvalidClimbCost { cell, neighbour: left, cost }
                })?;
                if let Some((kind, cost)) = class {
                    graph.insert_undirected(cell, left, cost, kind);
                }
            }
            if let Some(down) = cell.down() {
                let wall = grid.horizontal_wall(cell.x(), cell.y()).unwrap_or_default();
                let class = classify_wall(wall).map_err(|InvalidCost(cost)| {
                    MalformedMaze::InvalidClimbCost { cell, neighbour: down, cost }
                })?;
                if let Some((kind, cost)) = class {
                    graph.insert_undirected(cell, down, cost, kind);
                }
            }
        }

        for vent in grid.vents() {
            graph.insert_vent(vent)?;
        }

        tracing::debug!(
            width = graph.width,
            height = graph.height,
            edges = graph.edge_count(),
            vents = grid.vents().len(),
            "built maze graph"
        );

        Ok(graph)
    }

    fn insert_undirected(&mut self, a: Cell, b: Cell, cost: f64, kind: EdgeKind) {
        self.insert_edge(a, Edge { to: b, cost, kind });
        self.insert_edge(b, Edge { to: a, cost, kind });
    }

    fn insert_edge(&mut self, from: Cell, edge: Edge) {
        if let Some(idx) = self.index_of(from) {
            self.adjacency[idx].push(edge);
        }
    }

    fn insert_vent(&mut self, vent: &Vent) -> Result<(), MalformedMaze> {
        for end in [vent.from, vent.to] {
            if !self.is_in_bounds(end) {
                return Err(MalformedMaze::VentOutOfBounds { from: vent.from, to: vent.to });
            }
        }
        if !is_valid_cost(vent.cost) {
            return Err(MalformedMaze::InvalidVentCost {
                from: vent.from,
                to: vent.to,
                cost: vent.cost,
            });
        }
        if vent.cost == f64::INFINITY {
            tracing::trace!(from = %vent.from, to = %vent.to, "skipping sealed vent");
            return Ok(());
        }

        match vent.direction {
            VentDirection::OneWay => self.insert_edge(
                vent.from,
                Edge { to: vent.to, cost: vent.cost, kind: EdgeKind::Vent },
            ),
            VentDirection::TwoWay => {
                self.insert_undirected(vent.from, vent.to, vent.cost, EdgeKind::Vent)
            }
        }
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        cell.x() < self.width && cell.y() < self.height
    }

    pub(crate) fn index_of(&self, cell: Cell) -> Option<usize> {
        self.is_in_bounds(cell)
            .then(|| cell.y() as usize * self.width as usize + cell.x() as usize)
    }

    /// Outgoing edges of `cell`; empty for out-of-bounds cells.
    pub fn edges_from(&self, cell: Cell) -> &[Edge] {
        match self.index_of(cell) {
            Some(idx) => self.adjacency[idx].as_slice(),
            None => &[],
        }
    }

    /// The cheapest edge `from -> to`, first inserted on ties.
    pub fn edge_between(&self, from: Cell, to: Cell) -> Option<&Edge> {
        self.edges_from(from)
            .iter()
            .filter(|edge| edge.to == to)
            .fold(None, |best: Option<&Edge>, edge| match best {
                Some(best) if best.cost <= edge.cost => Some(best),
                _ => Some(edge),
            })
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|edges| edges.len()).sum()
    }

    /// Whether a single step `from -> to` is disallowed.
    ///
    /// Adjacent cells are blocked when no grid edge (open or climbable)
    /// joins them. Any other pair is blocked unless a vent carries `from`
    /// to `to`. Staying on the same cell is never blocked.
    pub fn is_movement_blocked(&self, from: Cell, to: Cell) -> bool {
        if from == to {
            return false;
        }
        let adjacent = from.is_adjacent(to);
        !self.edges_from(from).iter().any(|edge| {
            edge.to == to
                && if adjacent { edge.kind.is_grid_move() } else { edge.kind == EdgeKind::Vent }
        })
    }
}

/// Maze data the graph builder cannot turn into non-negative edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MalformedMaze {
    InvalidClimbCost { cell: Cell, neighbour: Cell, cost: f64 },
    InvalidVentCost { from: Cell, to: Cell, cost: f64 },
    VentOutOfBounds { from: Cell, to: Cell },
}

impl fmt::Display for MalformedMaze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidClimbCost { cell, neighbour, cost } => {
                write!(f, "invalid climb cost {cost} on wall between {cell} and {neighbour}")
            }
            Self::InvalidVentCost { from, to, cost } => {
                write!(f, "invalid vent cost {cost} for vent {from} -> {to}")
            }
            Self::VentOutOfBounds { from, to } => {
                write!(f, "vent {from} -> {to} has an endpoint outside the grid")
            }
        }
    }
}

impl std::error::Error for MalformedMaze {}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Cell, Wall};

/// Cost of stepping between two grid-adjacent cells with no wall in between.
pub const MOVE_COST: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    Normal,
    WallClimb,
    Vent,
}

impl EdgeKind {
    /// Grid moves (as opposed to teleports).
    pub fn is_grid_move(self) -> bool {
        matches!(self, Self::Normal | Self::WallClimb)
    }
}

/// An outgoing edge; the source cell is the adjacency slot it is stored in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub to: Cell,
    pub cost: f64,
    pub kind: EdgeKind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct InvalidCost(pub f64);

pub(crate) fn is_valid_cost(cost: f64) -> bool {
    // NaN fails both comparisons.
    cost >= 0.0
}

/// How a wall slot translates into an edge between its two cells.
///
/// `Ok(None)` means the wall is impassable.
pub(crate) fn classify_wall(wall: Wall) -> Result<Option<(EdgeKind, f64)>, InvalidCost> {
    match wall {
        Wall::Open => Ok(Some((EdgeKind::Normal, MOVE_COST))),
        Wall::Climbable(cost) if !is_valid_cost(cost) => Err(InvalidCost(cost)),
        Wall::Climbable(cost) if cost == f64::INFINITY => Ok(None),
        Wall::Climbable(cost) => Ok(Some((EdgeKind::WallClimb, cost))),
        Wall::Blocked => Ok(None),
    }
}

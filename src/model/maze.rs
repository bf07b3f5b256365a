// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::cell::Cell;

/// Classification of a single wall slot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Wall {
    #[default]
    Open,
    /// Passable at the given climbing cost.
    Climbable(f64),
    Blocked,
}

impl Wall {
    /// A climbable wall; an infinite cost collapses to [`Wall::Blocked`].
    pub fn climbable(cost: f64) -> Self {
        if cost == f64::INFINITY {
            Self::Blocked
        } else {
            Self::Climbable(cost)
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// True if any wall stands in the slot, climbable or not.
    pub fn is_present(self) -> bool {
        !self.is_open()
    }

    pub fn is_impassable(self) -> bool {
        match self {
            Self::Open => false,
            Self::Climbable(cost) => cost == f64::INFINITY,
            Self::Blocked => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VentDirection {
    /// Usable from `from` to `to` only.
    OneWay,
    #[default]
    TwoWay,
}

/// A teleport link between two (usually distant) cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Vent {
    pub from: Cell,
    pub to: Cell,
    pub cost: f64,
    #[serde(default)]
    pub direction: VentDirection,
}

impl Vent {
    pub fn two_way(from: Cell, to: Cell, cost: f64) -> Self {
        Self { from, to, cost, direction: VentDirection::TwoWay }
    }

    pub fn one_way(from: Cell, to: Cell, cost: f64) -> Self {
        Self { from, to, cost, direction: VentDirection::OneWay }
    }

    /// True if this vent carries travellers from `from` to `to`.
    pub fn connects(&self, from: Cell, to: Cell) -> bool {
        if self.from == from && self.to == to {
            return true;
        }
        self.direction == VentDirection::TwoWay && self.from == to && self.to == from
    }
}

/// The maze collaborator consumed by the path engine.
///
/// Wall queries are only ever issued for in-bounds coordinates. Errors are
/// passed through to the caller untouched.
pub trait MazeMap {
    type Error: std::error::Error + 'static;

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Wall between `(x, y)` and `(x, y - 1)`.
    fn horizontal_wall(&self, x: u32, y: u32) -> Result<Wall, Self::Error>;

    /// Wall between `(x, y)` and `(x - 1, y)`.
    fn vertical_wall(&self, x: u32, y: u32) -> Result<Wall, Self::Error>;

    fn vents(&self) -> Result<Vec<Vent>, Self::Error> {
        Ok(Vec::new())
    }

    fn has_horizontal_wall(&self, x: u32, y: u32) -> Result<bool, Self::Error> {
        self.horizontal_wall(x, y).map(Wall::is_present)
    }

    fn has_vertical_wall(&self, x: u32, y: u32) -> Result<bool, Self::Error> {
        self.vertical_wall(x, y).map(Wall::is_present)
    }

    fn is_in_bounds(&self, cell: Cell) -> bool {
        cell.x() < self.width() && cell.y() < self.height()
    }
}

impl<M: MazeMap + ?Sized> MazeMap for &M {
    type Error = M::Error;

    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn horizontal_wall(&self, x: u32, y: u32) -> Result<Wall, Self::Error> {
        (**self).horizontal_wall(x, y)
    }

    fn vertical_wall(&self, x: u32, y: u32) -> Result<Wall, Self::Error> {
        (**self).vertical_wall(x, y)
    }

    fn vents(&self) -> Result<Vec<Vent>, Self::Error> {
        (**self).vents()
    }
}

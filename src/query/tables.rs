// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::Cell;

fn slot(width: u32, height: u32, cell: Cell) -> Option<usize> {
    (cell.x() < width && cell.y() < height)
        .then(|| cell.y() as usize * width as usize + cell.x() as usize)
}

/// Best known cumulative cost per cell; unvisited cells hold `+∞`.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceTable {
    width: u32,
    height: u32,
    values: Vec<f64>,
}

impl DistanceTable {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, values: vec![f64::INFINITY; width as usize * height as usize] }
    }

    /// `+∞` for unvisited and out-of-bounds cells.
    pub fn get(&self, cell: Cell) -> f64 {
        slot(self.width, self.height, cell).map_or(f64::INFINITY, |idx| self.values[idx])
    }

    pub fn set(&mut self, cell: Cell, distance: f64) {
        if let Some(idx) = slot(self.width, self.height, cell) {
            self.values[idx] = distance;
        }
    }

    pub fn is_reached(&self, cell: Cell) -> bool {
        self.get(cell) < f64::INFINITY
    }
}

/// The cell each best distance was reached from; absent = unreached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredecessorTable {
    width: u32,
    height: u32,
    links: Vec<Option<Cell>>,
}

impl PredecessorTable {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, links: vec![None; width as usize * height as usize] }
    }

    pub fn get(&self, cell: Cell) -> Option<Cell> {
        slot(self.width, self.height, cell).and_then(|idx| self.links[idx])
    }

    pub fn set(&mut self, cell: Cell, predecessor: Cell) {
        if let Some(idx) = slot(self.width, self.height, cell) {
            self.links[idx] = Some(predecessor);
        }
    }

    /// `width × height`: the longest walk a well-formed chain can need.
    pub fn cell_count(&self) -> usize {
        self.links.len()
    }
}

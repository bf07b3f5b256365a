// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::convert::Infallible;

use super::cell::Cell;
use super::maze::{MazeMap, Vent, Wall};

/// An in-memory maze with dense wall storage.
///
/// Used as the concrete collaborator behind maze documents and in tests.
/// Writes outside the grid are ignored; the setters report whether the slot existed.
#[derive(Debug, Clone, PartialEq)]
pub struct MazeGrid {
    width: u32,
    height: u32,
    horizontal: Vec<Wall>,
    vertical: Vec<Wall>,
    vents: Vec<Vent>,
}

impl MazeGrid {
    /// A grid with no walls and no vents.
    pub fn open(width: u32, height: u32) -> Self {
        let cells = width as usize * height as usize;
        Self {
            width,
            height,
            horizontal: vec![Wall::Open; cells],
            vertical: vec![Wall::Open; cells],
            vents: Vec::new(),
        }
    }

    fn slot(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn set_horizontal_wall(&mut self, x: u32, y: u32, wall: Wall) -> bool {
        match self.slot(x, y) {
            Some(idx) => {
                self.horizontal[idx] = wall;
                true
            }
            None => false,
        }
    }

    pub fn set_vertical_wall(&mut self, x: u32, y: u32, wall: Wall) -> bool {
        match self.slot(x, y) {
            Some(idx) => {
                self.vertical[idx] = wall;
                true
            }
            None => false,
        }
    }

    pub fn add_vent(&mut self, vent: Vent) {
        self.vents.push(vent);
    }

    pub fn with_horizontal_wall(mut self, x: u32, y: u32, wall: Wall) -> Self {
        self.set_horizontal_wall(x, y, wall);
        self
    }

    pub fn with_vertical_wall(mut self, x: u32, y: u32, wall: Wall) -> Self {
        self.set_vertical_wall(x, y, wall);
        self
    }

    pub fn with_vent(mut self, vent: Vent) -> Self {
        self.add_vent(vent);
        self
    }

    pub fn vent_list(&self) -> &[Vent] {
        &self.vents
    }

    /// Non-open wall slots as `(x, y, wall)`, row-major.
    pub fn horizontal_walls(&self) -> impl Iterator<Item = (u32, u32, Wall)> + '_ {
        self.present_walls(&self.horizontal)
    }

    pub fn vertical_walls(&self) -> impl Iterator<Item = (u32, u32, Wall)> + '_ {
        self.present_walls(&self.vertical)
    }

    fn present_walls<'a>(
        &'a self,
        slots: &'a [Wall],
    ) -> impl Iterator<Item = (u32, u32, Wall)> + 'a {
        let width = self.width.max(1) as usize;
        slots.iter().enumerate().filter(|(_, wall)| wall.is_present()).map(move |(idx, wall)| {
            ((idx % width) as u32, (idx / width) as u32, *wall)
        })
    }

    /// Scales every climbable wall cost by `factor`.
    pub fn scale_climb_costs(&mut self, factor: f64) {
        for wall in self.horizontal.iter_mut().chain(self.vertical.iter_mut()) {
            if let Wall::Climbable(cost) = wall {
                *cost *= factor;
            }
        }
    }
}

impl MazeMap for MazeGrid {
    type Error = Infallible;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn horizontal_wall(&self, x: u32, y: u32) -> Result<Wall, Self::Error> {
        Ok(self.slot(x, y).map_or(Wall::Blocked, |idx| self.horizontal[idx]))
    }

    fn vertical_wall(&self, x: u32, y: u32) -> Result<Wall, Self::Error> {
        Ok(self.slot(x, y).map_or(Wall::Blocked, |idx| self.vertical[idx]))
    }

    fn vents(&self) -> Result<Vec<Vent>, Self::Error> {
        Ok(self.vents.clone())
    }
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use mazeroute::model::{Cell, MazeGrid, Vent, Wall};

/// Stable per-slot noise in `0..1024`.
fn mix(x: u32, y: u32, salt: u32) -> u32 {
    let mut h = x.wrapping_mul(0x9E37_79B1) ^ y.wrapping_mul(0x85EB_CA77) ^ salt;
    h ^= h >> 15;
    h = h.wrapping_mul(0x2C1B_3C6D);
    h ^= h >> 12;
    h & 1023
}

#[derive(Debug, Clone, Copy)]
pub enum Case {
    OpenSmall,
    OpenLarge,
    Serpentine,
    ClimbHeavy,
    VentMesh,
}

pub fn open(width: u32, height: u32) -> MazeGrid {
    MazeGrid::open(width, height)
}

/// Rows separated by blocked walls with one gap, alternating sides.
pub fn serpentine(width: u32, height: u32) -> MazeGrid {
    let mut maze = MazeGrid::open(width, height);
    for y in 1..height {
        let gap = if y % 2 == 1 { width - 1 } else { 0 };
        for x in 0..width {
            if x != gap {
                maze.set_horizontal_wall(x, y, Wall::Blocked);
            }
        }
    }
    maze
}

/// Most slots carry a wall; about a third are climbable and a tenth blocked.
pub fn climb_heavy(width: u32, height: u32) -> MazeGrid {
    let mut maze = MazeGrid::open(width, height);
    for y in 0..height {
        for x in 0..width {
            for (salt, vertical) in [(1u32, true), (2u32, false)] {
                let noise = mix(x, y, salt);
                let wall = match noise {
                    0..=99 => Wall::Blocked,
                    100..=449 => Wall::Climbable(0.5 + f64::from(noise % 8) * 0.5),
                    _ => Wall::Open,
                };
                if vertical {
                    maze.set_vertical_wall(x, y, wall);
                } else {
                    maze.set_horizontal_wall(x, y, wall);
                }
            }
        }
    }
    maze
}

/// A climb-heavy maze with a vent from every `stride`-th cell to a distant one.
pub fn vent_mesh(width: u32, height: u32, stride: u32) -> MazeGrid {
    let mut maze = climb_heavy(width, height);
    let stride = stride.max(1);
    for y in (0..height).step_by(stride as usize) {
        for x in (0..width).step_by(stride as usize) {
            let to = Cell::new(mix(x, y, 3) % width, mix(x, y, 4) % height);
            let cost = 1.0 + f64::from(mix(x, y, 5) % 16);
            let vent = if mix(x, y, 6) % 2 == 0 {
                Vent::two_way(Cell::new(x, y), to, cost)
            } else {
                Vent::one_way(Cell::new(x, y), to, cost)
            };
            maze.add_vent(vent);
        }
    }
    maze
}

pub fn fixture(case: Case) -> MazeGrid {
    match case {
        Case::OpenSmall => open(16, 16),
        Case::OpenLarge => open(256, 256),
        Case::Serpentine => serpentine(64, 64),
        Case::ClimbHeavy => climb_heavy(128, 128),
        Case::VentMesh => vent_mesh(128, 128, 8),
    }
}

/// Opposite corners of the grid.
pub fn corners(maze: &MazeGrid) -> (Cell, Cell) {
    use mazeroute::model::MazeMap as _;

    (Cell::new(0, 0), Cell::new(maze.width() - 1, maze.height() - 1))
}

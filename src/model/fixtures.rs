// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::cell::Cell;
use super::maze::{Vent, Wall};
use super::maze_grid::MazeGrid;

/// 3x1 corridor with an impassable wall between `(0,0)` and `(1,0)`.
pub(crate) fn blocked_corridor() -> MazeGrid {
    MazeGrid::open(3, 1).with_vertical_wall(1, 0, Wall::Blocked)
}

/// Same wall as [`blocked_corridor`] but with a second row to walk around it.
pub(crate) fn blocked_corridor_with_detour() -> MazeGrid {
    MazeGrid::open(3, 2).with_vertical_wall(1, 0, Wall::Blocked)
}

/// Open 3x3 grid with a two-way vent between opposite corners.
pub(crate) fn open_with_corner_vent() -> MazeGrid {
    MazeGrid::open(3, 3).with_vent(Vent::two_way(Cell::new(0, 0), Cell::new(2, 2), 0.5))
}

/// 2x2 grid with a wall climbable at 3.0 between `(0,1)` and `(0,0)`.
/// From `(0,1)` to `(1,0)` the climb route costs 4.0, the open detour
/// through `(1,1)` costs 2.0.
///
/// ```text
///  y=1  (0,1)  (1,1)
///        ~~~
///  y=0  (0,0)  (1,0)
/// ```
pub(crate) fn climb_or_detour() -> MazeGrid {
    MazeGrid::open(2, 2).with_horizontal_wall(0, 1, Wall::Climbable(3.0))
}

/// 3x3 grid whose middle row is sealed except for a climbable slot at `x=1`.
pub(crate) fn climbable_barrier(climb_cost: f64) -> MazeGrid {
    MazeGrid::open(3, 3)
        .with_horizontal_wall(0, 1, Wall::Blocked)
        .with_horizontal_wall(1, 1, Wall::Climbable(climb_cost))
        .with_horizontal_wall(2, 1, Wall::Blocked)
}

/// Serpentine maze: rows alternate their open end so every route snakes.
pub(crate) fn serpentine(width: u32, height: u32) -> MazeGrid {
    let mut grid = MazeGrid::open(width, height);
    for y in 1..height {
        let gap = if y % 2 == 1 { width - 1 } else { 0 };
        for x in 0..width {
            if x != gap {
                grid.set_horizontal_wall(x, y, Wall::Blocked);
            }
        }
    }
    grid
}

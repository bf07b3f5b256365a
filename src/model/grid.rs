// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::cell::Cell;
use super::maze::{MazeMap, Vent, Wall};

/// A per-query snapshot of the maze collaborator.
///
/// Every in-bounds wall slot and the vent list are read exactly once when the
/// snapshot is captured, so repeated questions during one query always get the
/// same answer even if the collaborator changes underneath.
#[derive(Debug, Clone, PartialEq)]
pub struct GridModel {
    width: u32,
    height: u32,
    horizontal: Vec<Wall>,
    vertical: Vec<Wall>,
    vents: Vec<Vent>,
}

impl GridModel {
    pub fn capture<M: MazeMap + ?Sized>(map: &M) -> Result<Self, M::Error> {
        let width = map.width();
        let height = map.height();
        let cell_count = width as usize * height as usize;

        let mut horizontal = Vec::with_capacity(cell_count);
        let mut vertical = Vec::with_capacity(cell_count);
        for y in 0..height {
            for x in 0..width {
                horizontal.push(map.horizontal_wall(x, y)?);
                vertical.push(map.vertical_wall(x, y)?);
            }
        }
        let vents = map.vents()?;

        tracing::trace!(width, height, vents = vents.len(), "captured grid snapshot");

        Ok(Self { width, height, horizontal, vertical, vents })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        cell.x() < self.width && cell.y() < self.height
    }

    /// Row-major index of an in-bounds cell.
    pub(crate) fn index_of(&self, cell: Cell) -> Option<usize> {
        self.is_in_bounds(cell)
            .then(|| cell.y() as usize * self.width as usize + cell.x() as usize)
    }

    /// Cells in row-major order: `y` ascending, then `x` ascending.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }

    pub fn horizontal_wall(&self, x: u32, y: u32) -> Option<Wall> {
        self.index_of(Cell::new(x, y)).map(|idx| self.horizontal[idx])
    }

    pub fn vertical_wall(&self, x: u32, y: u32) -> Option<Wall> {
        self.index_of(Cell::new(x, y)).map(|idx| self.vertical[idx])
    }

    /// Out-of-bounds slots report a wall: the grid edge.
    pub fn has_horizontal_wall(&self, x: u32, y: u32) -> bool {
        self.horizontal_wall(x, y).map_or(true, Wall::is_present)
    }

    pub fn has_vertical_wall(&self, x: u32, y: u32) -> bool {
        self.vertical_wall(x, y).map_or(true, Wall::is_present)
    }

    pub fn vents(&self) -> &[Vent] {
        &self.vents
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell as CountCell;
    use std::convert::Infallible;

    use super::GridModel;
    use crate::model::{Cell, MazeMap, Vent, Wall};

    struct CountingMaze {
        width: u32,
        height: u32,
        calls: CountCell<usize>,
    }

    impl MazeMap for CountingMaze {
        type Error = Infallible;

        fn width(&self) -> u32 {
            self.width
        }

        fn height(&self) -> u32 {
            self.height
        }

        fn horizontal_wall(&self, x: u32, y: u32) -> Result<Wall, Self::Error> {
            assert!(x < self.width && y < self.height, "out-of-bounds query ({x},{y})");
            self.calls.set(self.calls.get() + 1);
            Ok(if y == 1 { Wall::Blocked } else { Wall::Open })
        }

        fn vertical_wall(&self, x: u32, y: u32) -> Result<Wall, Self::Error> {
            assert!(x < self.width && y < self.height, "out-of-bounds query ({x},{y})");
            self.calls.set(self.calls.get() + 1);
            Ok(if x == 2 { Wall::Climbable(2.5) } else { Wall::Open })
        }

        fn vents(&self) -> Result<Vec<Vent>, Self::Error> {
            Ok(vec![Vent::one_way(Cell::new(0, 0), Cell::new(2, 1), 4.0)])
        }
    }

    #[test]
    fn capture_reads_each_slot_once_and_answers_consistently() {
        let maze = CountingMaze { width: 3, height: 2, calls: CountCell::new(0) };
        let grid = GridModel::capture(&maze).unwrap();
        assert_eq!(maze.calls.get(), 12);

        assert!(grid.has_horizontal_wall(0, 1));
        assert!(!grid.has_horizontal_wall(0, 0));
        assert_eq!(grid.vertical_wall(2, 0), Some(Wall::Climbable(2.5)));
        assert!(grid.has_vertical_wall(2, 1));
        assert!(!grid.has_vertical_wall(1, 1));
        assert_eq!(grid.vents().len(), 1);

        // No further collaborator traffic.
        let _ = grid.has_vertical_wall(2, 0);
        assert_eq!(maze.calls.get(), 12);
    }

    #[test]
    fn bounds_and_row_major_cells() {
        let maze = CountingMaze { width: 2, height: 2, calls: CountCell::new(0) };
        let grid = GridModel::capture(&maze).unwrap();
        assert!(grid.is_in_bounds(Cell::new(1, 1)));
        assert!(!grid.is_in_bounds(Cell::new(2, 0)));
        assert!(!grid.is_in_bounds(Cell::new(0, 2)));
        assert_eq!(grid.horizontal_wall(5, 5), None);
        assert!(grid.has_vertical_wall(9, 0));

        let cells = grid.cells().collect::<Vec<_>>();
        assert_eq!(
            cells,
            vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(0, 1), Cell::new(1, 1)]
        );
        assert_eq!(grid.index_of(Cell::new(1, 1)), Some(3));
        assert_eq!(grid.cell_count(), 4);
    }
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Maze data model.
//!
//! Cells, the wall/vent vocabulary, the collaborator trait, and the per-query grid snapshot.

pub mod cell;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod grid;
pub mod maze;
pub mod maze_grid;

pub use cell::{Cell, ParseCellError};
pub use grid::GridModel;
pub use maze::{MazeMap, Vent, VentDirection, Wall};
pub use maze_grid::MazeGrid;

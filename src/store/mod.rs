// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence for mazes on disk.
//!
//! Mazes are stored as a single JSON document listing the grid size, the present walls and the
//! vents. Loading validates the document before any routing sees it.

pub mod maze_file;

pub use maze_file::{
    load_maze, parse_maze, save_maze, MazeDoc, MazeDocError, StoreError, WallEntry, WallKind,
};

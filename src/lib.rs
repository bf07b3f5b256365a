// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mazeroute: weighted shortest paths through wall-and-vent grid mazes.
//!
//! A maze is a `width x height` grid of cells. Each cell owns the wall to its left and the wall
//! below it; walls are open, climbable at a cost, or blocked. Vents add shortcuts between
//! arbitrary cells. [`query::find_shortest_path`] snapshots a [`model::MazeMap`], builds the
//! movement graph and runs a deterministic Dijkstra search over it.

pub mod graph;
pub mod model;
pub mod query;
pub mod store;

pub use model::{Cell, MazeGrid, MazeMap, Vent, VentDirection, Wall};
pub use query::{find_shortest_path, is_movement_blocked, Path, RouteError};

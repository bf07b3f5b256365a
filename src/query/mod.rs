// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over mazes.
//!
//! Shortest routes (Dijkstra + predecessor walk) and single-step movement checks.

pub mod blocking;
pub mod error;
pub mod reconstruct;
pub mod route;
pub mod solver;
pub mod tables;

pub use blocking::is_movement_blocked;
pub use error::RouteError;
pub use reconstruct::{reconstruct_path, BrokenPredecessorChain};
pub use route::{
    find_shortest_path, find_shortest_path_with, find_shortest_paths, shortest_path_in, Path,
};
pub use solver::{solve, ExpansionLimitReached, ShortestPaths, SolveOptions};
pub use tables::{DistanceTable, PredecessorTable};

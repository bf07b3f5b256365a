// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Weighted maze graph.
//!
//! Turns a grid snapshot into per-cell edge lists: open moves, wall climbs, and vents.

pub mod build;
pub mod edge;

pub use build::{Graph, MalformedMaze};
pub use edge::{Edge, EdgeKind, MOVE_COST};

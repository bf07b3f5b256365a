// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::model::{Cell, MazeGrid, Vent, Wall};

/// On-disk maze format.
///
/// Only present walls are listed. A wall entry without `climb_cost` is impassable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MazeDoc {
    pub width: u32,
    pub height: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub horizontal_walls: Vec<WallEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vertical_walls: Vec<WallEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vents: Vec<Vent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WallEntry {
    pub x: u32,
    pub y: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub climb_cost: Option<f64>,
}

impl WallEntry {
    fn wall(self) -> Wall {
        match self.climb_cost {
            Some(cost) => Wall::climbable(cost),
            None => Wall::Blocked,
        }
    }

    fn from_wall(kind: WallKind, x: u32, y: u32, wall: Wall) -> Result<Self, MazeDocError> {
        let climb_cost = match wall {
            Wall::Climbable(cost) if !(cost >= 0.0) => {
                return Err(MazeDocError::InvalidClimbCost { kind, x, y, cost });
            }
            Wall::Climbable(cost) if cost.is_finite() => Some(cost),
            _ => None,
        };
        Ok(Self { x, y, climb_cost })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallKind {
    Horizontal,
    Vertical,
}

impl fmt::Display for WallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => f.write_str("horizontal"),
            Self::Vertical => f.write_str("vertical"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MazeDocError {
    EmptyGrid { width: u32, height: u32 },
    WallOutOfBounds { kind: WallKind, x: u32, y: u32 },
    DuplicateWall { kind: WallKind, x: u32, y: u32 },
    InvalidClimbCost { kind: WallKind, x: u32, y: u32, cost: f64 },
    VentOutOfBounds { from: Cell, to: Cell },
    InvalidVentCost { from: Cell, to: Cell, cost: f64 },
}

impl fmt::Display for MazeDocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { width, height } => {
                write!(f, "maze must be at least 1x1, got {width}x{height}")
            }
            Self::WallOutOfBounds { kind, x, y } => {
                write!(f, "{kind} wall at ({x},{y}) is outside the grid")
            }
            Self::DuplicateWall { kind, x, y } => {
                write!(f, "{kind} wall at ({x},{y}) is listed more than once")
            }
            Self::InvalidClimbCost { kind, x, y, cost } => {
                write!(f, "{kind} wall at ({x},{y}) has invalid climb cost {cost}")
            }
            Self::VentOutOfBounds { from, to } => {
                write!(f, "vent {from} -> {to} has an endpoint outside the grid")
            }
            Self::InvalidVentCost { from, to, cost } => {
                write!(f, "vent {from} -> {to} has invalid cost {cost}")
            }
        }
    }
}

impl std::error::Error for MazeDocError {}

impl MazeDoc {
    /// Document form of `grid`.
    ///
    /// Sealed vents (infinite cost) carry no edge and are left out, as JSON has no
    /// encoding for infinity. NaN or negative costs are rejected.
    pub fn from_grid(grid: &MazeGrid) -> Result<Self, MazeDocError> {
        use crate::model::MazeMap as _;

        let horizontal_walls = grid
            .horizontal_walls()
            .map(|(x, y, wall)| WallEntry::from_wall(WallKind::Horizontal, x, y, wall))
            .collect::<Result<Vec<_>, _>>()?;
        let vertical_walls = grid
            .vertical_walls()
            .map(|(x, y, wall)| WallEntry::from_wall(WallKind::Vertical, x, y, wall))
            .collect::<Result<Vec<_>, _>>()?;

        let mut vents = Vec::with_capacity(grid.vent_list().len());
        for vent in grid.vent_list() {
            if !(vent.cost >= 0.0) {
                return Err(MazeDocError::InvalidVentCost {
                    from: vent.from,
                    to: vent.to,
                    cost: vent.cost,
                });
            }
            if vent.cost == f64::INFINITY {
                tracing::trace!(from = %vent.from, to = %vent.to, "dropping sealed vent");
                continue;
            }
            vents.push(*vent);
        }

        Ok(Self {
            width: grid.width(),
            height: grid.height(),
            horizontal_walls,
            vertical_walls,
            vents,
        })
    }

    /// Validates the document and expands it into a dense grid.
    pub fn to_grid(&self) -> Result<MazeGrid, MazeDocError> {
        if self.width == 0 || self.height == 0 {
            return Err(MazeDocError::EmptyGrid { width: self.width, height: self.height });
        }

        let mut grid = MazeGrid::open(self.width, self.height);
        for (kind, entries) in [
            (WallKind::Horizontal, &self.horizontal_walls),
            (WallKind::Vertical, &self.vertical_walls),
        ] {
            let mut seen = BTreeSet::new();
            for entry in entries {
                let (x, y) = (entry.x, entry.y);
                if x >= self.width || y >= self.height {
                    return Err(MazeDocError::WallOutOfBounds { kind, x, y });
                }
                if !seen.insert((x, y)) {
                    return Err(MazeDocError::DuplicateWall { kind, x, y });
                }
                if let Some(cost) = entry.climb_cost {
                    if !(cost >= 0.0) {
                        return Err(MazeDocError::InvalidClimbCost { kind, x, y, cost });
                    }
                }
                match kind {
                    WallKind::Horizontal => grid.set_horizontal_wall(x, y, entry.wall()),
                    WallKind::Vertical => grid.set_vertical_wall(x, y, entry.wall()),
                };
            }
        }

        for vent in &self.vents {
            let in_bounds = |cell: Cell| cell.x() < self.width && cell.y() < self.height;
            if !in_bounds(vent.from) || !in_bounds(vent.to) {
                return Err(MazeDocError::VentOutOfBounds { from: vent.from, to: vent.to });
            }
            if !(vent.cost >= 0.0) {
                return Err(MazeDocError::InvalidVentCost {
                    from: vent.from,
                    to: vent.to,
                    cost: vent.cost,
                });
            }
            grid.add_vent(*vent);
        }

        Ok(grid)
    }
}

#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
    InvalidMaze { path: PathBuf, source: MazeDocError },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
            Self::InvalidMaze { path, source } => write!(f, "invalid maze in {path:?}: {source}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::InvalidMaze { source, .. } => Some(source),
        }
    }
}

pub fn parse_maze(json: &str) -> Result<MazeDoc, serde_json::Error> {
    serde_json::from_str(json)
}

pub fn load_maze(path: impl AsRef<Path>) -> Result<MazeGrid, StoreError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .map_err(|source| StoreError::Io { path: path.to_path_buf(), source })?;
    let doc = parse_maze(&raw)
        .map_err(|source| StoreError::Json { path: path.to_path_buf(), source })?;
    let grid = doc
        .to_grid()
        .map_err(|source| StoreError::InvalidMaze { path: path.to_path_buf(), source })?;

    tracing::debug!(
        ?path,
        width = doc.width,
        height = doc.height,
        vents = doc.vents.len(),
        "loaded maze"
    );
    Ok(grid)
}

/// Writes `grid` as pretty JSON via a temp file renamed into place.
pub fn save_maze(path: impl AsRef<Path>, grid: &MazeGrid) -> Result<(), StoreError> {
    let path = path.as_ref();
    let doc = MazeDoc::from_grid(grid)
        .map_err(|source| StoreError::InvalidMaze { path: path.to_path_buf(), source })?;
    let mut json = serde_json::to_string_pretty(&doc)
        .map_err(|source| StoreError::Json { path: path.to_path_buf(), source })?;
    json.push('\n');

    let Some(file_name) = path.file_name() else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
        });
    };
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));

    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
    let tmp_path = parent.join(format!(
        ".mazeroute.tmp.{}.{}.{nanos}",
        file_name.to_string_lossy(),
        std::process::id()
    ));

    fs::write(&tmp_path, json.as_bytes())
        .map_err(|source| StoreError::Io { path: tmp_path.clone(), source })?;
    if let Err(source) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io { path: path.to_path_buf(), source });
    }
    Ok(())
}

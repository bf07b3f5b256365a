// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A grid coordinate, the unit of position in a maze.
///
/// Cells are ordered by `x` first and `y` second. The solver relies on this
/// order to pop equal-cost frontier entries reproducibly, so the field order
/// of the derive is load-bearing.
///
/// Serialized as a two-element array `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct Cell {
    x: u32,
    y: u32,
}

impl Cell {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    pub const fn x(self) -> u32 {
        self.x
    }

    pub const fn y(self) -> u32 {
        self.y
    }

    /// True when `other` shares an edge with `self` (diagonals excluded).
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }

    pub(crate) fn left(self) -> Option<Cell> {
        self.x.checked_sub(1).map(|x| Cell::new(x, self.y))
    }

    pub(crate) fn down(self) -> Option<Cell> {
        self.y.checked_sub(1).map(|y| Cell::new(self.x, y))
    }
}

impl From<(u32, u32)> for Cell {
    fn from((x, y): (u32, u32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Cell> for (u32, u32) {
    fn from(cell: Cell) -> Self {
        (cell.x, cell.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Parses `x,y` (whitespace around either number is ignored; surrounding
/// parentheses are accepted so `Display` output parses back).
impl FromStr for Cell {
    type Err = ParseCellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        let (x, y) = inner.split_once(',').ok_or(ParseCellError::MissingComma)?;
        let x = x.trim().parse::<u32>().map_err(|_| ParseCellError::InvalidCoordinate {
            axis: 'x',
            value: x.trim().to_owned(),
        })?;
        let y = y.trim().parse::<u32>().map_err(|_| ParseCellError::InvalidCoordinate {
            axis: 'y',
            value: y.trim().to_owned(),
        })?;
        Ok(Self::new(x, y))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCellError {
    MissingComma,
    InvalidCoordinate { axis: char, value: String },
}

impl fmt::Display for ParseCellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingComma => f.write_str("cell must be written as <x>,<y>"),
            Self::InvalidCoordinate { axis, value } => {
                write!(f, "invalid {axis} coordinate {value:?}")
            }
        }
    }
}

impl std::error::Error for ParseCellError {}

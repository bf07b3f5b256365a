// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::convert::Infallible;
use std::fmt;

use super::reconstruct::BrokenPredecessorChain;
use super::solver::ExpansionLimitReached;
use crate::graph::MalformedMaze;
use crate::model::Cell;

/// Failure of a path or movement query.
///
/// An unreachable goal is not an error; it is an empty [`Path`](super::Path).
/// `E` is the maze collaborator's own error type, passed through untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteError<E = Infallible> {
    OutOfBounds {
        field: &'static str,
        cell: Cell,
        width: u32,
        height: u32,
    },
    Maze(E),
    MalformedMaze(MalformedMaze),
    BrokenPredecessorChain {
        goal: Cell,
        steps: usize,
    },
    ExpansionLimit {
        limit: usize,
    },
}

impl<E> RouteError<E> {
    pub(crate) fn check_in_bounds(
        field: &'static str,
        cell: Cell,
        width: u32,
        height: u32,
    ) -> Result<(), Self> {
        if cell.x() < width && cell.y() < height {
            Ok(())
        } else {
            Err(Self::OutOfBounds { field, cell, width, height })
        }
    }
}

impl RouteError {
    /// Re-types an error raised without any collaborator involvement.
    pub fn widen<E>(self) -> RouteError<E> {
        match self {
            Self::OutOfBounds { field, cell, width, height } => {
                RouteError::OutOfBounds { field, cell, width, height }
            }
            Self::Maze(never) => match never {},
            Self::MalformedMaze(err) => RouteError::MalformedMaze(err),
            Self::BrokenPredecessorChain { goal, steps } => {
                RouteError::BrokenPredecessorChain { goal, steps }
            }
            Self::ExpansionLimit { limit } => RouteError::ExpansionLimit { limit },
        }
    }
}

impl<E> From<MalformedMaze> for RouteError<E> {
    fn from(err: MalformedMaze) -> Self {
        Self::MalformedMaze(err)
    }
}

impl<E> From<BrokenPredecessorChain> for RouteError<E> {
    fn from(err: BrokenPredecessorChain) -> Self {
        Self::BrokenPredecessorChain { goal: err.goal, steps: err.steps }
    }
}

impl<E> From<ExpansionLimitReached> for RouteError<E> {
    fn from(err: ExpansionLimitReached) -> Self {
        Self::ExpansionLimit { limit: err.limit }
    }
}

impl<E: fmt::Display> fmt::Display for RouteError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { field, cell, width, height } => {
                write!(f, "{field} {cell} is outside the {width}x{height} grid")
            }
            Self::Maze(err) => write!(f, "maze query failed: {err}"),
            Self::MalformedMaze(err) => write!(f, "malformed maze: {err}"),
            Self::BrokenPredecessorChain { goal, steps } => write!(
                f,
                "predecessor chain for {goal} is broken after {steps} steps"
            ),
            Self::ExpansionLimit { limit } => {
                write!(f, "search gave up after finalizing {limit} cells")
            }
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for RouteError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Maze(err) => Some(err),
            Self::MalformedMaze(err) => Some(err),
            _ => None,
        }
    }
}

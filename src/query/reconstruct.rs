// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::tables::PredecessorTable;
use crate::model::Cell;

/// The predecessor walk from `goal` hit a missing link or ran longer than
/// the grid has cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrokenPredecessorChain {
    pub goal: Cell,
    pub steps: usize,
}

impl fmt::Display for BrokenPredecessorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "predecessor chain for {} is broken after {} steps", self.goal, self.steps)
    }
}

impl std::error::Error for BrokenPredecessorChain {}

/// Ordered cells `start..=goal`, or an empty vec when `goal` was never reached.
pub fn reconstruct_path(
    previous: &PredecessorTable,
    start: Cell,
    goal: Cell,
) -> Result<Vec<Cell>, BrokenPredecessorChain> {
    if goal == start {
        return Ok(vec![start]);
    }
    if previous.get(goal).is_none() {
        return Ok(Vec::new());
    }

    let limit = previous.cell_count();
    let mut reversed = vec![goal];
    let mut current = goal;
    let mut steps = 0usize;
    while current != start {
        if steps >= limit {
            tracing::warn!(%goal, steps, "predecessor walk exceeded grid size");
            return Err(BrokenPredecessorChain { goal, steps });
        }
        let Some(prev) = previous.get(current) else {
            tracing::warn!(%goal, at = %current, "predecessor chain has a missing link");
            return Err(BrokenPredecessorChain { goal, steps });
        };
        current = prev;
        reversed.push(current);
        steps += 1;
    }
    reversed.reverse();
    Ok(reversed)
}

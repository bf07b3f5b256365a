// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::error::RouteError;
use crate::graph::edge::{classify_wall, is_valid_cost, InvalidCost};
use crate::graph::MalformedMaze;
use crate::model::{Cell, MazeMap};

/// Whether a single step `from -> to` is currently disallowed.
///
/// For grid-adjacent cells only the one wall slot between them is read: the
/// step is blocked iff that wall is impassable. For any other pair the vent
/// list is read and the step is blocked unless a vent carries `from` to `to`.
/// `from == to` is not a move and is never blocked.
pub fn is_movement_blocked<M: MazeMap + ?Sized>(
    from: Cell,
    to: Cell,
    map: &M,
) -> Result<bool, RouteError<M::Error>> {
    let (width, height) = (map.width(), map.height());
    RouteError::<M::Error>::check_in_bounds("from", from, width, height)?;
    RouteError::<M::Error>::check_in_bounds("to", to, width, height)?;

    if from == to {
        return Ok(false);
    }

    if from.is_adjacent(to) {
        // The wall slot belongs to the cell with the larger coordinate.
        let (owner, neighbour) = if from > to { (from, to) } else { (to, from) };
        let wall = if owner.x() != neighbour.x() {
            map.vertical_wall(owner.x(), owner.y())
        } else {
            map.horizontal_wall(owner.x(), owner.y())
        }
        .map_err(RouteError::Maze)?;

        let class = classify_wall(wall).map_err(|InvalidCost(cost)| {
            MalformedMaze::InvalidClimbCost { cell: owner, neighbour, cost }
        })?;
        return Ok(class.is_none());
    }

    for vent in map.vents().map_err(RouteError::Maze)? {
        if !vent.connects(from, to) {
            continue;
        }
        if !is_valid_cost(vent.cost) {
            return Err(MalformedMaze::InvalidVentCost {
                from: vent.from,
                to: vent.to,
                cost: vent.cost,
            }
            .into());
        }
        if vent.cost < f64::INFINITY {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::is_movement_blocked;
    use crate::graph::{Graph, MalformedMaze};
    use crate::model::{fixtures, Cell, GridModel, MazeGrid, Vent, Wall};
    use crate::query::RouteError;

    fn c(x: u32, y: u32) -> Cell {
        Cell::new(x, y)
    }

    #[rstest]
    #[case::open_step(c(1, 0), c(2, 0), false)]
    #[case::blocked_wall(c(0, 0), c(1, 0), true)]
    #[case::blocked_wall_reverse(c(1, 0), c(0, 0), true)]
    #[case::vertical_step(c(0, 0), c(0, 1), false)]
    #[case::not_adjacent(c(0, 0), c(2, 1), true)]
    #[case::diagonal(c(0, 0), c(1, 1), true)]
    #[case::stay(c(1, 1), c(1, 1), false)]
    fn classifies_steps(#[case] from: Cell, #[case] to: Cell, #[case] blocked: bool) {
        let maze = fixtures::blocked_corridor_with_detour();
        assert_eq!(is_movement_blocked(from, to, &maze), Ok(blocked));
    }

    #[test]
    fn climbable_walls_do_not_block() {
        let maze = fixtures::climb_or_detour();
        assert_eq!(is_movement_blocked(c(0, 1), c(0, 0), &maze), Ok(false));
        assert_eq!(is_movement_blocked(c(0, 0), c(0, 1), &maze), Ok(false));
    }

    #[test]
    fn vents_unblock_distant_pairs_in_their_direction_only() {
        let maze = MazeGrid::open(4, 4)
            .with_vent(Vent::one_way(c(0, 0), c(3, 3), 2.0))
            .with_vent(Vent::two_way(c(3, 0), c(0, 3), f64::INFINITY));
        assert_eq!(is_movement_blocked(c(0, 0), c(3, 3), &maze), Ok(false));
        assert_eq!(is_movement_blocked(c(3, 3), c(0, 0), &maze), Ok(true));
        assert_eq!(is_movement_blocked(c(3, 0), c(0, 3), &maze), Ok(true));
    }

    #[test]
    fn rejects_out_of_bounds_and_malformed_walls() {
        let maze = MazeGrid::open(2, 1).with_vertical_wall(1, 0, Wall::Climbable(f64::NAN));
        assert_eq!(
            is_movement_blocked(c(0, 0), c(5, 0), &maze),
            Err(RouteError::OutOfBounds { field: "to", cell: c(5, 0), width: 2, height: 1 })
        );
        assert!(matches!(
            is_movement_blocked(c(0, 0), c(1, 0), &maze),
            Err(RouteError::MalformedMaze(MalformedMaze::InvalidClimbCost { .. }))
        ));
    }

    #[test]
    fn agrees_with_the_built_graph() {
        let maze = fixtures::climbable_barrier(4.0)
            .with_vertical_wall(2, 2, Wall::Blocked)
            .with_vent(Vent::one_way(c(0, 0), c(2, 2), 1.0));
        let graph = Graph::build(&GridModel::capture(&maze).unwrap()).unwrap();
        let cells = (0..3).flat_map(|y| (0..3).map(move |x| c(x, y))).collect::<Vec<_>>();
        for &from in &cells {
            for &to in &cells {
                assert_eq!(
                    is_movement_blocked(from, to, &maze),
                    Ok(graph.is_movement_blocked(from, to)),
                    "{from} -> {to}"
                );
            }
        }
    }
}

//! Breadth-first connectivity analysis over the grid.

use std::collections::VecDeque;

use crate::state::{Grid, Position};

use super::geometry::neighbors4;

/// Per-cell reachability from a flood-fill origin, addressed `[y][x]` like the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reachability {
    rows: Vec<Vec<bool>>,
}

impl Reachability {
    fn unreachable(grid: &Grid) -> Self {
        Self {
            rows: vec![vec![false; grid.width() as usize]; grid.height() as usize],
        }
    }

    pub fn is_reachable(&self, position: Position) -> bool {
        if position.x < 0 || position.y < 0 {
            return false;
        }
        self.rows
            .get(position.y as usize)
            .and_then(|row| row.get(position.x as usize))
            .copied()
            .unwrap_or(false)
    }

    /// Number of reachable cells.
    pub fn count(&self) -> usize {
        self.rows.iter().flatten().filter(|reached| **reached).count()
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<bool>> {
        self.rows
    }

    fn mark(&mut self, position: Position) -> bool {
        match self
            .rows
            .get_mut(position.y as usize)
            .and_then(|row| row.get_mut(position.x as usize))
        {
            Some(slot) if !*slot => {
                *slot = true;
                true
            }
            _ => false,
        }
    }
}

/// Marks every cell reachable from `start` through 4-connected, non-blocked cells.
///
/// Entity tokens do not block reachability. An out-of-bounds or blocked start
/// yields an all-false result with the grid's dimensions.
pub fn flood_fill_reachable(grid: &Grid, start: Position) -> Reachability {
    let mut reachability = Reachability::unreachable(grid);

    match grid.get(start) {
        Some(cell) if !cell.is_blocked() => {}
        _ => return reachability,
    }

    let mut frontier = VecDeque::new();
    reachability.mark(start);
    frontier.push_back(start);

    while let Some(position) = frontier.pop_front() {
        for next in neighbors4(position) {
            let Some(cell) = grid.get(next) else {
                continue;
            };
            if cell.is_blocked() {
                continue;
            }
            if reachability.mark(next) {
                frontier.push_back(next);
            }
        }
    }

    reachability
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Cell, EntityId};

    #[test]
    fn open_grid_is_fully_reachable() {
        let grid = Grid::new(5, 4);
        let reach = flood_fill_reachable(&grid, Position::ORIGIN);
        assert_eq!(reach.count(), 20);
    }

    #[test]
    fn walls_split_regions() {
        let mut grid = Grid::new(3, 3);
        for y in 0..3 {
            grid.set(Position::new(1, y), Cell::Wall);
        }
        let reach = flood_fill_reachable(&grid, Position::ORIGIN);
        assert_eq!(reach.count(), 3);
        assert!(reach.is_reachable(Position::new(0, 2)));
        assert!(!reach.is_reachable(Position::new(1, 1)));
        assert!(!reach.is_reachable(Position::new(2, 0)));
    }

    #[test]
    fn entity_tokens_do_not_block() {
        let mut grid = Grid::new(3, 1);
        grid.set(Position::new(1, 0), Cell::Entity(EntityId(100)));
        let reach = flood_fill_reachable(&grid, Position::ORIGIN);
        assert!(reach.is_reachable(Position::new(2, 0)));
    }

    #[test]
    fn blocked_or_outside_start_is_all_false() {
        let mut grid = Grid::new(4, 3);
        grid.set(Position::ORIGIN, Cell::Hole);

        for start in [Position::ORIGIN, Position::new(9, 9), Position::new(-1, 0)] {
            let reach = flood_fill_reachable(&grid, start);
            assert_eq!(reach.count(), 0);
            assert_eq!(reach.rows().len(), 3);
            assert!(reach.rows().iter().all(|row| row.len() == 4));
        }
    }
}

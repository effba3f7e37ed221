use crate::state::InitializationError;

use super::{Cell, EntityId, Position};

/// Width × height matrix of cells addressed `grid[y][x]`.
///
/// Rows always hold exactly `width` cells and there are exactly `height` rows;
/// [`Grid::from_rows`] (and deserialization) reject anything else.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridRepr", into = "GridRepr")
)]
pub struct Grid {
    width: u32,
    height: u32,
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Creates an all-empty grid.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            rows: vec![vec![Cell::Empty; width as usize]; height as usize],
        }
    }

    /// Wraps explicit rows after checking they match the declared dimensions.
    pub fn from_rows(
        width: u32,
        height: u32,
        rows: Vec<Vec<Cell>>,
    ) -> Result<Self, InitializationError> {
        if rows.len() != height as usize {
            return Err(InitializationError::RowCountMismatch {
                expected: height,
                actual: rows.len(),
            });
        }
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != width as usize)
        {
            return Err(InitializationError::RowWidthMismatch {
                row,
                expected: width,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            rows,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as i64) < self.width as i64
            && (position.y as i64) < self.height as i64
    }

    /// Cell at `position`, or `None` when out of bounds.
    pub fn get(&self, position: Position) -> Option<Cell> {
        if !self.in_bounds(position) {
            return None;
        }
        self.rows
            .get(position.y as usize)?
            .get(position.x as usize)
            .copied()
    }

    /// Overwrites the cell at `position`. Returns `false` (and does nothing) when out of bounds.
    pub fn set(&mut self, position: Position, cell: Cell) -> bool {
        if !self.in_bounds(position) {
            return false;
        }
        match self
            .rows
            .get_mut(position.y as usize)
            .and_then(|row| row.get_mut(position.x as usize))
        {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Row-major iteration over every position and its cell.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, cell)| (Position::new(x as i32, y as i32), *cell))
        })
    }

    /// Position of `entity`, found by a row-major scan (first match wins).
    pub fn find_entity(&self, entity: EntityId) -> Option<Position> {
        self.cells()
            .find(|(_, cell)| *cell == Cell::Entity(entity))
            .map(|(position, _)| position)
    }

    /// Counts the cells matching `predicate`.
    pub fn count(&self, mut predicate: impl FnMut(Cell) -> bool) -> usize {
        self.cells().filter(|(_, cell)| predicate(*cell)).count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// Wire layout of a grid: `{ "width", "height", "grid": [[code, ...], ...] }`.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    width: u32,
    height: u32,
    grid: Vec<Vec<Cell>>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = InitializationError;

    fn try_from(repr: GridRepr) -> Result<Self, Self::Error> {
        Grid::from_rows(repr.width, repr.height, repr.grid)
    }
}

#[cfg(feature = "serde")]
impl From<Grid> for GridRepr {
    fn from(grid: Grid) -> Self {
        Self {
            width: grid.width,
            height: grid.height,
            grid: grid.rows,
        }
    }
}

use std::fmt;

use super::EntityId;

/// Integer that is neither a terrain code nor an entity id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid cell code {0}: expected terrain 0-5 or entity id 10-999")]
pub struct InvalidCellCode(pub u32);

/// Content of a single grid position: fixed terrain or an entity token.
///
/// Serialized as its integer code (`0` empty, `1` water, `2` hole, `3` tree,
/// `4` rock, `5` wall, `10..=999` entity ids) which keeps saved maps in the
/// plain `grid[y][x]` number layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u32", into = "u32")
)]
pub enum Cell {
    #[default]
    Empty,
    Water,
    Hole,
    Tree,
    Rock,
    Wall,
    Entity(EntityId),
}

impl Cell {
    /// Terrain the generator draws obstacles from; water and holes are hand-placed only.
    pub const GENERATED_OBSTACLES: [Cell; 3] = [Cell::Tree, Cell::Rock, Cell::Wall];

    pub const fn code(self) -> u32 {
        match self {
            Cell::Empty => 0,
            Cell::Water => 1,
            Cell::Hole => 2,
            Cell::Tree => 3,
            Cell::Rock => 4,
            Cell::Wall => 5,
            Cell::Entity(id) => id.0,
        }
    }

    pub fn from_code(code: u32) -> Result<Self, InvalidCellCode> {
        let cell = match code {
            0 => Cell::Empty,
            1 => Cell::Water,
            2 => Cell::Hole,
            3 => Cell::Tree,
            4 => Cell::Rock,
            5 => Cell::Wall,
            other if EntityId(other).is_valid() => Cell::Entity(EntityId(other)),
            other => return Err(InvalidCellCode(other)),
        };
        Ok(cell)
    }

    /// Terrain that can never be entered: water, hole, tree, rock and wall.
    pub const fn is_blocked(self) -> bool {
        matches!(
            self,
            Cell::Water | Cell::Hole | Cell::Tree | Cell::Rock | Cell::Wall
        )
    }

    /// Holds an entity token.
    pub const fn is_occupied(self) -> bool {
        matches!(self, Cell::Entity(_))
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Free to move or spawn into.
    pub const fn is_free(self) -> bool {
        !self.is_blocked() && !self.is_occupied()
    }

    pub const fn entity(self) -> Option<EntityId> {
        match self {
            Cell::Entity(id) => Some(id),
            _ => None,
        }
    }
}

impl TryFrom<u32> for Cell {
    type Error = InvalidCellCode;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Cell::from_code(code)
    }
}

impl From<Cell> for u32 {
    fn from(cell: Cell) -> Self {
        cell.code()
    }
}

impl From<EntityId> for Cell {
    fn from(id: EntityId) -> Self {
        Cell::Entity(id)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => f.write_str("empty"),
            Cell::Water => f.write_str("water"),
            Cell::Hole => f.write_str("hole"),
            Cell::Tree => f.write_str("tree"),
            Cell::Rock => f.write_str("rock"),
            Cell::Wall => f.write_str("wall"),
            Cell::Entity(id) => write!(f, "entity {id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terrain_codes_are_stable() {
        for code in 0..=5 {
            assert_eq!(Cell::from_code(code).map(Cell::code), Ok(code));
        }
        assert_eq!(Cell::from_code(57), Ok(Cell::Entity(EntityId(57))));
        assert_eq!(Cell::from_code(6), Err(InvalidCellCode(6)));
        assert_eq!(Cell::from_code(9), Err(InvalidCellCode(9)));
        assert_eq!(Cell::from_code(1000), Err(InvalidCellCode(1000)));
    }

    #[test]
    fn classification() {
        assert!(!Cell::Empty.is_blocked());
        assert!(!Cell::Empty.is_occupied());
        for blocker in [Cell::Water, Cell::Hole, Cell::Tree, Cell::Rock, Cell::Wall] {
            assert!(blocker.is_blocked());
            assert!(!blocker.is_occupied());
            assert!(!blocker.is_free());
        }
        let token = Cell::Entity(EntityId(100));
        assert!(token.is_occupied());
        assert!(!token.is_blocked());
        assert!(!token.is_free());
    }
}

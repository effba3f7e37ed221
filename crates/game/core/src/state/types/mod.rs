pub mod cell;
pub mod common;
pub mod grid;
pub mod registry;
pub mod sheets;

pub use cell::{Cell, InvalidCellCode};
pub use common::{EntityId, EntityKind, Position};
pub use grid::Grid;
pub use registry::EntityRegistry;
pub use sheets::{CharacterSheet, EntitySheet, MonsterSheet, Sheets, Stats};

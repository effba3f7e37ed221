use std::fmt;

use crate::config::GameConfig;

/// Identifier of a character or monster token.
///
/// The id doubles as the grid cell value of the token: characters occupy
/// `10..=99` (slot = id − 10) and monsters `100..=999` (slot = id − 100).
/// Raw values outside both ranges are representable so request layers can pass
/// arbitrary input through; they simply never match anything on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl EntityId {
    /// Identifier of the character stored at `slot`, if the slot fits the id range.
    pub fn character(slot: usize) -> Option<Self> {
        Self::from_slot(slot, GameConfig::CHARACTER_ID_BASE, GameConfig::CHARACTER_ID_MAX)
    }

    /// Identifier of the monster stored at `slot`, if the slot fits the id range.
    pub fn monster(slot: usize) -> Option<Self> {
        Self::from_slot(slot, GameConfig::MONSTER_ID_BASE, GameConfig::MONSTER_ID_MAX)
    }

    fn from_slot(slot: usize, base: u32, max: u32) -> Option<Self> {
        let slot = u32::try_from(slot).ok()?;
        let id = base.checked_add(slot)?;
        (id <= max).then_some(Self(id))
    }

    /// Range the id falls into, or `None` for values that are not entity ids.
    pub const fn kind(self) -> Option<EntityKind> {
        match self.0 {
            GameConfig::CHARACTER_ID_BASE..=GameConfig::CHARACTER_ID_MAX => {
                Some(EntityKind::Character)
            }
            GameConfig::MONSTER_ID_BASE..=GameConfig::MONSTER_ID_MAX => Some(EntityKind::Monster),
            _ => None,
        }
    }

    /// Zero-based index into the matching sheet list.
    pub fn slot(self) -> Option<usize> {
        let base = match self.kind()? {
            EntityKind::Character => GameConfig::CHARACTER_ID_BASE,
            EntityKind::Monster => GameConfig::MONSTER_ID_BASE,
        };
        usize::try_from(self.0 - base).ok()
    }

    #[inline]
    pub const fn is_character(self) -> bool {
        matches!(self.kind(), Some(EntityKind::Character))
    }

    #[inline]
    pub const fn is_monster(self) -> bool {
        matches!(self.kind(), Some(EntityKind::Monster))
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.kind().is_some()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The two registries an entity can belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EntityKind {
    Character,
    Monster,
}

/// Discrete grid position expressed in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_map_to_id_ranges() {
        assert_eq!(EntityId::character(0), Some(EntityId(10)));
        assert_eq!(EntityId::character(89), Some(EntityId(99)));
        assert_eq!(EntityId::character(90), None);
        assert_eq!(EntityId::monster(0), Some(EntityId(100)));
        assert_eq!(EntityId::monster(899), Some(EntityId(999)));
        assert_eq!(EntityId::monster(900), None);
    }

    #[test]
    fn kind_and_slot_follow_range() {
        assert_eq!(EntityId(10).kind(), Some(EntityKind::Character));
        assert_eq!(EntityId(42).slot(), Some(32));
        assert_eq!(EntityId(100).kind(), Some(EntityKind::Monster));
        assert_eq!(EntityId(123).slot(), Some(23));
        assert_eq!(EntityId(5).kind(), None);
        assert_eq!(EntityId(1000).slot(), None);
    }
}

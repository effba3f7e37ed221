/// The six-attribute stat block shared by characters and monsters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

/// Player character sheet.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterSheet {
    pub name: String,
    pub class: String,
    pub race: String,
    pub level: u32,
    pub xp: u32,
    pub stats: Stats,
    pub health: i32,
    pub description: String,
}

/// Monster sheet.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterSheet {
    pub kind: String,
    pub stats: Stats,
    pub health: i32,
    pub description: String,
}

/// Character and monster sheets, indexed by slot.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sheets {
    pub characters: Vec<CharacterSheet>,
    pub monsters: Vec<MonsterSheet>,
}

impl Sheets {
    pub fn new(characters: Vec<CharacterSheet>, monsters: Vec<MonsterSheet>) -> Self {
        Self {
            characters,
            monsters,
        }
    }
}

/// Borrowed sheet resolved from an entity id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum EntitySheet<'a> {
    Character(&'a CharacterSheet),
    Monster(&'a MonsterSheet),
}

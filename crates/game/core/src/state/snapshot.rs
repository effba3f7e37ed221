use super::{EntityId, Grid, Sheets};

/// Persisted form of an encounter.
///
/// Serialized (with the `serde` feature) as
/// `{ "map": { "width", "height", "grid" }, "sheets": { "characters", "monsters" },
/// "activeCharacters": [..], "activeMonsters": [..] }` with both id lists sorted.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct EncounterSnapshot {
    pub map: Grid,
    pub sheets: Sheets,
    pub active_characters: Vec<EntityId>,
    pub active_monsters: Vec<EntityId>,
}

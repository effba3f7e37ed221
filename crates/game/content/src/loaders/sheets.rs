//! Character and monster sheet loader.

use std::path::Path;

use game_core::Sheets;

use crate::loaders::{LoadResult, read_file};

/// Loader for `{ "characters": [...], "monsters": [...] }` sheet files.
pub struct SheetsLoader;

impl SheetsLoader {
    pub fn load(path: &Path) -> LoadResult<Sheets> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse sheets JSON {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Sheets> {
        Ok(serde_json::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEETS: &str = r#"{
        "characters": [{
            "name": "Aria", "class": "Ranger", "race": "Elf", "level": 3, "xp": 900,
            "stats": { "strength": 10, "dexterity": 16, "constitution": 12,
                       "intelligence": 11, "wisdom": 14, "charisma": 9 },
            "health": 24, "description": "Scout of the northern woods"
        }],
        "monsters": [{
            "kind": "Goblin",
            "stats": { "strength": 8, "dexterity": 14, "constitution": 10,
                       "intelligence": 10, "wisdom": 8, "charisma": 8 },
            "health": 7, "description": "Small and vicious"
        }]
    }"#;

    #[test]
    fn parses_both_lists() {
        let sheets = SheetsLoader::parse(SHEETS).expect("valid sheets");
        assert_eq!(sheets.characters.len(), 1);
        assert_eq!(sheets.characters[0].stats.dexterity, 16);
        assert_eq!(sheets.monsters[0].kind, "Goblin");
    }

    #[test]
    fn rejects_malformed_sheets() {
        assert!(SheetsLoader::parse(r#"{ "characters": [{ "name": 3 }], "monsters": [] }"#).is_err());
    }
}

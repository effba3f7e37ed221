//! Map data loader.
//!
//! Maps are stored as `{ "width": w, "height": h, "grid": [[code, ...], ...] }`
//! with `grid[y][x]` holding terrain codes or entity ids.

use std::path::Path;

use game_core::Grid;

use crate::loaders::{LoadResult, read_file};

/// Loader for map data from JSON files.
pub struct MapLoader;

impl MapLoader {
    /// Load a map from a JSON file.
    ///
    /// Rows must match the declared dimensions and every value must be a
    /// terrain code or an entity id.
    pub fn load(path: &Path) -> LoadResult<Grid> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map JSON {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Grid> {
        Ok(serde_json::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use game_core::{Cell, EntityId, Position};

    use super::*;

    #[test]
    fn loads_grid_codes() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{ "width": 3, "height": 2, "grid": [[0, 1, 10], [5, 0, 100]] }}"#
        )
        .expect("write map");

        let grid = MapLoader::load(file.path()).expect("valid map");
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(Position::new(1, 0)), Some(Cell::Water));
        assert_eq!(
            grid.get(Position::new(2, 1)),
            Some(Cell::Entity(EntityId(100)))
        );
    }

    #[test]
    fn rejects_ragged_rows_and_unknown_codes() {
        assert!(MapLoader::parse(r#"{ "width": 2, "height": 1, "grid": [[0]] }"#).is_err());
        assert!(MapLoader::parse(r#"{ "width": 1, "height": 2, "grid": [[0]] }"#).is_err());
        assert!(MapLoader::parse(r#"{ "width": 1, "height": 1, "grid": [[7]] }"#).is_err());
    }

    #[test]
    fn missing_file_names_path() {
        let error = MapLoader::load(Path::new("/nonexistent/map.json")).expect_err("missing");
        assert!(error.to_string().contains("/nonexistent/map.json"));
    }
}

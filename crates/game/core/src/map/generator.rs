//! Procedural map generation and initial token placement.
//!
//! Both entry points draw from a caller-supplied [`Rng`] so seeded runs are
//! reproducible. The connectivity repair and the monster retry loop are
//! best-effort: residual unreachable area or a dropped monster is not reported
//! as an error.

use rand::Rng;

use crate::config::GameConfig;
use crate::state::{Cell, EntityId, Grid, Position};

use super::geometry::manhattan;
use super::reachability::flood_fill_reachable;

/// Generates a `width` × `height` map with obstacles placed at `obstacle_density`.
///
/// The 2×2 staging square at the top-left stays open. Each other cell becomes
/// a tree, rock or wall with probability `obstacle_density`. When the
/// unreachable, non-empty cells exceed a fifth of the map area, one repair
/// pass knocks down about half of the walls.
pub fn generate_map<R>(width: u32, height: u32, obstacle_density: f64, rng: &mut R) -> Grid
where
    R: Rng + ?Sized,
{
    let density = if obstacle_density.is_nan() {
        0.0
    } else {
        obstacle_density.clamp(0.0, 1.0)
    };

    let mut grid = Grid::new(width, height);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            if in_staging_area(x, y) || !rng.gen_bool(density) {
                continue;
            }
            grid.set(Position::new(x, y), random_obstacle(rng));
        }
    }

    if needs_repair(&grid) {
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let position = Position::new(x, y);
                if grid.get(position) == Some(Cell::Wall)
                    && rng.gen_bool(GameConfig::WALL_CLEAR_PROBABILITY)
                {
                    grid.set(position, Cell::Empty);
                }
            }
        }
    }

    grid
}

fn in_staging_area(x: i32, y: i32) -> bool {
    x < GameConfig::STAGING_AREA_SIZE && y < GameConfig::STAGING_AREA_SIZE
}

fn random_obstacle<R>(rng: &mut R) -> Cell
where
    R: Rng + ?Sized,
{
    let roll: f64 = rng.gen_range(0.0..1.0);
    if roll < 0.33 {
        Cell::Tree
    } else if roll < 0.66 {
        Cell::Rock
    } else {
        Cell::Wall
    }
}

/// Counts unreachable non-empty cells from the staging origin against the area threshold.
fn needs_repair(grid: &Grid) -> bool {
    let reachability = flood_fill_reachable(grid, Position::ORIGIN);
    let unreachable = grid
        .cells()
        .filter(|(position, cell)| !cell.is_empty() && !reachability.is_reachable(*position))
        .count();
    unreachable as f64 > grid.area() as f64 * GameConfig::REPAIR_UNREACHABLE_RATIO
}

/// Outcome of [`place_entities`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Placement {
    /// Characters written to the grid, in request order.
    pub characters: Vec<(EntityId, Position)>,
    /// Monsters written to the grid, in request order.
    pub monsters: Vec<(EntityId, Position)>,
    /// Ids that found no legal cell.
    pub dropped: Vec<EntityId>,
}

/// Writes character and monster tokens onto `grid`.
///
/// Characters take the first empty cell of the top-left 3×3 block in
/// row-major order; once the block is full the rest are dropped. Monsters are
/// then dropped onto uniformly random empty cells that are not within
/// Manhattan distance 1 of any character, giving up on a monster after
/// [`GameConfig::MONSTER_PLACEMENT_ATTEMPTS`] draws.
pub fn place_entities<R>(
    grid: &mut Grid,
    character_ids: &[EntityId],
    monster_ids: &[EntityId],
    rng: &mut R,
) -> Placement
where
    R: Rng + ?Sized,
{
    let mut placement = Placement::default();

    for &id in character_ids {
        match first_free_start_cell(grid) {
            Some(position) => {
                grid.set(position, Cell::Entity(id));
                placement.characters.push((id, position));
            }
            None => placement.dropped.push(id),
        }
    }

    let characters: Vec<Position> = grid
        .cells()
        .filter(|(_, cell)| cell.entity().is_some_and(EntityId::is_character))
        .map(|(position, _)| position)
        .collect();

    for &id in monster_ids {
        match random_monster_cell(grid, &characters, rng) {
            Some(position) => {
                grid.set(position, Cell::Entity(id));
                placement.monsters.push((id, position));
            }
            None => placement.dropped.push(id),
        }
    }

    placement
}

fn first_free_start_cell(grid: &Grid) -> Option<Position> {
    let block = GameConfig::CHARACTER_START_BLOCK;
    (0..block)
        .flat_map(|y| (0..block).map(move |x| Position::new(x, y)))
        .find(|position| grid.get(*position) == Some(Cell::Empty))
}

fn random_monster_cell<R>(grid: &Grid, characters: &[Position], rng: &mut R) -> Option<Position>
where
    R: Rng + ?Sized,
{
    if grid.width() == 0 || grid.height() == 0 {
        return None;
    }

    for _ in 0..GameConfig::MONSTER_PLACEMENT_ATTEMPTS {
        let position = Position::new(
            rng.gen_range(0..grid.width()) as i32,
            rng.gen_range(0..grid.height()) as i32,
        );
        let near_character = characters
            .iter()
            .any(|character| manhattan(*character, position) <= 1);
        if grid.get(position) == Some(Cell::Empty) && !near_character {
            return Some(position);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::map::flood_fill_reachable;

    fn ids(raw: &[u32]) -> Vec<EntityId> {
        raw.iter().copied().map(EntityId).collect()
    }

    #[test]
    fn zero_density_is_fully_open() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let grid = generate_map(10, 10, 0.0, &mut rng);

        assert_eq!(grid.count(Cell::is_blocked), 0);
        assert_eq!(flood_fill_reachable(&grid, Position::ORIGIN).count(), 100);
    }

    #[test]
    fn staging_area_stays_open() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let grid = generate_map(8, 8, 1.0, &mut rng);

        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(grid.get(Position::new(x, y)), Some(Cell::Empty));
            }
        }
    }

    #[test]
    fn never_generates_water_or_holes() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let grid = generate_map(20, 20, 0.6, &mut rng);

        assert_eq!(
            grid.count(|cell| matches!(cell, Cell::Water | Cell::Hole)),
            0
        );
        assert!(grid.count(Cell::is_blocked) > 0);
    }

    #[test]
    fn dense_maps_get_walls_knocked_down() {
        // Full density leaves 96 obstacles of 100 cells, so the repair pass always runs.
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let grid = generate_map(10, 10, 1.0, &mut rng);
        let obstacles = grid.count(Cell::is_blocked);

        assert!(obstacles < 96, "repair should clear some walls");
        assert!(grid.count(Cell::is_empty) > 4);
    }

    #[test]
    fn generation_is_deterministic_per_seed() {
        let a = generate_map(12, 12, 0.12, &mut ChaCha8Rng::seed_from_u64(42));
        let b = generate_map(12, 12, 0.12, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn characters_fill_start_block_row_major() {
        let mut grid = Grid::new(6, 6);
        grid.set(Position::new(1, 0), Cell::Rock);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let placement = place_entities(&mut grid, &ids(&[10, 11, 12]), &[], &mut rng);

        assert_eq!(
            placement.characters,
            vec![
                (EntityId(10), Position::new(0, 0)),
                (EntityId(11), Position::new(2, 0)),
                (EntityId(12), Position::new(0, 1)),
            ]
        );
        assert!(placement.dropped.is_empty());
    }

    #[test]
    fn characters_beyond_start_block_are_dropped() {
        let mut grid = Grid::new(6, 6);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let requested: Vec<u32> = (10..20).collect();

        let placement = place_entities(&mut grid, &ids(&requested), &[], &mut rng);

        assert_eq!(placement.characters.len(), 9);
        assert_eq!(placement.dropped, vec![EntityId(19)]);
        assert_eq!(grid.find_entity(EntityId(19)), None);
    }

    #[test]
    fn monsters_keep_distance_from_characters() {
        let mut grid = Grid::new(8, 8);
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        let placement = place_entities(
            &mut grid,
            &ids(&[10, 11]),
            &ids(&[100, 101, 102, 103]),
            &mut rng,
        );

        assert_eq!(placement.monsters.len(), 4);
        for (_, monster) in &placement.monsters {
            for (_, character) in &placement.characters {
                assert!(manhattan(*monster, *character) > 1);
            }
        }
    }

    #[test]
    fn monsters_without_room_are_dropped() {
        // Every cell is within distance 1 of the single character or blocked.
        let mut grid = Grid::new(2, 1);
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        let placement = place_entities(&mut grid, &ids(&[10]), &ids(&[100]), &mut rng);

        assert!(placement.monsters.is_empty());
        assert_eq!(placement.dropped, vec![EntityId(100)]);
        assert_eq!(grid.find_entity(EntityId(100)), None);
    }
}

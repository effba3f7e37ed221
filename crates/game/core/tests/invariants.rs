//! Property tests for the grid/registry consistency invariant.

use std::collections::BTreeMap;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use game_core::{
    Cell, CharacterSheet, EncounterSetup, EntityId, GameConfig, GameEngine, GameState, Grid,
    MonsterSheet, Position, Sheets, begin_encounter, flood_fill_reachable,
};

const SIDE: i32 = 6;

#[derive(Clone, Debug)]
enum Op {
    Move { entity: u32, x: i32, y: i32 },
    Replace { attacker: u32, target: u32 },
    SpawnCharacter { index: usize, x: i32, y: i32 },
    SpawnMonster { x: i32, y: i32 },
    Destroy { x: i32, y: i32 },
}

fn coord() -> impl Strategy<Value = i32> {
    -1..=SIDE
}

fn entity() -> impl Strategy<Value = u32> {
    prop_oneof![10u32..16, 100u32..106]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (entity(), coord(), coord()).prop_map(|(entity, x, y)| Op::Move { entity, x, y }),
        (entity(), entity()).prop_map(|(attacker, target)| Op::Replace { attacker, target }),
        (0usize..7, coord(), coord()).prop_map(|(index, x, y)| Op::SpawnCharacter { index, x, y }),
        (coord(), coord()).prop_map(|(x, y)| Op::SpawnMonster { x, y }),
        (coord(), coord()).prop_map(|(x, y)| Op::Destroy { x, y }),
    ]
}

fn sheets() -> Sheets {
    Sheets::new(
        vec![CharacterSheet::default(); 5],
        vec![MonsterSheet::default(); 5],
    )
}

/// Every token appears once and the registries list exactly the tokens on the grid.
fn assert_consistent(state: &GameState) -> Result<(), TestCaseError> {
    let mut seen: BTreeMap<EntityId, usize> = BTreeMap::new();
    for (_, cell) in state.map().cells() {
        if let Some(id) = cell.entity() {
            *seen.entry(id).or_default() += 1;
        }
    }
    prop_assert!(seen.values().all(|count| *count == 1), "duplicate token: {seen:?}");

    let characters: Vec<EntityId> = seen.keys().copied().filter(|id| id.is_character()).collect();
    let monsters: Vec<EntityId> = seen.keys().copied().filter(|id| id.is_monster()).collect();
    prop_assert_eq!(state.active_characters(), characters);
    prop_assert_eq!(state.active_monsters(), monsters);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn operations_preserve_uniqueness(seed in any::<u64>(), ops in prop::collection::vec(op(), 1..60)) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let setup = EncounterSetup { width: SIDE as u32, height: SIDE as u32, obstacle_density: 0.2 };
        let (mut state, _) = begin_encounter(&setup, &GameConfig::default(), sheets(), &mut rng)
            .expect("6x6 is large enough");
        assert_consistent(&state)?;

        for op in ops {
            let before = state.clone();
            let mut engine = GameEngine::new(&mut state);
            let result = match op {
                Op::Move { entity, x, y } => engine.move_entity(EntityId(entity), Position::new(x, y)),
                Op::Replace { attacker, target } => engine.replace(EntityId(attacker), EntityId(target)),
                Op::SpawnCharacter { index, x, y } => engine.spawn_character(index, Position::new(x, y)),
                Op::SpawnMonster { x, y } => engine.spawn_monster_random(Position::new(x, y), &mut rng),
                Op::Destroy { x, y } => engine.destroy_at(Position::new(x, y)),
            };
            if result.is_err() {
                prop_assert_eq!(&state, &before, "rejected operation mutated state");
            }
            assert_consistent(&state)?;
        }
    }

    #[test]
    fn move_and_back_restores_grid(
        x in 0..SIDE, y in 0..SIDE, to_x in 0..SIDE, to_y in 0..SIDE
    ) {
        prop_assume!((x, y) != (to_x, to_y));
        let mut state = GameState::new(Grid::new(SIDE as u32, SIDE as u32), sheets())
            .expect("empty grid");
        let origin = Position::new(x, y);
        GameEngine::new(&mut state).spawn_character(0, origin).expect("free cell");
        let start = state.clone();

        let mut engine = GameEngine::new(&mut state);
        engine.move_entity(EntityId(10), Position::new(to_x, to_y)).expect("free destination");
        engine.move_entity(EntityId(10), origin).expect("origin was vacated");

        prop_assert_eq!(state, start);
    }

    #[test]
    fn spawn_character_on_free_cell(index in 0usize..5, x in 0..SIDE, y in 0..SIDE) {
        let mut state = GameState::new(Grid::new(SIDE as u32, SIDE as u32), sheets())
            .expect("empty grid");
        let position = Position::new(x, y);
        let id = EntityId(10 + index as u32);

        GameEngine::new(&mut state).spawn_character(index, position).expect("free cell");

        prop_assert_eq!(state.cell(position), Some(Cell::Entity(id)));
        prop_assert!(state.registry().contains(id));
    }

    #[test]
    fn water_and_holes_survive_destroy(x in 0..SIDE, y in 0..SIDE, hole in any::<bool>()) {
        let terrain = if hole { Cell::Hole } else { Cell::Water };
        let mut map = Grid::new(SIDE as u32, SIDE as u32);
        map.set(Position::new(x, y), terrain);
        let mut state = GameState::new(map, sheets()).expect("no tokens");

        let result = GameEngine::new(&mut state).destroy_at(Position::new(x, y));

        prop_assert!(result.is_err());
        prop_assert_eq!(state.cell(Position::new(x, y)), Some(terrain));
    }

    #[test]
    fn flood_fill_from_blocked_start_is_empty(width in 1u32..12, height in 1u32..12) {
        let mut map = Grid::new(width, height);
        map.set(Position::ORIGIN, Cell::Rock);

        let reach = flood_fill_reachable(&map, Position::ORIGIN);
        prop_assert_eq!(reach.count(), 0);
        prop_assert_eq!(reach.rows().len(), height as usize);
        prop_assert!(reach.rows().iter().all(|row| row.len() == width as usize));
    }
}

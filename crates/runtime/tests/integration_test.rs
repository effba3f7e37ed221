use game_core::{
    ActionError, ActionOutcome, Cell, CharacterSheet, CharacterUpdate, EncounterSetup, EntityId,
    EntitySheet, GameState, Grid, MonsterSheet, Position, Sheets, StatsUpdate,
};
use runtime::{
    Event, GameStateEvent, InMemorySaveRepo, Runtime, RuntimeConfig, RuntimeError, RuntimeHandle,
    SessionEvent, Topic,
};

fn sheets() -> Sheets {
    let characters = ["Aria", "Borin", "Cyra", "Dain"]
        .into_iter()
        .map(|name| CharacterSheet {
            name: name.to_owned(),
            level: 1,
            health: 10,
            ..CharacterSheet::default()
        })
        .collect();
    let monsters = ["Goblin", "Kobold", "Wolf", "Skeleton", "Bat"]
        .into_iter()
        .map(|kind| MonsterSheet {
            kind: kind.to_owned(),
            health: 6,
            ..MonsterSheet::default()
        })
        .collect();
    Sheets::new(characters, monsters)
}

async fn start(width: u32, height: u32) -> (Runtime, RuntimeHandle) {
    let state = GameState::new(Grid::new(width, height), sheets()).expect("empty grid");
    let runtime = Runtime::builder()
        .config(RuntimeConfig {
            rng_seed: Some(7),
            ..RuntimeConfig::default()
        })
        .initial_state(state)
        .repository(InMemorySaveRepo::new())
        .build()
        .await
        .expect("runtime builds");
    let handle = runtime.handle();
    (runtime, handle)
}

/// Spawn, move, and melee on an open 4×4 board.
#[tokio::test]
async fn four_by_four_scenario() {
    let (runtime, handle) = start(4, 4).await;
    let mut events = handle.subscribe(Topic::GameState);

    handle
        .spawn_character(0, Position::new(0, 0))
        .await
        .expect("spawn character 10");
    handle
        .move_entity(EntityId(10), Position::new(1, 1))
        .await
        .expect("move to (1, 1)");

    let ActionOutcome::Spawned {
        entity: monster, ..
    } = handle
        .spawn_monster(Position::new(3, 3))
        .await
        .expect("spawn monster")
    else {
        panic!("expected a spawn outcome");
    };
    assert!((100..105).contains(&monster.0));

    let error = handle
        .replace(EntityId(10), monster)
        .await
        .expect_err("not adjacent yet");
    assert_eq!(error.error_code(), "NotAdjacent");

    handle
        .move_entity(EntityId(10), Position::new(2, 2))
        .await
        .expect("move to (2, 2)");
    handle
        .move_entity(EntityId(10), Position::new(3, 2))
        .await
        .expect("move to (3, 2)");
    handle
        .replace(EntityId(10), monster)
        .await
        .expect("adjacent attack");

    let state = handle.query_state().await.expect("state");
    assert_eq!(
        state.cell(Position::new(3, 3)),
        Some(Cell::Entity(EntityId(10)))
    );
    assert_eq!(state.cell(Position::new(3, 2)), Some(Cell::Empty));
    assert!(state.active_monsters().is_empty());
    assert_eq!(state.active_characters(), vec![EntityId(10)]);

    // spawn, move and monster spawn precede the rejected attack
    for _ in 0..3 {
        events.recv().await.expect("event");
    }
    assert!(matches!(
        events.recv().await.expect("event"),
        Event::GameState(GameStateEvent::ActionRejected {
            error: ActionError::NotAdjacent { .. },
            ..
        })
    ));

    drop(handle);
    runtime.shutdown().await.expect("clean shutdown");
}

#[tokio::test]
async fn save_and_load_restore_state() {
    let (_runtime, handle) = start(5, 5).await;

    handle
        .spawn_character(1, Position::new(2, 2))
        .await
        .expect("spawn");
    handle.save("camp").await.expect("save");
    let saved = handle.query_state().await.expect("state");

    handle
        .destroy_at(Position::new(2, 2))
        .await
        .expect("destroy character");
    assert!(handle.query_state().await.expect("state").active_characters().is_empty());

    handle.load("camp").await.expect("load");
    assert_eq!(handle.query_state().await.expect("state"), saved);
    assert_eq!(handle.list_saves().expect("list"), vec!["camp"]);

    let error = handle.load("nowhere").await.expect_err("missing save");
    assert!(matches!(error, RuntimeError::SaveNotFound { .. }));
}

#[tokio::test]
async fn restore_rejects_inconsistent_snapshot() {
    let (_runtime, handle) = start(3, 3).await;
    handle
        .spawn_character(0, Position::ORIGIN)
        .await
        .expect("spawn");

    let mut snapshot = handle.snapshot().await.expect("snapshot");
    snapshot.active_monsters.push(EntityId(100));

    let error = handle.restore(snapshot).await.expect_err("stale registry");
    assert!(matches!(error, RuntimeError::InvalidState(_)));
    assert_eq!(
        handle.query_state().await.expect("state").active_characters(),
        vec![EntityId(10)]
    );
}

#[tokio::test]
async fn begin_encounter_keeps_sheets() {
    let (_runtime, handle) = start(4, 4).await;
    let mut session = handle.subscribe(Topic::Session);

    let error = handle
        .begin_encounter(EncounterSetup {
            width: 3,
            ..EncounterSetup::default()
        })
        .await
        .expect_err("too small");
    assert_eq!(error.error_code(), "MapTooSmall");

    let placement = handle
        .begin_encounter(EncounterSetup::default())
        .await
        .expect("default setup");
    assert_eq!(placement.characters.len(), 3);

    let state = handle.query_state().await.expect("state");
    assert_eq!(state.map().width(), 12);
    assert_eq!(state.sheets(), &sheets());
    assert_eq!(state.available_characters(), vec![EntityId(13)]);

    match session.recv().await.expect("session event") {
        Event::Session(SessionEvent::EncounterStarted { characters, .. }) => {
            assert_eq!(characters, vec![EntityId(10), EntityId(11), EntityId(12)]);
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test]
async fn sheets_update_and_dice() {
    let (_runtime, handle) = start(3, 3).await;

    handle
        .update_character(
            EntityId(12),
            CharacterUpdate {
                health: Some(3),
                stats: Some(StatsUpdate {
                    wisdom: Some(15),
                    ..StatsUpdate::default()
                }),
                ..CharacterUpdate::default()
            },
        )
        .await
        .expect("update");

    let state = handle.query_state().await.expect("state");
    match state.entity_sheet(EntityId(12)) {
        Some(EntitySheet::Character(sheet)) => {
            assert_eq!(sheet.name, "Cyra");
            assert_eq!(sheet.health, 3);
            assert_eq!(sheet.stats.wisdom, 15);
        }
        other => panic!("unexpected sheet {other:?}"),
    }

    let error = handle
        .update_character(EntityId(104), CharacterUpdate::default())
        .await
        .expect_err("monster id");
    assert!(matches!(
        error,
        RuntimeError::Action(ActionError::NotACharacterId { .. })
    ));

    let outcome = handle.roll_dice(6, 3, 2).await.expect("3d6+2");
    assert!((5..=20).contains(&outcome.total));

    let error = handle.roll_dice(1, 1, 0).await.expect_err("one-sided die");
    assert_eq!(error.error_code(), "InvalidSides");
}

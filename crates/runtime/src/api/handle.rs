//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! every encounter operation, plus save/load through the configured
//! repository.
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::info;

use game_core::{
    Action, ActionOutcome, CharacterUpdate, DestroyAction, DiceOutcome, DiceRoll, EncounterSetup,
    EncounterSnapshot, EntityId, GameState, MoveAction, Placement, Position, ReplaceAction,
    SpawnCharacterAction, UpdateCharacterAction,
};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, SessionEvent, Topic};
use crate::repository::SaveRepository;
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
    repository: Option<Arc<dyn SaveRepository>>,
}

impl RuntimeHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        event_bus: EventBus,
        repository: Option<Arc<dyn SaveRepository>>,
    ) -> Self {
        Self {
            command_tx,
            event_bus,
            repository,
        }
    }

    /// Sends a command built around a fresh reply channel and awaits the reply.
    async fn request<T>(&self, command: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(command(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Execute an action against the encounter.
    pub async fn execute_action(&self, action: Action) -> Result<ActionOutcome> {
        self.request(|reply| Command::ExecuteAction { action, reply })
            .await?
    }

    pub async fn move_entity(&self, entity: EntityId, destination: Position) -> Result<ActionOutcome> {
        self.execute_action(Action::Move(MoveAction::new(entity, destination)))
            .await
    }

    /// Melee resolution: `attacker` defeats the adjacent `target`.
    pub async fn replace(&self, attacker: EntityId, target: EntityId) -> Result<ActionOutcome> {
        self.execute_action(Action::Replace(ReplaceAction::new(attacker, target)))
            .await
    }

    pub async fn spawn_character(&self, index: usize, position: Position) -> Result<ActionOutcome> {
        self.execute_action(Action::SpawnCharacter(SpawnCharacterAction::new(
            index, position,
        )))
        .await
    }

    pub async fn spawn_monster(&self, position: Position) -> Result<ActionOutcome> {
        self.execute_action(Action::SpawnMonster { position }).await
    }

    pub async fn destroy_at(&self, position: Position) -> Result<ActionOutcome> {
        self.execute_action(Action::Destroy(DestroyAction::new(position)))
            .await
    }

    pub async fn update_character(
        &self,
        entity: EntityId,
        update: CharacterUpdate,
    ) -> Result<ActionOutcome> {
        self.execute_action(Action::UpdateCharacter(UpdateCharacterAction::new(
            entity, update,
        )))
        .await
    }

    /// Query the current game state (read-only snapshot)
    pub async fn query_state(&self) -> Result<GameState> {
        self.request(|reply| Command::QueryState { reply }).await
    }

    /// Capture the current state in its persisted form.
    pub async fn snapshot(&self) -> Result<EncounterSnapshot> {
        self.request(|reply| Command::Snapshot { reply }).await
    }

    /// Replace the current state with `snapshot` after validating it.
    pub async fn restore(&self, snapshot: EncounterSnapshot) -> Result<()> {
        let snapshot = Box::new(snapshot);
        self.request(|reply| Command::Restore { snapshot, reply })
            .await?
    }

    /// Generate a fresh map and seat the starting party and monsters.
    pub async fn begin_encounter(&self, setup: EncounterSetup) -> Result<Placement> {
        self.request(|reply| Command::BeginEncounter { setup, reply })
            .await?
    }

    /// Roll `count` dice with `sides` faces and add `modifier`.
    pub async fn roll_dice(&self, sides: u32, count: u32, modifier: i64) -> Result<DiceOutcome> {
        let roll = DiceRoll::new(sides, count, modifier)?;
        self.request(|reply| Command::RollDice { roll, reply }).await
    }

    fn repository(&self) -> Result<&Arc<dyn SaveRepository>> {
        self.repository
            .as_ref()
            .ok_or(RuntimeError::MissingRepository)
    }

    /// Write the current state to the save called `name`.
    pub async fn save(&self, name: &str) -> Result<()> {
        let repository = self.repository()?;
        let snapshot = self.snapshot().await?;
        repository.save(name, &snapshot)?;

        info!(target: "runtime::handle", save = name, "Encounter saved");
        self.event_bus.publish(SessionEvent::Saved {
            name: name.to_owned(),
        });
        Ok(())
    }

    /// Replace the current state with the save called `name`.
    pub async fn load(&self, name: &str) -> Result<()> {
        let snapshot = self
            .repository()?
            .load(name)?
            .ok_or_else(|| RuntimeError::SaveNotFound {
                name: name.to_owned(),
            })?;
        self.restore(snapshot).await?;

        info!(target: "runtime::handle", save = name, "Encounter loaded");
        Ok(())
    }

    /// Names of the stored saves.
    pub fn list_saves(&self) -> Result<Vec<String>> {
        Ok(self.repository()?.list()?)
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::GameState` - Executed and rejected actions
    /// - `Topic::Session` - Encounter start, save and restore
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}

//! Simulation worker that owns the authoritative [`game_core::GameState`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), executes
//! actions via [`game_core::GameEngine`], and publishes [`Event`]
//! notifications. Commands are handled strictly one at a time.

use rand_chacha::ChaCha8Rng;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use game_core::{
    Action, ActionOutcome, DiceOutcome, DiceRoll, EncounterSetup, EncounterSnapshot, GameConfig,
    GameEngine, GameState, Placement, begin_encounter,
};

use crate::api::Result;
use crate::events::{EventBus, GameStateEvent, SessionEvent};

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Execute an action against the current state.
    ExecuteAction {
        action: Action,
        reply: oneshot::Sender<Result<ActionOutcome>>,
    },
    /// Query the current game state (read-only copy).
    QueryState { reply: oneshot::Sender<GameState> },
    /// Capture the persisted form of the current state.
    Snapshot {
        reply: oneshot::Sender<EncounterSnapshot>,
    },
    /// Replace the state with a validated snapshot.
    Restore {
        snapshot: Box<EncounterSnapshot>,
        reply: oneshot::Sender<Result<()>>,
    },
    /// Generate a new map and seat the starting entities, keeping the sheets.
    BeginEncounter {
        setup: EncounterSetup,
        reply: oneshot::Sender<Result<Placement>>,
    },
    /// Roll dice from the worker's random source.
    RollDice {
        roll: DiceRoll,
        reply: oneshot::Sender<DiceOutcome>,
    },
}

/// Background task that processes encounter commands.
pub struct SimulationWorker {
    state: GameState,
    config: GameConfig,
    rng: ChaCha8Rng,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
}

impl SimulationWorker {
    /// Creates a new simulation worker.
    pub fn new(
        state: GameState,
        config: GameConfig,
        rng: ChaCha8Rng,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            state,
            config,
            rng,
            command_rx,
            event_bus,
        }
    }

    /// Main worker loop. Ends once every handle has been dropped.
    pub async fn run(mut self) {
        debug!(target: "runtime::worker", "Simulation worker started");
        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd);
        }
        debug!(target: "runtime::worker", "Simulation worker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::ExecuteAction { action, reply } => {
                let result = self.execute_action(action);
                let _ = reply.send(result);
            }
            Command::QueryState { reply } => {
                let _ = reply.send(self.state.clone());
            }
            Command::Snapshot { reply } => {
                let _ = reply.send(self.state.snapshot());
            }
            Command::Restore { snapshot, reply } => {
                let result = self.restore(*snapshot);
                let _ = reply.send(result);
            }
            Command::BeginEncounter { setup, reply } => {
                let result = self.begin_encounter(setup);
                let _ = reply.send(result);
            }
            Command::RollDice { roll, reply } => {
                let _ = reply.send(roll.roll(&mut self.rng));
            }
        }
    }

    fn execute_action(&mut self, action: Action) -> Result<ActionOutcome> {
        let mut engine = GameEngine::new(&mut self.state);

        match engine.execute(&action, &mut self.rng) {
            Ok(outcome) => {
                debug!(
                    target: "runtime::worker",
                    action = action.as_str(),
                    outcome = ?outcome,
                    "Action executed"
                );
                self.event_bus.publish(GameStateEvent::ActionExecuted {
                    action,
                    outcome: outcome.clone(),
                });
                Ok(outcome)
            }
            Err(error) => {
                debug!(
                    target: "runtime::worker",
                    action = ?action,
                    error = %error,
                    "Action rejected"
                );
                self.event_bus.publish(GameStateEvent::ActionRejected {
                    action,
                    error: error.clone(),
                });
                Err(error.into())
            }
        }
    }

    fn restore(&mut self, snapshot: EncounterSnapshot) -> Result<()> {
        let state = GameState::from_snapshot(snapshot)?;
        info!(
            target: "runtime::worker",
            width = state.map().width(),
            height = state.map().height(),
            characters = state.registry().character_count(),
            monsters = state.registry().monster_count(),
            "State restored"
        );
        self.state = state;
        self.event_bus.publish(SessionEvent::StateRestored);
        Ok(())
    }

    fn begin_encounter(&mut self, setup: EncounterSetup) -> Result<Placement> {
        let sheets = self.state.sheets().clone();
        let (state, placement) = begin_encounter(&setup, &self.config, sheets, &mut self.rng)?;

        info!(
            target: "runtime::worker",
            width = setup.width,
            height = setup.height,
            density = setup.obstacle_density,
            obstacles = state.map().count(|cell| cell.is_blocked()),
            characters = placement.characters.len(),
            monsters = placement.monsters.len(),
            dropped = placement.dropped.len(),
            "Encounter started"
        );

        self.state = state;
        self.event_bus.publish(SessionEvent::EncounterStarted {
            width: setup.width,
            height: setup.height,
            characters: placement.characters.iter().map(|(id, _)| *id).collect(),
            monsters: placement.monsters.iter().map(|(id, _)| *id).collect(),
            dropped: placement.dropped.clone(),
        });
        Ok(placement)
    }
}

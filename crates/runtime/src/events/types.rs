//! Event types for different topics.

use game_core::{Action, ActionError, ActionOutcome, EntityId};
use serde::{Deserialize, Serialize};

/// Events related to game state changes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameStateEvent {
    /// An action passed validation and was applied
    ActionExecuted {
        action: Action,
        outcome: ActionOutcome,
    },

    /// An action was rejected; the state is unchanged
    ActionRejected { action: Action, error: ActionError },
}

/// Events related to the encounter as a whole
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A freshly generated encounter replaced the state
    EncounterStarted {
        width: u32,
        height: u32,
        characters: Vec<EntityId>,
        monsters: Vec<EntityId>,
        /// Ids that did not fit on the generated map
        dropped: Vec<EntityId>,
    },

    /// A snapshot replaced the state
    StateRestored,

    /// The state was written to a named save
    Saved { name: String },
}

//! Executes one parsed command against the runtime and shapes its JSON reply.
use serde_json::{Value, json};
use thiserror::Error;

use game_core::{
    ActionOutcome, CharacterUpdate, EncounterSetup, EntityId, EntityKind, ErrorSeverity, Position,
};
use runtime::{RuntimeError, RuntimeHandle};

use crate::cli::{CharacterList, Command};

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error("invalid character updates")]
    InvalidUpdates(#[source] serde_json::Error),

    #[error("no sheet for entity {entity}")]
    NotFound { entity: EntityId },

    #[error(transparent)]
    Session(anyhow::Error),
}

impl CommandError {
    /// Code reported to the caller as `{"error": <code>}`.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Runtime(error) => error.error_code(),
            Self::InvalidUpdates(_) => "InvalidUpdates",
            Self::NotFound { .. } => "NotFound",
            Self::Session(_) => "SessionUnavailable",
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Runtime(error) => error.severity(),
            Self::InvalidUpdates(_) | Self::NotFound { .. } => ErrorSeverity::Validation,
            Self::Session(_) => ErrorSeverity::Internal,
        }
    }

    pub fn to_json(&self) -> Value {
        json!({ "error": self.error_code() })
    }
}

pub async fn execute(handle: &RuntimeHandle, command: Command) -> Result<Value, CommandError> {
    let reply = match command {
        Command::Map => {
            let state = handle.query_state().await?;
            json!({ "ok": true, "map": state.map() })
        }
        Command::Move { entity, to } => {
            let outcome = handle.move_entity(EntityId(entity), to.into()).await?;
            outcome_reply(&outcome)
        }
        Command::Attack { attacker, target } => {
            let outcome = handle
                .replace(EntityId(attacker), EntityId(target))
                .await?;
            outcome_reply(&outcome)
        }
        Command::Characters { which } => {
            let state = handle.query_state().await?;
            match which {
                CharacterList::Active => json!({ "ok": true, "active": state.active_characters() }),
                CharacterList::Available => {
                    json!({ "ok": true, "available": state.available_characters() })
                }
            }
        }
        Command::Sheet { entity } => {
            let entity = EntityId(entity);
            let state = handle.query_state().await?;
            let sheet = state
                .entity_sheet(entity)
                .ok_or(CommandError::NotFound { entity })?;
            json!({ "ok": true, "id": entity, "sheet": sheet })
        }
        Command::UpdateCharacter { entity, updates } => {
            let update: CharacterUpdate =
                serde_json::from_str(&updates).map_err(CommandError::InvalidUpdates)?;
            let outcome = handle.update_character(EntityId(entity), update).await?;
            outcome_reply(&outcome)
        }
        Command::SpawnCharacter { index, at } => {
            let outcome = handle.spawn_character(index, at.into()).await?;
            outcome_reply(&outcome)
        }
        Command::SpawnMonster { at } => {
            let outcome = handle.spawn_monster(at.into()).await?;
            outcome_reply(&outcome)
        }
        Command::Monsters => {
            let state = handle.query_state().await?;
            json!({ "ok": true, "active": state.active_monsters() })
        }
        Command::Destroy { at } => {
            let outcome = handle.destroy_at(at.into()).await?;
            outcome_reply(&outcome)
        }
        Command::Dice {
            sides,
            count,
            modifier,
        } => {
            let roll = handle.roll_dice(sides, count, modifier).await?;
            json!({
                "ok": true,
                "result": roll.total,
                "sides": roll.sides,
                "count": roll.count,
                "modifier": roll.modifier,
                "rolls": roll.rolls,
            })
        }
        Command::Save { name } => {
            handle.save(&name).await?;
            json!({ "ok": true, "name": name })
        }
        Command::Load { name } => {
            handle.load(&name).await?;
            json!({ "ok": true, "name": name })
        }
        Command::Saves => {
            let saves = handle.list_saves()?;
            json!({ "ok": true, "saves": saves })
        }
        Command::Begin {
            width,
            height,
            density,
        } => {
            let setup = EncounterSetup {
                width,
                height,
                obstacle_density: density,
            };
            let placement = handle.begin_encounter(setup).await?;
            json!({
                "ok": true,
                "width": width,
                "height": height,
                "characters": seated(&placement.characters),
                "monsters": seated(&placement.monsters),
                "dropped": placement.dropped,
            })
        }
    };
    Ok(reply)
}

fn outcome_reply(outcome: &ActionOutcome) -> Value {
    match outcome {
        ActionOutcome::Moved { entity, to, .. } => {
            json!({ "ok": true, "entityId": entity, "x": to.x, "y": to.y })
        }
        ActionOutcome::Replaced {
            attacker,
            defeated,
            position,
        } => json!({
            "ok": true,
            "attackerId": attacker,
            "defeatedId": defeated,
            "x": position.x,
            "y": position.y,
        }),
        ActionOutcome::Spawned { entity, position } => {
            let key = match entity.kind() {
                Some(EntityKind::Monster) => "monsterId",
                _ => "characterId",
            };
            json!({ "ok": true, key: entity, "x": position.x, "y": position.y })
        }
        ActionOutcome::Destroyed { position, previous } => {
            json!({ "ok": true, "x": position.x, "y": position.y, "previous": previous })
        }
        ActionOutcome::CharacterUpdated { entity } => json!({ "ok": true, "entityId": entity }),
    }
}

fn seated(entities: &[(EntityId, Position)]) -> Vec<Value> {
    entities
        .iter()
        .map(|(id, position)| json!({ "id": id, "x": position.x, "y": position.y }))
        .collect()
}

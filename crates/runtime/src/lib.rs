//! Runtime orchestration for an encounter.
//!
//! This crate wires the game-core engine, a seedable random source, save
//! repositories, and an event bus into a single-owner worker task. Consumers
//! embed [`Runtime`] and interact with the encounter through the cloneable
//! [`RuntimeHandle`]; every mutating request is processed to completion before
//! the next one starts.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based event bus
//! - [`repository`] persists encounter snapshots
//! - `workers` keeps the background task internal to the crate
pub mod api;
pub mod events;
pub mod repository;
pub mod runtime;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle};
pub use events::{Event, EventBus, GameStateEvent, SessionEvent, Topic};
pub use repository::{FileSaveRepository, InMemorySaveRepo, RepositoryError, SaveRepository};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};

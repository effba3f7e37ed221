//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, repositories, and the game rules
//! so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use game_core::{ActionError, DiceError, ErrorSeverity, GameError, InitializationError, SetupError};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("runtime has no save repository configured")]
    MissingRepository,

    #[error("no save named {name:?}")]
    SaveNotFound { name: String },

    #[error(transparent)]
    Action(#[from] ActionError),

    #[error("invalid encounter state")]
    InvalidState(#[from] InitializationError),

    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Dice(#[from] DiceError),
}

impl RuntimeError {
    /// Stable identifier clients receive for this failure.
    ///
    /// Rule violations keep the code assigned by game-core; runtime faults
    /// use their variant name.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Action(error) => error.error_code(),
            Self::InvalidState(error) => error.error_code(),
            Self::Setup(error) => error.error_code(),
            Self::Dice(error) => error.error_code(),
            Self::SaveNotFound { .. } => "SaveNotFound",
            Self::MissingRepository => "MissingRepository",
            Self::Repository(RepositoryError::InvalidName(_)) => "InvalidSaveName",
            Self::Repository(_) => "RepositoryError",
            Self::CommandChannelClosed | Self::ReplyChannelClosed(_) | Self::WorkerJoin(_) => {
                "RuntimeUnavailable"
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Action(error) => error.severity(),
            Self::InvalidState(error) => error.severity(),
            Self::Setup(error) => error.severity(),
            Self::Dice(error) => error.severity(),
            Self::SaveNotFound { .. } | Self::Repository(RepositoryError::InvalidName(_)) => {
                ErrorSeverity::Validation
            }
            Self::Repository(_) => ErrorSeverity::Recoverable,
            Self::MissingRepository
            | Self::CommandChannelClosed
            | Self::ReplyChannelClosed(_)
            | Self::WorkerJoin(_) => ErrorSeverity::Internal,
        }
    }
}

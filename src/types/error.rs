//! Error taxonomy for the game

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// Labels file or model backend unreadable or malformed
    #[error("failed to load model: {0}")]
    ModelLoad(String),
    /// Frame source unavailable
    #[error("frame capture failed: {0}")]
    Capture(String),
    /// Model output does not fit the label set
    #[error("classification failed: {0}")]
    Inference(String),
    /// Typed move is not Rock, Paper, or Scissors
    #[error("invalid move {input:?}, expected Rock, Paper, or Scissors")]
    InvalidInput { input: String },
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// Get the kind string (for logging)
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ModelLoad(_) => "MODEL_LOAD",
            Self::Capture(_) => "CAPTURE",
            Self::Inference(_) => "INFERENCE",
            Self::InvalidInput { .. } => "INVALID_USER_INPUT",
            Self::Config(_) => "CONFIG",
            Self::Io(_) => "IO",
        }
    }

    /// Can the game carry on after this error?
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

/// Convenience result type used throughout this crate.
pub type Result<T> = std::result::Result<T, GameError>;

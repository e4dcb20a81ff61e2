//! Core types for Handsign

mod gesture;
mod outcome;
mod error;
mod phase;
mod config;
mod state;
mod record;
mod summary;

pub use gesture::Gesture;
pub use outcome::RoundOutcome;
pub use error::{GameError, Result};
pub use phase::{RoundPhase, PhaseSchedule};
pub use config::{GameConfig, StopRule};
pub use state::{GameState, Winner};
pub use record::RoundRecord;
pub use summary::{SessionSummary, EndReason};

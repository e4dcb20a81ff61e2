//! Round phases and their time boundaries

use serde::{Deserialize, Serialize};
use std::time::Duration;
use crate::{WARMUP_END_SECS, COUNTDOWN_END_SECS, DISPLAY_END_SECS};
use crate::types::GameError;

/// The four phases of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundPhase {
    /// Before the countdown, nothing captured
    WarmUp,
    /// Counting down to capture
    Countdown { remaining_secs: u64 },
    /// Gesture captured and resolved once, outcome displayed
    Resolution,
    /// Round over, timer restarts
    Reset,
}

impl std::fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundPhase::WarmUp => write!(f, "WARM_UP"),
            RoundPhase::Countdown { remaining_secs } => write!(f, "COUNTDOWN({})", remaining_secs),
            RoundPhase::Resolution => write!(f, "RESOLUTION"),
            RoundPhase::Reset => write!(f, "RESET"),
        }
    }
}

/// Phase boundaries measured from the start of a round
///
/// - `elapsed < warmup_end` → WarmUp
/// - `warmup_end ≤ elapsed ≤ countdown_end` → Countdown
/// - `countdown_end < elapsed < display_end` → Resolution
/// - `elapsed ≥ display_end` → Reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseSchedule {
    pub warmup_end: Duration,
    pub countdown_end: Duration,
    pub display_end: Duration,
}

impl Default for PhaseSchedule {
    fn default() -> Self {
        Self {
            warmup_end: Duration::from_secs(WARMUP_END_SECS),
            countdown_end: Duration::from_secs(COUNTDOWN_END_SECS),
            display_end: Duration::from_secs(DISPLAY_END_SECS),
        }
    }
}

impl PhaseSchedule {
    pub fn new(warmup_end: Duration, countdown_end: Duration, display_end: Duration) -> Self {
        Self { warmup_end, countdown_end, display_end }
    }

    /// Boundaries must be ordered and leave a non-empty resolution window
    pub fn validate(&self) -> Result<(), GameError> {
        if self.warmup_end > self.countdown_end {
            return Err(GameError::Config(format!(
                "warm-up end {:?} is after countdown end {:?}",
                self.warmup_end, self.countdown_end
            )));
        }
        if self.countdown_end >= self.display_end {
            return Err(GameError::Config(format!(
                "countdown end {:?} leaves no resolution window before {:?}",
                self.countdown_end, self.display_end
            )));
        }
        Ok(())
    }

    /// Phase for a given time since the round began
    pub fn phase_at(&self, elapsed: Duration) -> RoundPhase {
        if elapsed < self.warmup_end {
            RoundPhase::WarmUp
        } else if elapsed <= self.countdown_end {
            RoundPhase::Countdown {
                remaining_secs: self.countdown_end.as_secs().saturating_sub(elapsed.as_secs()),
            }
        } else if elapsed < self.display_end {
            RoundPhase::Resolution
        } else {
            RoundPhase::Reset
        }
    }
}

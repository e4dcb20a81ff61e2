//! Game configuration

use serde::{Deserialize, Serialize};
use crate::{CONFIDENCE_THRESHOLD, TARGET_WINS};
use crate::types::{GameError, PhaseSchedule};

/// When a game ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopRule {
    /// First side to reach `n` wins
    FirstTo(u32),
    /// After `n` rounds, whatever the score
    Rounds(u32),
}

impl StopRule {
    pub fn is_met(&self, user_wins: u32, computer_wins: u32, rounds_played: u32) -> bool {
        match *self {
            StopRule::FirstTo(target) => user_wins.max(computer_wins) >= target,
            StopRule::Rounds(total) => rounds_played >= total,
        }
    }
}

impl Default for StopRule {
    fn default() -> Self {
        StopRule::FirstTo(TARGET_WINS)
    }
}

impl std::fmt::Display for StopRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StopRule::FirstTo(n) => write!(f, "first to {} wins", n),
            StopRule::Rounds(n) => write!(f, "{} rounds", n),
        }
    }
}

/// Tunables for one game session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub stop: StopRule,
    pub schedule: PhaseSchedule,
    /// Classifier labels below this probability become `Nothing`
    pub confidence_threshold: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            stop: StopRule::default(),
            schedule: PhaseSchedule::default(),
            confidence_threshold: CONFIDENCE_THRESHOLD,
        }
    }
}

impl GameConfig {
    pub fn with_stop(mut self, stop: StopRule) -> Self {
        self.stop = stop;
        self
    }

    pub fn with_schedule(mut self, schedule: PhaseSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn with_confidence_threshold(mut self, threshold: f32) -> Self {
        self.confidence_threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<(), GameError> {
        match self.stop {
            StopRule::FirstTo(0) | StopRule::Rounds(0) => {
                return Err(GameError::Config(format!("stop rule '{}' ends before it starts", self.stop)));
            }
            _ => {}
        }
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(GameError::Config(format!(
                "confidence threshold {} is outside [0, 1]",
                self.confidence_threshold
            )));
        }
        self.schedule.validate()
    }
}

//! Per-round output structures for terminal display

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use colored::Colorize;
use crate::types::{Gesture, RoundOutcome};

/// One resolved round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Round number, starting at 1
    pub round: u32,
    pub computer: Gesture,
    pub user: Gesture,
    /// Classifier probability for the user's label (camera game only)
    pub confidence: Option<f32>,
    pub outcome: RoundOutcome,
    /// Scores after this round
    pub user_wins: u32,
    pub computer_wins: u32,
}

impl RoundRecord {
    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        format!(
            "{} round {} | you {} {} | computer {} {} | {} | {}-{}",
            "●".bold(),
            self.round,
            self.user.emoji(),
            self.user,
            self.computer.emoji(),
            self.computer,
            self.outcome.colored_message(),
            self.user_wins,
            self.computer_wins
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        let confidence = self
            .confidence
            .map(|c| format!("{:.3}", c))
            .unwrap_or_else(|| "-".to_string());
        format!(
            "round={} | user={} | computer={} | confidence={} | outcome={:?} | score={}-{}",
            self.round,
            self.user,
            self.computer,
            confidence,
            self.outcome,
            self.user_wins,
            self.computer_wins
        )
    }
}

//! Round outcomes

use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};

/// Result of one round, from the user's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundOutcome {
    UserWin,
    ComputerWin,
    Tie,
    /// The user showed Nothing, no-one scores
    NoResult,
}

impl RoundOutcome {
    /// Message shown to the player
    pub fn message(&self) -> &'static str {
        match self {
            RoundOutcome::UserWin => "You won!",
            RoundOutcome::ComputerWin => "You lost",
            RoundOutcome::Tie => "It is a tie!",
            RoundOutcome::NoResult => "No-one wins",
        }
    }

    /// Did someone score?
    pub fn is_decisive(&self) -> bool {
        matches!(self, RoundOutcome::UserWin | RoundOutcome::ComputerWin)
    }

    /// Message colored for the terminal
    pub fn colored_message(&self) -> ColoredString {
        match self {
            RoundOutcome::UserWin => self.message().green().bold(),
            RoundOutcome::ComputerWin => self.message().red().bold(),
            RoundOutcome::Tie => self.message().yellow(),
            RoundOutcome::NoResult => self.message().bright_black(),
        }
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

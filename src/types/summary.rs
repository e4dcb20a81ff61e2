//! End-of-session summary

use serde::{Deserialize, Serialize};
use crate::types::{GameState, RoundRecord, StopRule, Winner};

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EndReason {
    /// Stop rule met
    GameOver,
    /// Player pressed the quit key or typed quit
    Quit,
    /// Input stream closed
    InputClosed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub stop: StopRule,
    pub rounds: Vec<RoundRecord>,
    pub user_wins: u32,
    pub computer_wins: u32,
    pub rounds_played: u32,
    pub winner: Option<Winner>,
    /// Stop rule met before the session ended
    pub completed: bool,
    pub ended: EndReason,
}

impl SessionSummary {
    pub fn new(state: &GameState, rounds: Vec<RoundRecord>, ended: EndReason) -> Self {
        Self {
            stop: state.stop,
            rounds,
            user_wins: state.user_wins,
            computer_wins: state.computer_wins,
            rounds_played: state.rounds_played,
            winner: state.winner(),
            completed: state.is_over(),
            ended,
        }
    }

    /// One-line result for the terminal
    pub fn headline(&self) -> String {
        let verdict = match (self.completed, self.winner) {
            (false, _) => "Game abandoned",
            (true, Some(Winner::User)) => "You win the game!",
            (true, Some(Winner::Computer)) => "The computer wins the game",
            (true, None) => "The game is a draw",
        };
        format!(
            "{} | You: {} | Computer: {} | Rounds: {}",
            verdict, self.user_wins, self.computer_wins, self.rounds_played
        )
    }
}

//! Score keeping for one game

use chrono::Utc;
use serde::{Deserialize, Serialize};
use crate::types::{Gesture, RoundOutcome, RoundRecord, StopRule};

/// Who won the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Winner {
    User,
    Computer,
}

/// Mutable state of a game, changed once per completed round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub user_wins: u32,
    pub computer_wins: u32,
    pub rounds_played: u32,
    pub stop: StopRule,
    pub user_choice: Option<Gesture>,
    pub computer_choice: Option<Gesture>,
    pub last_outcome: Option<RoundOutcome>,
}

impl GameState {
    pub fn new(stop: StopRule) -> Self {
        Self {
            user_wins: 0,
            computer_wins: 0,
            rounds_played: 0,
            stop,
            user_choice: None,
            computer_choice: None,
            last_outcome: None,
        }
    }

    /// Has the stop rule been met?
    pub fn is_over(&self) -> bool {
        self.stop.is_met(self.user_wins, self.computer_wins, self.rounds_played)
    }

    /// Record a finished round. Returns false, changing nothing, once the game is over.
    pub fn apply(&mut self, computer: Gesture, user: Gesture, outcome: RoundOutcome) -> bool {
        if self.is_over() {
            return false;
        }
        self.rounds_played += 1;
        match outcome {
            RoundOutcome::UserWin => self.user_wins += 1,
            RoundOutcome::ComputerWin => self.computer_wins += 1,
            RoundOutcome::Tie | RoundOutcome::NoResult => {}
        }
        self.computer_choice = Some(computer);
        self.user_choice = Some(user);
        self.last_outcome = Some(outcome);
        true
    }

    /// Apply a round and describe it. `None`, changing nothing, once the game is over.
    pub fn record(
        &mut self,
        computer: Gesture,
        user: Gesture,
        outcome: RoundOutcome,
        confidence: Option<f32>,
    ) -> Option<RoundRecord> {
        if !self.apply(computer, user, outcome) {
            return None;
        }
        Some(RoundRecord {
            timestamp: Utc::now(),
            round: self.rounds_played,
            computer,
            user,
            confidence,
            outcome,
            user_wins: self.user_wins,
            computer_wins: self.computer_wins,
        })
    }

    /// Leader once the game is over; `None` while playing or on a level score
    pub fn winner(&self) -> Option<Winner> {
        if !self.is_over() {
            return None;
        }
        match self.user_wins.cmp(&self.computer_wins) {
            std::cmp::Ordering::Greater => Some(Winner::User),
            std::cmp::Ordering::Less => Some(Winner::Computer),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Lines describing the latest round, empty before the first one
    pub fn latest_round_lines(&self) -> Vec<String> {
        match (self.user_choice, self.computer_choice, self.last_outcome) {
            (Some(user), Some(computer), Some(outcome)) => vec![
                format!("Your choice: {}", user),
                format!("Computer choice: {}", computer),
                outcome.message().to_string(),
            ],
            _ => Vec::new(),
        }
    }

    /// Final scoreboard lines
    pub fn scoreboard_lines(&self) -> Vec<String> {
        vec![
            "GAME OVER!".to_string(),
            format!("You: {}", self.user_wins),
            format!("Computer: {}", self.computer_wins),
        ]
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_numbers_rounds_and_carries_score() {
        let mut state = GameState::new(StopRule::Rounds(2));
        let first = state.record(Gesture::Rock, Gesture::Paper, RoundOutcome::UserWin, Some(0.8)).unwrap();
        assert_eq!((first.round, first.user_wins, first.computer_wins), (1, 1, 0));
        assert_eq!(first.confidence, Some(0.8));

        let second = state.record(Gesture::Paper, Gesture::Paper, RoundOutcome::Tie, None).unwrap();
        assert_eq!((second.round, second.user_wins), (2, 1));
        assert_eq!(state.last_outcome, Some(RoundOutcome::Tie));
    }

    #[test]
    fn test_record_refused_once_over() {
        let mut state = GameState::new(StopRule::FirstTo(1));
        assert!(state.record(Gesture::Scissors, Gesture::Rock, RoundOutcome::UserWin, None).is_some());
        assert!(state.record(Gesture::Rock, Gesture::Scissors, RoundOutcome::ComputerWin, None).is_none());
        assert_eq!((state.user_wins, state.computer_wins, state.rounds_played), (1, 0, 1));
        assert_eq!(state.user_choice, Some(Gesture::Rock));
    }
}

//! Gesture definitions

use serde::{Deserialize, Serialize};
use crate::types::GameError;

/// A hand gesture shown by either player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gesture {
    Rock,
    Paper,
    Scissors,
    /// No confident gesture detected, never wins or ties
    Nothing,
}

impl Gesture {
    /// Gestures that can win a round
    pub const PLAYABLE: [Gesture; 3] = [Gesture::Rock, Gesture::Paper, Gesture::Scissors];

    /// Rock beats Scissors, Scissors beats Paper, Paper beats Rock.
    /// Nothing beats nothing and is beaten by nothing.
    pub fn beats(&self, other: &Gesture) -> bool {
        matches!(
            (self, other),
            (Gesture::Rock, Gesture::Scissors)
                | (Gesture::Scissors, Gesture::Paper)
                | (Gesture::Paper, Gesture::Rock)
        )
    }

    pub fn is_playable(&self) -> bool {
        *self != Gesture::Nothing
    }

    /// Case-insensitive lookup of any gesture name, including `Nothing`
    pub fn from_name(name: &str) -> Option<Gesture> {
        let name = name.trim();
        [Gesture::Rock, Gesture::Paper, Gesture::Scissors, Gesture::Nothing]
            .into_iter()
            .find(|g| g.name().eq_ignore_ascii_case(name))
    }

    /// Parse a typed move. Only Rock, Paper, or Scissors are accepted.
    pub fn from_user_input(input: &str) -> Result<Gesture, GameError> {
        match Gesture::from_name(input) {
            Some(gesture) if gesture.is_playable() => Ok(gesture),
            _ => Err(GameError::InvalidInput { input: input.trim().to_string() }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Gesture::Rock => "Rock",
            Gesture::Paper => "Paper",
            Gesture::Scissors => "Scissors",
            Gesture::Nothing => "Nothing",
        }
    }

    /// Get emoji for gesture
    pub fn emoji(&self) -> &'static str {
        match self {
            Gesture::Rock => "✊",
            Gesture::Paper => "✋",
            Gesture::Scissors => "✌",
            Gesture::Nothing => "·",
        }
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

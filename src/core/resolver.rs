//! Choice resolver: who wins a round, and how the computer picks its move

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use crate::types::{Gesture, RoundOutcome};

/// Decide a round from the user's point of view.
///
/// Nothing is checked first so it can never tie or win. The caller applies
/// the score change.
pub fn resolve(computer: Gesture, user: Gesture) -> RoundOutcome {
    if !user.is_playable() || !computer.is_playable() {
        RoundOutcome::NoResult
    } else if computer == user {
        RoundOutcome::Tie
    } else if user.beats(&computer) {
        RoundOutcome::UserWin
    } else {
        RoundOutcome::ComputerWin
    }
}

/// Uniform draw from Rock, Paper, Scissors. Never Nothing.
pub fn choose_computer_gesture<R: Rng + ?Sized>(rng: &mut R) -> Gesture {
    Gesture::PLAYABLE[rng.random_range(0..Gesture::PLAYABLE.len())]
}

/// Source of the computer's moves
pub trait ComputerPlayer {
    fn choose(&mut self) -> Gesture;
}

/// Computer that plays uniformly at random
#[derive(Debug)]
pub struct RandomPlayer {
    rng: SmallRng,
}

impl RandomPlayer {
    /// Seeded from the OS
    pub fn new() -> Self {
        Self { rng: SmallRng::from_os_rng() }
    }

    /// Reproducible sequence of moves
    pub fn seeded(seed: u64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed) }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputerPlayer for RandomPlayer {
    fn choose(&mut self) -> Gesture {
        choose_computer_gesture(&mut self.rng)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_same_gesture_ties() {
        for g in Gesture::PLAYABLE {
            assert_eq!(resolve(g, g), RoundOutcome::Tie);
        }
    }

    #[test]
    fn test_nothing_never_scores() {
        for g in Gesture::PLAYABLE {
            assert_eq!(resolve(g, Gesture::Nothing), RoundOutcome::NoResult);
            assert_eq!(resolve(Gesture::Nothing, g), RoundOutcome::NoResult);
        }
        assert_eq!(resolve(Gesture::Nothing, Gesture::Nothing), RoundOutcome::NoResult);
    }

    #[test]
    fn test_known_matchups() {
        assert_eq!(resolve(Gesture::Rock, Gesture::Paper), RoundOutcome::UserWin);
        assert_eq!(resolve(Gesture::Rock, Gesture::Scissors), RoundOutcome::ComputerWin);
        assert_eq!(resolve(Gesture::Paper, Gesture::Scissors), RoundOutcome::UserWin);
        assert_eq!(resolve(Gesture::Scissors, Gesture::Rock), RoundOutcome::UserWin);
        assert_eq!(resolve(Gesture::Paper, Gesture::Rock), RoundOutcome::ComputerWin);
        assert_eq!(resolve(Gesture::Scissors, Gesture::Paper), RoundOutcome::ComputerWin);
    }

    #[test]
    fn test_beats_is_a_three_cycle() {
        for a in Gesture::PLAYABLE {
            for b in Gesture::PLAYABLE {
                if a == b {
                    assert!(!a.beats(&b));
                    continue;
                }
                // Exactly one direction wins
                assert_ne!(a.beats(&b), b.beats(&a), "{} vs {}", a, b);
                let outcome = resolve(a, b);
                assert!(outcome.is_decisive());
                assert!(resolve(b, a).is_decisive());
                assert_ne!(outcome, resolve(b, a));
            }
        }
    }

    #[test]
    fn test_computer_never_picks_nothing() {
        let mut player = RandomPlayer::seeded(7);
        let mut counts: HashMap<Gesture, usize> = HashMap::new();
        for _ in 0..3000 {
            let g = player.choose();
            assert_ne!(g, Gesture::Nothing);
            *counts.entry(g).or_default() += 1;
        }
        for g in Gesture::PLAYABLE {
            assert!(counts.get(&g).copied().unwrap_or(0) > 0, "{} never chosen", g);
        }
    }

    #[test]
    fn test_seeded_player_is_reproducible() {
        let mut a = RandomPlayer::seeded(42);
        let mut b = RandomPlayer::seeded(42);
        let left: Vec<_> = (0..20).map(|_| a.choose()).collect();
        let right: Vec<_> = (0..20).map(|_| b.choose()).collect();
        assert_eq!(left, right);
    }
}

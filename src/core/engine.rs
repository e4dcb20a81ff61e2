//! Game Engine: round state machine driven by elapsed time
//!
//! Per round:
//! - WARM_UP → COUNTDOWN: elapsed ≥ warm-up end
//! - COUNTDOWN → RESOLUTION: elapsed > countdown end, one capture per round
//! - RESOLUTION → RESET: elapsed ≥ display end, timer restarts
//!
//! The stop rule is checked before the phase on every tick; once it is met
//! the engine only ever reports GAME_OVER.

use std::time::{Duration, Instant};
use tracing::{debug, info};
use crate::core::resolver::resolve;
use crate::types::{
    EndReason, GameConfig, GameState, Gesture, PhaseSchedule, RoundPhase, RoundRecord,
    SessionSummary,
};

/// What the game loop should do this tick
#[derive(Debug, Clone, PartialEq)]
pub enum Tick {
    /// Stop rule met, show the scoreboard
    GameOver,
    WarmUp,
    Countdown { remaining_secs: u64 },
    /// First tick of the resolution window: classify and call `record_round`
    Capture,
    /// Round already resolved, redisplay it
    Showing(RoundRecord),
    /// Round timer restarted
    Reset,
}

/// Round state machine engine
#[derive(Debug)]
pub struct GameEngine {
    state: GameState,
    schedule: PhaseSchedule,
    /// When the current round began
    round_start: Instant,
    /// Outcome of the current round, once resolved
    current: Option<RoundRecord>,
    /// Every resolved round
    history: Vec<RoundRecord>,
    /// Last phase reported (for logging changes)
    last_phase: Option<RoundPhase>,
}

impl GameEngine {
    /// Create new engine, first round starting at `now`
    pub fn new(config: &GameConfig, now: Instant) -> Self {
        Self {
            state: GameState::new(config.stop),
            schedule: config.schedule,
            round_start: now,
            current: None,
            history: Vec::new(),
            last_phase: None,
        }
    }

    /// Advance to `now` and report what to do
    pub fn tick(&mut self, now: Instant) -> Tick {
        if self.state.is_over() {
            return Tick::GameOver;
        }

        let phase = self.schedule.phase_at(self.elapsed(now));
        if self.last_phase != Some(phase) {
            debug!(round = self.state.rounds_played + 1, %phase, "phase change");
            self.last_phase = Some(phase);
        }

        match phase {
            RoundPhase::WarmUp => Tick::WarmUp,
            RoundPhase::Countdown { remaining_secs } => Tick::Countdown { remaining_secs },
            RoundPhase::Resolution => match &self.current {
                Some(record) => Tick::Showing(record.clone()),
                None => Tick::Capture,
            },
            RoundPhase::Reset => {
                self.round_start = now;
                self.current = None;
                Tick::Reset
            }
        }
    }

    /// Resolve the current round and update the score.
    ///
    /// Returns `None`, changing nothing, if the game is over or this round
    /// was already resolved.
    pub fn record_round(
        &mut self,
        computer: Gesture,
        user: Gesture,
        confidence: Option<f32>,
    ) -> Option<RoundRecord> {
        if self.current.is_some() {
            return None;
        }
        let record = self.state.record(computer, user, resolve(computer, user), confidence)?;
        info!(
            round = record.round,
            %user,
            %computer,
            outcome = ?record.outcome,
            user_wins = record.user_wins,
            computer_wins = record.computer_wins,
            "round resolved"
        );
        self.current = Some(record.clone());
        self.history.push(record.clone());
        Some(record)
    }

    /// Time since the current round began
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.round_start)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Outcome of the round in progress, if resolved
    pub fn current_round(&self) -> Option<&RoundRecord> {
        self.current.as_ref()
    }

    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    pub fn into_summary(self, ended: EndReason) -> SessionSummary {
        SessionSummary::new(&self.state, self.history, ended)
    }
}

// =============================================================================
// TESTS
// =============================================================================

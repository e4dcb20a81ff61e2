//! Typed variant: the user enters their move at a prompt

use std::io::{BufRead, Write};
use colored::Colorize;
use tracing::{debug, info};
use crate::core::resolver::{resolve, ComputerPlayer};
use crate::types::{EndReason, GameState, Gesture, Result, RoundRecord, SessionSummary, StopRule};

pub const PROMPT: &str = "Please enter 'Rock', 'Paper', or 'Scissors': ";

/// What came back from the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompted {
    Move(Gesture),
    /// User typed quit or exit
    Quit,
    /// End of input
    Closed,
}

/// Ask until a valid move, quit, or end of input
pub fn prompt_gesture<I: BufRead, O: Write>(input: &mut I, output: &mut O) -> Result<Prompted> {
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        // Undecodable bytes become U+FFFD and fail the gesture parse
        let mut raw = Vec::new();
        if input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(Prompted::Closed);
        }
        let line = String::from_utf8_lossy(&raw);
        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            return Ok(Prompted::Quit);
        }
        match Gesture::from_user_input(line) {
            Ok(gesture) => return Ok(Prompted::Move(gesture)),
            Err(e) if e.is_recoverable() => {
                debug!(kind = e.kind(), error = %e, "re-prompting");
            }
            Err(e) => return Err(e),
        }
    }
}

/// Rounds of typed moves against the computer
#[derive(Debug)]
pub struct TextGame<P> {
    state: GameState,
    player: P,
    history: Vec<RoundRecord>,
}

impl<P: ComputerPlayer> TextGame<P> {
    pub fn new(stop: StopRule, player: P) -> Self {
        Self { state: GameState::new(stop), player, history: Vec::new() }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Play until the stop rule is met, the user quits, or input ends
    pub fn play<I: BufRead, O: Write>(mut self, input: &mut I, output: &mut O) -> Result<SessionSummary> {
        info!(stop = %self.state.stop, "text game started");
        let ended = loop {
            if self.state.is_over() {
                break EndReason::GameOver;
            }
            if let Some(ended) = self.play_round(input, output)? {
                break ended;
            }
        };

        writeln!(output)?;
        writeln!(output, "Final score | You: {} | Computer: {}", self.state.user_wins, self.state.computer_wins)?;
        info!(
            user_wins = self.state.user_wins,
            computer_wins = self.state.computer_wins,
            ?ended,
            "text game ended"
        );
        Ok(SessionSummary::new(&self.state, self.history, ended))
    }

    /// One round. Returns why the game ended if the user left mid-round.
    fn play_round<I: BufRead, O: Write>(&mut self, input: &mut I, output: &mut O) -> Result<Option<EndReason>> {
        writeln!(output)?;
        writeln!(output, "{}", format!("Round {}", self.state.rounds_played + 1).as_str().bold())?;

        // Computer commits first
        writeln!(output, "The computer is making a move...")?;
        let computer = self.player.choose();

        writeln!(output, "Your move!")?;
        let user = match prompt_gesture(input, output)? {
            Prompted::Move(gesture) => gesture,
            Prompted::Quit => return Ok(Some(EndReason::Quit)),
            Prompted::Closed => {
                writeln!(output)?;
                return Ok(Some(EndReason::InputClosed));
            }
        };

        let outcome = resolve(computer, user);
        let record = match self.state.record(computer, user, outcome, None) {
            Some(record) => record,
            None => return Ok(Some(EndReason::GameOver)),
        };
        info!(round = record.round, %user, %computer, ?outcome, "round resolved");

        writeln!(output, "Computer choice: {}", computer)?;
        writeln!(output, "User choice: {}", user)?;
        writeln!(output, "{}", outcome.colored_message())?;
        writeln!(output, "Score | You: {} | Computer: {}", record.user_wins, record.computer_wins)?;
        self.history.push(record);
        Ok(None)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_normalizes_case_and_whitespace() {
        let mut input = Cursor::new("  rOCK \n");
        let mut output = Vec::new();
        assert_eq!(prompt_gesture(&mut input, &mut output).unwrap(), Prompted::Move(Gesture::Rock));
    }

    #[test]
    fn test_prompt_repeats_until_valid() {
        let mut input = Cursor::new("lizard\n\nnothing\nscissors\n");
        let mut output = Vec::new();
        let prompted = prompt_gesture(&mut input, &mut output).unwrap();
        assert_eq!(prompted, Prompted::Move(Gesture::Scissors));

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches(PROMPT).count(), 4);
    }

    #[test]
    fn test_prompt_skips_undecodable_line() {
        let mut input = Cursor::new(b"\xff\xfe rock\npaper\n".to_vec());
        let mut output = Vec::new();
        assert_eq!(prompt_gesture(&mut input, &mut output).unwrap(), Prompted::Move(Gesture::Paper));

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches(PROMPT).count(), 2);
    }

    #[test]
    fn test_prompt_quit_and_closed() {
        let mut output = Vec::new();
        assert_eq!(prompt_gesture(&mut Cursor::new("Quit\n"), &mut output).unwrap(), Prompted::Quit);
        assert_eq!(prompt_gesture(&mut Cursor::new("paper?\n"), &mut output).unwrap(), Prompted::Closed);
    }
}

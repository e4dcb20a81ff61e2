//! Integration tests for the typed game
//!
//! Tests the full path: typed line → Gesture → resolver → score → output

use std::collections::VecDeque;
use std::io::Cursor;

use handsign::core::{ComputerPlayer, RandomPlayer, TextGame, PROMPT};
use handsign::types::{EndReason, Gesture, RoundOutcome, StopRule, Winner};
use pretty_assertions::assert_eq;

struct ScriptedPlayer(VecDeque<Gesture>);

impl ScriptedPlayer {
    fn new(moves: &[Gesture]) -> Self {
        Self(moves.iter().copied().collect())
    }
}

impl ComputerPlayer for ScriptedPlayer {
    fn choose(&mut self) -> Gesture {
        self.0.pop_front().unwrap_or(Gesture::Rock)
    }
}

fn play(stop: StopRule, computer: &[Gesture], typed: &str) -> (handsign::types::SessionSummary, String) {
    let mut input = Cursor::new(typed.to_string());
    let mut output = Vec::new();
    let summary = TextGame::new(stop, ScriptedPlayer::new(computer))
        .play(&mut input, &mut output)
        .unwrap();
    (summary, String::from_utf8(output).unwrap())
}

#[test]
fn test_three_rounds_default_game() {
    use Gesture::*;
    let (summary, output) = play(StopRule::Rounds(3), &[Rock, Paper, Scissors], "paper\nPAPER\n  rock  \n");

    let outcomes: Vec<_> = summary.rounds.iter().map(|r| r.outcome).collect();
    assert_eq!(outcomes, vec![RoundOutcome::UserWin, RoundOutcome::Tie, RoundOutcome::UserWin]);
    assert_eq!(summary.ended, EndReason::GameOver);
    assert_eq!(summary.winner, Some(Winner::User));
    assert!(output.contains("The computer is making a move..."));
    assert!(output.contains("Computer choice: Scissors"));
    assert!(output.contains("User choice: Rock"));
    assert!(output.contains("It is a tie!"));
    assert!(output.contains("Final score | You: 2 | Computer: 0"));
}

#[test]
fn test_invalid_input_reprompts() {
    let (summary, output) = play(StopRule::Rounds(1), &[Gesture::Rock], "spock\nnothing\n\nscissors\n");

    assert_eq!(summary.rounds.len(), 1);
    assert_eq!(summary.rounds[0].user, Gesture::Scissors);
    assert_eq!(summary.rounds[0].outcome, RoundOutcome::ComputerWin);
    assert_eq!(output.matches(PROMPT).count(), 4);
}

#[test]
fn test_first_to_target_plays_through_ties() {
    use Gesture::*;
    let (summary, _) = play(
        StopRule::FirstTo(2),
        &[Rock, Rock, Rock, Rock],
        "rock\nrock\npaper\npaper\n",
    );
    assert_eq!(summary.rounds_played, 4);
    assert_eq!(summary.user_wins, 2);
    assert_eq!(summary.computer_wins, 0);
    assert_eq!(summary.ended, EndReason::GameOver);
}

#[test]
fn test_quit_ends_early() {
    let (summary, _) = play(StopRule::Rounds(3), &[Gesture::Paper], "rock\nquit\n");
    assert_eq!(summary.rounds_played, 1);
    assert_eq!(summary.computer_wins, 1);
    assert_eq!(summary.ended, EndReason::Quit);
    assert!(!summary.completed);
    assert_eq!(summary.winner, None);
}

#[test]
fn test_end_of_input_ends_early() {
    let (summary, _) = play(StopRule::Rounds(3), &[], "");
    assert_eq!(summary.rounds_played, 0);
    assert_eq!(summary.ended, EndReason::InputClosed);
}

#[test]
fn test_decisive_rounds_match_score_total() {
    let typed = "rock\npaper\nscissors\n".repeat(10);
    let mut input = Cursor::new(typed);
    let mut output = Vec::new();
    let summary = TextGame::new(StopRule::Rounds(30), RandomPlayer::seeded(3))
        .play(&mut input, &mut output)
        .unwrap();

    let decisive = summary.rounds.iter().filter(|r| r.outcome.is_decisive()).count() as u32;
    assert_eq!(summary.rounds_played, 30);
    assert_eq!(summary.user_wins + summary.computer_wins, decisive);
    assert!(summary.rounds.iter().all(|r| r.computer != Gesture::Nothing));
}

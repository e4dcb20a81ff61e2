//! Camera game loop
//!
//! One iteration per frame: read → draw → tick the engine → show → poll key.
//! The frame source and renderer are released on every exit path.

use tracing::{error, info, warn};
use crate::core::capture::{Frame, FrameSource, Position};
use crate::core::classifier::GestureClassifier;
use crate::core::clock::{Clock, SystemClock};
use crate::core::engine::{GameEngine, Tick};
use crate::core::render::Renderer;
use crate::core::resolver::ComputerPlayer;
use crate::types::{EndReason, GameConfig, GameState, Gesture, Result, RoundRecord, SessionSummary};

pub const QUIT_HINT: &str = "Press Q to quit";

/// Releases the camera and closes the display when dropped
struct DeviceGuard<'a, S: FrameSource, R: Renderer> {
    source: &'a mut S,
    renderer: &'a mut R,
}

impl<S: FrameSource, R: Renderer> Drop for DeviceGuard<'_, S, R> {
    fn drop(&mut self) {
        self.source.release();
        self.renderer.close();
    }
}

/// A camera game with its collaborators
pub struct CameraSession<S, C, R, P, K = SystemClock> {
    config: GameConfig,
    source: S,
    classifier: C,
    renderer: R,
    player: P,
    clock: K,
}

impl<S, C, R, P> CameraSession<S, C, R, P, SystemClock> {
    pub fn new(config: GameConfig, source: S, classifier: C, renderer: R, player: P) -> Self {
        Self { config, source, classifier, renderer, player, clock: SystemClock }
    }
}

impl<S, C, R, P, K> CameraSession<S, C, R, P, K> {
    pub fn with_clock<K2: Clock>(self, clock: K2) -> CameraSession<S, C, R, P, K2> {
        CameraSession {
            config: self.config,
            source: self.source,
            classifier: self.classifier,
            renderer: self.renderer,
            player: self.player,
            clock,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

impl<S, C, R, P, K> CameraSession<S, C, R, P, K>
where
    S: FrameSource,
    C: GestureClassifier,
    R: Renderer,
    P: ComputerPlayer,
    K: Clock,
{
    /// Play until the quit key. Collaborator errors end the game and are returned.
    pub fn run(&mut self) -> Result<SessionSummary> {
        self.config.validate()?;
        let Self { config, source, classifier, renderer, player, clock } = self;

        let mut engine = GameEngine::new(config, clock.now());
        info!(stop = %config.stop, threshold = config.confidence_threshold, "camera game started");

        let mut devices = DeviceGuard { source, renderer };
        let result = play(config, &mut devices, classifier, player, clock, &mut engine);
        // Display closed before anything is logged
        drop(devices);

        match result {
            Ok(ended) => {
                let summary = engine.into_summary(ended);
                info!(
                    user_wins = summary.user_wins,
                    computer_wins = summary.computer_wins,
                    rounds = summary.rounds_played,
                    "camera game ended"
                );
                Ok(summary)
            }
            Err(e) => {
                error!(kind = e.kind(), error = %e, "camera game aborted");
                Err(e)
            }
        }
    }
}

fn play<S, C, R, P, K>(
    config: &GameConfig,
    devices: &mut DeviceGuard<'_, S, R>,
    classifier: &mut C,
    player: &mut P,
    clock: &K,
    engine: &mut GameEngine,
) -> Result<EndReason>
where
    S: FrameSource,
    C: GestureClassifier,
    R: Renderer,
    P: ComputerPlayer,
    K: Clock,
{
    let mut last_frame: Option<Frame> = None;
    loop {
        let now = clock.now();
        let frame = if engine.is_over() {
            // No more capture, the final frame is redrawn
            let mut frame = match last_frame.take() {
                Some(frame) => frame,
                None => devices.source.read()?,
            };
            frame.clear_overlays();
            draw_game_over(&mut frame, engine.state());
            frame
        } else {
            let mut frame = devices.source.read()?;
            frame.draw_text(QUIT_HINT, Position::line(0));
            match engine.tick(now) {
                Tick::WarmUp | Tick::Reset | Tick::GameOver => {}
                Tick::Countdown { remaining_secs } => {
                    frame.draw_text(format!("Get ready to play in {}", remaining_secs), Position::line(1));
                }
                Tick::Capture => {
                    let classification = classifier.classify(&frame)?;
                    let user = classification.accept(config.confidence_threshold);
                    if user == Gesture::Nothing && classification.gesture != Gesture::Nothing {
                        warn!(
                            label = %classification.gesture,
                            confidence = classification.confidence,
                            "gesture below confidence threshold"
                        );
                    }
                    let computer = player.choose();
                    if let Some(record) = engine.record_round(computer, user, Some(classification.confidence)) {
                        draw_round(&mut frame, &record);
                    }
                }
                Tick::Showing(record) => draw_round(&mut frame, &record),
            }
            frame
        };

        devices.renderer.show(&frame)?;
        last_frame = Some(frame);

        if let Some(key) = devices.renderer.poll_key()? {
            if key.is_quit() {
                return Ok(EndReason::Quit);
            }
        }
    }
}

fn draw_round(frame: &mut Frame, record: &RoundRecord) {
    frame.draw_text(format!("Your choice: {}", record.user), Position::line(1));
    frame.draw_text(format!("Computer choice: {}", record.computer), Position::line(2));
    frame.draw_text(record.outcome.message(), Position::line(3));
}

fn draw_game_over(frame: &mut Frame, state: &GameState) {
    let lines = state.latest_round_lines().into_iter().chain(state.scoreboard_lines());
    for (row, line) in (1..).zip(lines) {
        frame.draw_text(line, Position::line(row));
    }
}

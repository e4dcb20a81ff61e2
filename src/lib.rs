//! Handsign: Rock-Paper-Scissors against the computer
//!
//! Camera game: frame source → gesture classifier → GameEngine → renderer.
//! Text game: stdin → Gesture → resolver → stdout.

pub mod core;
pub mod logging;
pub mod types;

// =============================================================================
// GAME LENGTH
// =============================================================================

/// Wins needed to end the camera game
pub const TARGET_WINS: u32 = 3;

/// Rounds played by the text game
pub const TEXT_ROUNDS: u32 = 3;

// =============================================================================
// ROUND TIMING - elapsed time since the round began
// =============================================================================

/// End of warm-up, start of countdown (seconds)
pub const WARMUP_END_SECS: u64 = 1;

/// End of countdown, the gesture is captured right after (seconds)
pub const COUNTDOWN_END_SECS: u64 = 4;

/// End of the result display, the round resets (seconds)
pub const DISPLAY_END_SECS: u64 = 7;

// =============================================================================
// CLASSIFIER
// =============================================================================

/// Minimum probability for a classifier label to count as a gesture
pub const CONFIDENCE_THRESHOLD: f32 = 0.5;

/// Default model labels file (`index label` per line)
pub const DEFAULT_LABELS_FILE: &str = "labels.txt";

// =============================================================================
// CAMERA + DISPLAY
// =============================================================================

/// Frames per second delivered by the synthetic camera
pub const CAMERA_FPS: u32 = 30;

/// Synthetic frame size, matches the classifier input
pub const FRAME_WIDTH: u32 = 224;
pub const FRAME_HEIGHT: u32 = 224;

/// Key that ends the camera game (either case)
pub const QUIT_KEY: char = 'q';

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";

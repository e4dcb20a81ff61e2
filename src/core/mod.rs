//! Core modules for Handsign

pub mod resolver;
pub mod engine;
pub mod clock;
pub mod labels;
pub mod classifier;
pub mod capture;
pub mod render;
pub mod session;
pub mod text_game;

pub use resolver::{resolve, choose_computer_gesture, ComputerPlayer, RandomPlayer};
pub use engine::{GameEngine, Tick};
pub use clock::{Clock, SystemClock};
pub use labels::LabelSet;
pub use classifier::{argmax, ArgmaxClassifier, Classification, GestureClassifier, PredictionModel, ReplayModel};
pub use capture::{Frame, FrameSource, Position, SyntheticCamera, TextOverlay};
pub use render::{Key, Renderer, TerminalRenderer};
pub use session::{CameraSession, QUIT_HINT};
pub use text_game::{prompt_gesture, Prompted, TextGame, PROMPT};

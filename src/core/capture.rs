//! Frames and frame sources

use std::thread::sleep;
use std::time::{Duration, Instant};
use tracing::debug;
use crate::{CAMERA_FPS, FRAME_HEIGHT, FRAME_WIDTH};
use crate::types::{GameError, Result};

/// Text anchor on a frame, in display cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub column: u16,
    pub row: u16,
}

impl Position {
    /// Left-aligned text line `row`
    pub fn line(row: u16) -> Self {
        Self { column: 2, row: row * 2 + 1 }
    }
}

/// Text drawn on top of a frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOverlay {
    pub text: String,
    pub position: Position,
}

/// One captured image plus the text drawn over it
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Sequence number from the source
    pub index: u64,
    pub width: u32,
    pub height: u32,
    /// Raw RGB pixels, row major; may be empty for sources without image data
    pub pixels: Vec<u8>,
    overlays: Vec<TextOverlay>,
}

impl Frame {
    pub fn new(index: u64, width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self { index, width, height, pixels, overlays: Vec::new() }
    }

    /// All-black frame
    pub fn blank(index: u64, width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * 3;
        Self::new(index, width, height, vec![0; len])
    }

    pub fn draw_text(&mut self, text: impl Into<String>, position: Position) {
        self.overlays.push(TextOverlay { text: text.into(), position });
    }

    pub fn overlays(&self) -> &[TextOverlay] {
        &self.overlays
    }

    /// Overlay text in drawing order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.overlays.iter().map(|o| o.text.as_str())
    }

    pub fn clear_overlays(&mut self) {
        self.overlays.clear();
    }
}

/// Camera-like source of frames
pub trait FrameSource {
    /// Block until the next frame is available
    fn read(&mut self) -> Result<Frame>;
    /// Give the device back. Reads after release fail.
    fn release(&mut self);
}

/// Camera stand-in yielding blank frames at a fixed rate
#[derive(Debug)]
pub struct SyntheticCamera {
    width: u32,
    height: u32,
    /// Zero means unpaced
    frame_interval: Duration,
    next_frame_at: Option<Instant>,
    index: u64,
    released: bool,
}

impl SyntheticCamera {
    pub fn new(fps: u32) -> Self {
        let frame_interval = if fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs(1) / fps
        };
        Self {
            width: FRAME_WIDTH,
            height: FRAME_HEIGHT,
            frame_interval,
            next_frame_at: None,
            index: 0,
            released: false,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl Default for SyntheticCamera {
    fn default() -> Self {
        Self::new(CAMERA_FPS)
    }
}

impl FrameSource for SyntheticCamera {
    fn read(&mut self) -> Result<Frame> {
        if self.released {
            return Err(GameError::Capture("camera already released".to_string()));
        }
        if let Some(due) = self.next_frame_at {
            let now = Instant::now();
            if due > now {
                sleep(due - now);
            }
        }
        self.next_frame_at = Some(Instant::now() + self.frame_interval);

        let frame = Frame::blank(self.index, self.width, self.height);
        self.index += 1;
        Ok(frame)
    }

    fn release(&mut self) {
        if !self.released {
            debug!(frames = self.index, "camera released");
        }
        self.released = true;
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_frames_are_sequenced() {
        let mut camera = SyntheticCamera::new(0).with_size(4, 2);
        let first = camera.read().unwrap();
        let second = camera.read().unwrap();
        assert_eq!(first.index, 0);
        assert_eq!(second.index, 1);
        assert_eq!(first.pixels.len(), 4 * 2 * 3);
    }

    #[test]
    fn test_read_after_release_fails() {
        let mut camera = SyntheticCamera::new(0);
        camera.release();
        let err = camera.read().unwrap_err();
        assert_eq!(err.kind(), "CAPTURE");
        assert!(camera.is_released());
    }

    #[test]
    fn test_frames_are_paced() {
        let mut camera = SyntheticCamera::new(50).with_size(1, 1);
        let start = Instant::now();
        for _ in 0..3 {
            camera.read().unwrap();
        }
        // First frame is immediate, the next two wait 20ms each
        assert!(start.elapsed() >= Duration::from_millis(40));
    }

    #[test]
    fn test_draw_text_keeps_order() {
        let mut frame = Frame::blank(0, 1, 1);
        frame.draw_text("Press Q to quit", Position::line(0));
        frame.draw_text("Get ready to play in 3", Position::line(1));
        let texts: Vec<_> = frame.texts().collect();
        assert_eq!(texts, vec!["Press Q to quit", "Get ready to play in 3"]);
        frame.clear_overlays();
        assert!(frame.overlays().is_empty());
    }
}

//! Labels file: maps classifier output indices to gestures
//!
//! One label per line, `index label`, separated by whitespace. The line
//! order is the tensor output order and the index must match it:
//!
//! ```text
//! 0 Rock
//! 1 Paper
//! 2 Scissors
//! 3 Nothing
//! ```

use std::path::Path;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;
use crate::types::{GameError, Gesture, Result};

lazy_static! {
    static ref RE_LABEL_LINE: Regex = Regex::new(r"^\s*(\d+)\s+(\S+)\s*$").unwrap();
}

/// Ordered gestures, one per classifier output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSet {
    gestures: Vec<Gesture>,
}

impl LabelSet {
    pub fn new(gestures: Vec<Gesture>) -> Result<Self> {
        if gestures.is_empty() {
            return Err(GameError::ModelLoad("label set is empty".to_string()));
        }
        Ok(Self { gestures })
    }

    /// Parse labels file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let mut gestures = Vec::new();
        for (line_no, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let caps = RE_LABEL_LINE.captures(line).ok_or_else(|| {
                GameError::ModelLoad(format!("line {}: expected 'index label', got {:?}", line_no + 1, line))
            })?;

            let index: usize = caps[1].parse().map_err(|_| {
                GameError::ModelLoad(format!("line {}: index {:?} out of range", line_no + 1, &caps[1]))
            })?;
            if index != gestures.len() {
                return Err(GameError::ModelLoad(format!(
                    "line {}: index {} out of order, expected {}",
                    line_no + 1,
                    index,
                    gestures.len()
                )));
            }

            let gesture = Gesture::from_name(&caps[2]).ok_or_else(|| {
                GameError::ModelLoad(format!("line {}: unknown label {:?}", line_no + 1, &caps[2]))
            })?;
            gestures.push(gesture);
        }
        Self::new(gestures)
    }

    /// Read and parse a labels file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            GameError::ModelLoad(format!("cannot read labels file {}: {}", path.display(), e))
        })?;
        let labels = Self::parse(&contents)?;
        debug!(path = %path.display(), count = labels.len(), "loaded model labels");
        Ok(labels)
    }

    /// Gesture for a classifier output index
    pub fn gesture_at(&self, index: usize) -> Option<Gesture> {
        self.gestures.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.gestures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gestures.is_empty()
    }

    pub fn gestures(&self) -> &[Gesture] {
        &self.gestures
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_standard_file() {
        let labels = LabelSet::parse("0 Rock\n1 Paper\n2 Scissors\n3 Nothing\n").unwrap();
        assert_eq!(
            labels.gestures(),
            &[Gesture::Rock, Gesture::Paper, Gesture::Scissors, Gesture::Nothing]
        );
        assert_eq!(labels.gesture_at(3), Some(Gesture::Nothing));
        assert_eq!(labels.gesture_at(4), None);
    }

    #[test]
    fn test_parse_tolerates_case_blank_lines_and_crlf() {
        let labels = LabelSet::parse("0 rock\r\n\r\n1 PAPER\r\n  2   scissors  \r\n").unwrap();
        assert_eq!(labels.gestures(), &[Gesture::Rock, Gesture::Paper, Gesture::Scissors]);
    }

    #[test]
    fn test_parse_rejects_missing_index() {
        let err = LabelSet::parse("Rock\n").unwrap_err();
        assert_eq!(err.kind(), "MODEL_LOAD");
    }

    #[test]
    fn test_parse_rejects_out_of_order_index() {
        let err = LabelSet::parse("0 Rock\n2 Paper\n").unwrap_err();
        assert!(err.to_string().contains("out of order"));
    }

    #[test]
    fn test_parse_rejects_unknown_label() {
        let err = LabelSet::parse("0 Rock\n1 Lizard\n").unwrap_err();
        assert!(err.to_string().contains("Lizard"));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(LabelSet::parse("\n\n").is_err());
    }

    #[test]
    fn test_load_missing_file_is_model_load_error() {
        let err = LabelSet::load("/definitely/not/here/labels.txt").unwrap_err();
        assert_eq!(err.kind(), "MODEL_LOAD");
    }
}

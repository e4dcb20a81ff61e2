//! Gesture classification behind a capability trait
//!
//! The game only sees `GestureClassifier`. `ArgmaxClassifier` is the
//! "read labels, run model, take argmax" pattern over any `PredictionModel`.

use std::collections::VecDeque;
use std::path::Path;
use tracing::debug;
use crate::core::capture::Frame;
use crate::core::labels::LabelSet;
use crate::types::{GameError, Gesture, Result};

/// Best label for a frame and its probability
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub gesture: Gesture,
    pub confidence: f32,
}

impl Classification {
    pub fn new(gesture: Gesture, confidence: f32) -> Self {
        Self { gesture, confidence }
    }

    /// The label if confident enough, otherwise Nothing
    pub fn accept(&self, threshold: f32) -> Gesture {
        if self.confidence >= threshold {
            self.gesture
        } else {
            Gesture::Nothing
        }
    }
}

pub trait GestureClassifier {
    fn classify(&mut self, frame: &Frame) -> Result<Classification>;
}

/// Image model producing one probability per label
pub trait PredictionModel {
    fn predict(&mut self, frame: &Frame) -> Result<Vec<f32>>;
}

/// Index and value of the largest entry, NaN entries ignored
pub fn argmax(prediction: &[f32]) -> Option<(usize, f32)> {
    prediction
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, p)| !p.is_nan())
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
}

/// Labels + model, classifying by highest probability
#[derive(Debug)]
pub struct ArgmaxClassifier<M> {
    labels: LabelSet,
    model: M,
}

impl<M: PredictionModel> ArgmaxClassifier<M> {
    pub fn new(labels: LabelSet, model: M) -> Self {
        Self { labels, model }
    }

    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }
}

impl<M: PredictionModel> GestureClassifier for ArgmaxClassifier<M> {
    fn classify(&mut self, frame: &Frame) -> Result<Classification> {
        let prediction = self.model.predict(frame)?;
        if prediction.len() != self.labels.len() {
            return Err(GameError::Inference(format!(
                "model produced {} probabilities for {} labels",
                prediction.len(),
                self.labels.len()
            )));
        }
        let (index, confidence) = argmax(&prediction)
            .ok_or_else(|| GameError::Inference("prediction has no usable probabilities".to_string()))?;
        let gesture = self
            .labels
            .gesture_at(index)
            .ok_or_else(|| GameError::Inference(format!("no label for output {}", index)))?;
        debug!(frame = frame.index, %gesture, confidence, "classified frame");
        Ok(Classification::new(gesture, confidence))
    }
}

/// Model backend that replays recorded predictions in order, cycling
///
/// File format: one JSON array of probabilities per line, blank lines ignored.
#[derive(Debug, Clone)]
pub struct ReplayModel {
    predictions: VecDeque<Vec<f32>>,
}

impl ReplayModel {
    pub fn new(predictions: Vec<Vec<f32>>) -> Result<Self> {
        if predictions.is_empty() {
            return Err(GameError::ModelLoad("no recorded predictions".to_string()));
        }
        Ok(Self { predictions: predictions.into() })
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let predictions = contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_no, line)| {
                serde_json::from_str::<Vec<f32>>(line).map_err(|e| {
                    GameError::ModelLoad(format!("prediction line {}: {}", line_no + 1, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(predictions)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            GameError::ModelLoad(format!("cannot read predictions {}: {}", path.display(), e))
        })?;
        let model = Self::parse(&contents)?;
        debug!(path = %path.display(), count = model.len(), "loaded recorded predictions");
        Ok(model)
    }

    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }
}

impl PredictionModel for ReplayModel {
    fn predict(&mut self, _frame: &Frame) -> Result<Vec<f32>> {
        let next = self
            .predictions
            .pop_front()
            .ok_or_else(|| GameError::Inference("no recorded predictions".to_string()))?;
        self.predictions.push_back(next.clone());
        Ok(next)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> LabelSet {
        LabelSet::parse("0 Rock\n1 Paper\n2 Scissors\n3 Nothing").unwrap()
    }

    fn frame() -> Frame {
        Frame::blank(0, 1, 1)
    }

    #[test]
    fn test_argmax_picks_highest() {
        assert_eq!(argmax(&[0.1, 0.7, 0.2]), Some((1, 0.7)));
        assert_eq!(argmax(&[f32::NAN, 0.3]), Some((1, 0.3)));
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn test_accept_respects_threshold() {
        let c = Classification::new(Gesture::Paper, 0.5);
        assert_eq!(c.accept(0.5), Gesture::Paper);
        assert_eq!(c.accept(0.95), Gesture::Nothing);
    }

    #[test]
    fn test_argmax_classifier_maps_through_labels() {
        let model = ReplayModel::new(vec![vec![0.05, 0.05, 0.8, 0.1]]).unwrap();
        let mut classifier = ArgmaxClassifier::new(labels(), model);
        let c = classifier.classify(&frame()).unwrap();
        assert_eq!(c.gesture, Gesture::Scissors);
        assert!((c.confidence - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_length_mismatch_is_inference_error() {
        let model = ReplayModel::new(vec![vec![0.5, 0.5]]).unwrap();
        let mut classifier = ArgmaxClassifier::new(labels(), model);
        let err = classifier.classify(&frame()).unwrap_err();
        assert_eq!(err.kind(), "INFERENCE");
    }

    #[test]
    fn test_replay_cycles() {
        let mut model = ReplayModel::parse("[1.0, 0.0]\n\n[0.0, 1.0]\n").unwrap();
        assert_eq!(model.len(), 2);
        assert_eq!(model.predict(&frame()).unwrap(), vec![1.0, 0.0]);
        assert_eq!(model.predict(&frame()).unwrap(), vec![0.0, 1.0]);
        assert_eq!(model.predict(&frame()).unwrap(), vec![1.0, 0.0]);
    }

    #[test]
    fn test_replay_rejects_bad_lines() {
        let err = ReplayModel::parse("[0.1, 0.9]\nnot json\n").unwrap_err();
        assert_eq!(err.kind(), "MODEL_LOAD");
        assert!(err.to_string().contains("line 2"));
        assert!(ReplayModel::parse("").is_err());
    }
}

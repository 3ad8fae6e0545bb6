//! Two-layer perceptron evaluation for hand-drawn digits
//!
//! The model is a fixed 784-128-10 network with sigmoid activation on both
//! layers, trained offline and shipped as a flat little-endian f32 blob.
//! One classification cycle is normalize -> propagate -> decide, run
//! synchronously on every stroke update.

pub mod decision;
pub mod error;
pub mod features;
pub mod network;
pub mod weights;

use std::sync::Arc;

use serde::Serialize;

use decision::{decide, Prediction};
use error::{ModelError, ModelResult};
use features::{normalize, CANVAS_BYTES};
use network::{Model, OUTPUT_SIZE};
use weights::load_model;

/// Result of one classification cycle
///
/// Carries the raw sigmoid activation of every class alongside the winner,
/// so the display side can scale its ten bars without a second call. The
/// activations are independent per class and do not sum to one.
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    /// Sigmoid activation per digit class, each in (0,1)
    pub outputs: [f32; OUTPUT_SIZE],
    /// Winning class and its activation
    pub prediction: Prediction,
}

/// Digit recognizer holding the loaded model
///
/// The model is wrapped in `Arc` so cloned recognizers share one copy of
/// the weights (~400KB). "No model yet" is an explicit state: [`classify`]
/// answers [`ModelError::NotReady`] until a blob has loaded successfully.
///
/// [`classify`]: Recognizer::classify
#[derive(Clone, Default)]
pub struct Recognizer {
    model: Option<Arc<Model>>,
}

impl Recognizer {
    /// Create a recognizer with no model loaded
    pub fn new() -> Self {
        Recognizer { model: None }
    }

    /// Create a recognizer with zero weights (for testing)
    pub fn zero() -> Self {
        Recognizer {
            model: Some(Arc::new(Model::zero())),
        }
    }

    /// Load a model from a flat weight blob, replacing any previous model
    ///
    /// A rejected blob leaves the recognizer unloaded even if a valid model
    /// was resident before, so every later [`classify`] call reports
    /// [`ModelError::NotReady`] until a valid blob arrives.
    ///
    /// [`classify`]: Recognizer::classify
    pub fn load(&mut self, bytes: &[u8]) -> ModelResult<()> {
        self.model = None;
        let model = load_model(bytes)?;
        self.model = Some(Arc::new(model));
        Ok(())
    }

    /// True once a valid model is resident
    pub fn is_loaded(&self) -> bool {
        self.model.is_some()
    }

    /// Shared handle to the loaded model, if any
    pub fn model(&self) -> Option<Arc<Model>> {
        self.model.clone()
    }

    /// Classify one 28x28 RGBA capture of the drawing surface
    pub fn classify(&self, rgba: &[u8; CANVAS_BYTES]) -> ModelResult<Classification> {
        let model = self.model.as_ref().ok_or(ModelError::NotReady)?;
        let input = normalize(rgba);
        let outputs = model.propagate(&input);
        let prediction = decide(&outputs);
        Ok(Classification { outputs, prediction })
    }
}

#[cfg(test)]
mod tests {
    use super::weights::encode_model;
    use super::*;

    #[test]
    fn test_classify_before_load_is_not_ready() {
        let recognizer = Recognizer::new();
        let result = recognizer.classify(&[255u8; CANVAS_BYTES]);
        assert!(matches!(result, Err(ModelError::NotReady)));
    }

    #[test]
    fn test_zero_recognizer_uniform_output() {
        let recognizer = Recognizer::zero();
        let classification = recognizer.classify(&[255u8; CANVAS_BYTES]).unwrap();

        // Zero weights: every hidden unit and every output is sigmoid(0)
        for &out in &classification.outputs {
            assert_eq!(out, 0.5);
        }
        assert_eq!(classification.prediction.digit, 0);
        assert_eq!(classification.prediction.score, 0.5);
    }

    #[test]
    fn test_failed_load_leaves_recognizer_unloaded() {
        let mut recognizer = Recognizer::zero();
        assert!(recognizer.is_loaded());

        let result = recognizer.load(&[0u8; 12]);
        assert!(result.is_err());
        assert!(!recognizer.is_loaded());
        assert!(matches!(
            recognizer.classify(&[255u8; CANVAS_BYTES]),
            Err(ModelError::NotReady)
        ));
    }

    #[test]
    fn test_load_valid_blob() {
        let mut recognizer = Recognizer::new();
        let blob = encode_model(&Model::zero());

        recognizer.load(&blob).unwrap();
        assert!(recognizer.is_loaded());
    }

    #[test]
    fn test_clones_share_one_model() {
        let recognizer1 = Recognizer::zero();
        let recognizer2 = recognizer1.clone();

        let model1 = recognizer1.model().unwrap();
        let model2 = recognizer2.model().unwrap();
        assert!(Arc::ptr_eq(&model1, &model2));
    }
}

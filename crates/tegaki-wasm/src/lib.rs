//! Wasm bindings for the digit recognizer
//!
//! The browser keeps the canvas, pointer events and result rendering. It
//! fetches the model blob once at startup, hands the bytes over through
//! [`RecognizerHandle::load_model`], then calls
//! [`RecognizerHandle::classify`] with a fresh 28x28 RGBA capture on every
//! stroke update.

use tegaki_core::{Recognizer, CANVAS_BYTES};
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Recognizer handle exposed to JavaScript
#[wasm_bindgen]
pub struct RecognizerHandle {
    inner: Recognizer,
}

impl Default for RecognizerHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl RecognizerHandle {
    #[wasm_bindgen(constructor)]
    pub fn new() -> RecognizerHandle {
        RecognizerHandle {
            inner: Recognizer::new(),
        }
    }

    /// Load the fetched model blob
    ///
    /// Any failure leaves the handle unloaded; the page should show its
    /// "model unavailable" state and may retry with a fresh fetch.
    #[wasm_bindgen]
    pub fn load_model(&mut self, bytes: Vec<u8>) -> Result<(), JsValue> {
        load_blob(&mut self.inner, &bytes).map_err(|e| JsValue::from_str(&e))
    }

    /// Classify one canvas capture, returning the classification as JSON
    ///
    /// `rgba` must be the 28x28 RGBA capture of the drawing surface
    /// (3136 bytes); the caller rasterizes strokes to that grid before
    /// capturing.
    #[wasm_bindgen]
    pub fn classify(&self, rgba: Vec<u8>) -> Result<String, JsValue> {
        classify_capture(&self.inner, &rgba).map_err(|e| JsValue::from_str(&e))
    }

    /// True once a model blob has been accepted
    #[wasm_bindgen(getter)]
    pub fn is_loaded(&self) -> bool {
        self.inner.is_loaded()
    }
}

/// Boundary-side load: stringifies the core error for the console
fn load_blob(recognizer: &mut Recognizer, bytes: &[u8]) -> Result<(), String> {
    recognizer.load(bytes).map_err(|e| e.to_string())
}

/// Boundary-side classify: checks the capture shape the core enforces by
/// type, then serializes the classification for the page script
fn classify_capture(recognizer: &Recognizer, rgba: &[u8]) -> Result<String, String> {
    let capture: &[u8; CANVAS_BYTES] = rgba
        .try_into()
        .map_err(|_| format!("expected {CANVAS_BYTES} canvas bytes, got {}", rgba.len()))?;

    let classification = recognizer.classify(capture).map_err(|e| e.to_string())?;
    serde_json::to_string(&classification).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tegaki_core::{encode_model, Model};

    fn loaded_recognizer() -> Recognizer {
        let mut recognizer = Recognizer::new();
        load_blob(&mut recognizer, &encode_model(&Model::zero())).unwrap();
        recognizer
    }

    #[test]
    fn test_classify_before_load_is_an_error() {
        let recognizer = Recognizer::new();
        let result = classify_capture(&recognizer, &[255u8; CANVAS_BYTES]);
        assert_eq!(result.unwrap_err(), "no model loaded");
    }

    #[test]
    fn test_wrong_capture_size_is_an_error() {
        let recognizer = loaded_recognizer();
        let result = classify_capture(&recognizer, &[255u8; CANVAS_BYTES - 4]);
        assert!(result.unwrap_err().contains("canvas bytes"));
    }

    #[test]
    fn test_classify_returns_json_payload() {
        let recognizer = loaded_recognizer();
        let json = classify_capture(&recognizer, &[255u8; CANVAS_BYTES]).unwrap();
        assert!(json.contains("\"outputs\""));
        assert!(json.contains("\"digit\":0"));
    }

    #[test]
    fn test_bad_blob_is_reported() {
        let mut recognizer = Recognizer::new();
        assert!(load_blob(&mut recognizer, &[0u8; 10]).is_err());
        assert!(!recognizer.is_loaded());
    }
}

// WebAssembly specific tests
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_wasm_constructor() {
        let handle = RecognizerHandle::new();
        assert!(!handle.is_loaded());
    }

    #[wasm_bindgen_test]
    fn test_wasm_classify_unloaded() {
        let handle = RecognizerHandle::new();
        assert!(handle.classify(vec![255u8; CANVAS_BYTES]).is_err());
    }

    #[wasm_bindgen_test]
    fn test_wasm_load_and_classify() {
        use tegaki_core::{encode_model, Model};

        let mut handle = RecognizerHandle::new();
        handle.load_model(encode_model(&Model::zero())).unwrap();
        assert!(handle.is_loaded());
        assert!(handle.classify(vec![255u8; CANVAS_BYTES]).is_ok());
    }
}

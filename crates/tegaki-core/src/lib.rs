//! Core library for the tegaki handwritten-digit recognizer
//!
//! Wraps a fixed, pre-trained 784-128-10 sigmoid perceptron: decoding the
//! flat weight blob exported by the trainer, normalizing canvas captures
//! into network input, and running the forward pass. The drawing surface
//! and result rendering live outside this crate and talk to it through
//! [`Recognizer`].

pub mod mlp;

pub use mlp::decision::{decide, Prediction};
pub use mlp::error::{ModelError, ModelResult};
pub use mlp::features::{normalize, CANVAS_BYTES, CANVAS_SIZE};
pub use mlp::network::{Model, HIDDEN_SIZE, INPUT_SIZE, OUTPUT_SIZE};
pub use mlp::weights::{decode_weights, encode_model, load_model, WEIGHTS_BYTES, WEIGHTS_LEN};
pub use mlp::{Classification, Recognizer};

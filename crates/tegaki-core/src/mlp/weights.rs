//! Weight blob management
//!
//! Handles decoding and validation of the flat weight blob exported by the
//! trainer. The blob is a bare little-endian f32 sequence with no header:
//! 128 hidden units of `bias + 784 weights` each, then 10 output units of
//! `bias + 128 weights` each.

use log::{debug, warn};

use super::error::{ModelError, ModelResult};
use super::network::{Model, HIDDEN_SIZE, INPUT_SIZE, OUTPUT_SIZE};

/// Total f32 count of a valid blob
pub const WEIGHTS_LEN: usize = HIDDEN_SIZE * (1 + INPUT_SIZE) + OUTPUT_SIZE * (1 + HIDDEN_SIZE);
/// Byte length of a valid blob
pub const WEIGHTS_BYTES: usize = WEIGHTS_LEN * 4;

/// Flat stride of one hidden unit (bias followed by its input weights)
const HIDDEN_STRIDE: usize = 1 + INPUT_SIZE;
/// Flat offset of the first output unit
const OUTPUT_OFFSET: usize = HIDDEN_SIZE * HIDDEN_STRIDE;
/// Flat stride of one output unit
const OUTPUT_STRIDE: usize = 1 + HIDDEN_SIZE;

/// Decode a byte buffer as a little-endian f32 sequence
pub fn decode_weights(bytes: &[u8]) -> ModelResult<Vec<f32>> {
    if bytes.len() % 4 != 0 {
        warn!("rejecting weight blob: {} bytes is not a multiple of 4", bytes.len());
        return Err(ModelError::TruncatedBlob { len: bytes.len() });
    }

    Ok(bytes
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

/// Parse and validate a flat weight blob into a structured model
///
/// Pure and idempotent: the same bytes always produce the same model or
/// the same error. Once the length check passes the reshape is total, so
/// a partially constructed model can never escape.
pub fn load_model(bytes: &[u8]) -> ModelResult<Model> {
    let flat = decode_weights(bytes)?;
    if flat.len() != WEIGHTS_LEN {
        warn!("rejecting weight blob: {} weights, expected {WEIGHTS_LEN}", flat.len());
        return Err(ModelError::InvalidLength {
            expected: WEIGHTS_LEN,
            actual: flat.len(),
        });
    }

    let mut model = Model::zero();
    for i in 0..HIDDEN_SIZE {
        let base = i * HIDDEN_STRIDE;
        model.hidden_biases[i] = flat[base];
        model.hidden_weights[i * INPUT_SIZE..(i + 1) * INPUT_SIZE]
            .copy_from_slice(&flat[base + 1..base + 1 + INPUT_SIZE]);
    }
    for k in 0..OUTPUT_SIZE {
        let base = OUTPUT_OFFSET + k * OUTPUT_STRIDE;
        model.output_biases[k] = flat[base];
        model.output_weights[k * HIDDEN_SIZE..(k + 1) * HIDDEN_SIZE]
            .copy_from_slice(&flat[base + 1..base + 1 + HIDDEN_SIZE]);
    }

    debug!("loaded {INPUT_SIZE}-{HIDDEN_SIZE}-{OUTPUT_SIZE} model, {} weights", flat.len());
    Ok(model)
}

/// Serialize a model back to the flat blob layout
///
/// Inverse of [`load_model`]; used by fixture generators and round-trip
/// tests.
pub fn encode_model(model: &Model) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(WEIGHTS_BYTES);
    for i in 0..HIDDEN_SIZE {
        bytes.extend_from_slice(&model.hidden_biases[i].to_le_bytes());
        for w in &model.hidden_weights[i * INPUT_SIZE..(i + 1) * INPUT_SIZE] {
            bytes.extend_from_slice(&w.to_le_bytes());
        }
    }
    for k in 0..OUTPUT_SIZE {
        bytes.extend_from_slice(&model.output_biases[k].to_le_bytes());
        for w in &model.output_weights[k * HIDDEN_SIZE..(k + 1) * HIDDEN_SIZE] {
            bytes.extend_from_slice(&w.to_le_bytes());
        }
    }
    bytes
}

//! Canvas capture normalization
//!
//! Converts the 28x28 RGBA capture of the drawing surface into the
//! network's input vector.

use super::network::INPUT_SIZE;

/// Drawing surface edge length in pixels
pub const CANVAS_SIZE: usize = 28;
/// Byte length of one RGBA capture of the surface
pub const CANVAS_BYTES: usize = CANVAS_SIZE * CANVAS_SIZE * 4;

/// Convert an RGBA capture into ink intensities
///
/// Each pixel becomes `1 - mean(r,g,b)/255`: the white background maps to
/// 0.0 and black ink to 1.0. The alpha channel is ignored, and pixel order
/// (row-major, top-left origin) carries straight through to the input
/// vector. The capture shape is fixed by the argument type; callers that
/// hold a plain slice convert with `try_into` first.
pub fn normalize(rgba: &[u8; CANVAS_BYTES]) -> [f32; INPUT_SIZE] {
    let mut input = [0.0f32; INPUT_SIZE];
    for (value, px) in input.iter_mut().zip(rgba.chunks_exact(4)) {
        let mean = (px[0] as f32 + px[1] as f32 + px[2] as f32) / 3.0;
        *value = 1.0 - mean / 255.0;
    }
    input
}

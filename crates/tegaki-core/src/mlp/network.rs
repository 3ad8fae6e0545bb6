//! Two-layer perceptron for digit classification
//!
//! Implements the 784-128-10 architecture with sigmoid activation on both
//! layers. The output layer is sigmoid rather than softmax: the shipped
//! weights were trained against per-class sigmoids, so the ten outputs are
//! independent activations, not a probability distribution.

/// Pixels in one 28x28 input image
pub const INPUT_SIZE: usize = 784;
/// Hidden layer width
pub const HIDDEN_SIZE: usize = 128;
/// Output classes (digits 0-9)
pub const OUTPUT_SIZE: usize = 10;

/// Logistic function, mapping any finite input into (0,1)
#[inline]
fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Two-layer perceptron weights
///
/// Constructed once from a validated blob and immutable afterwards.
pub struct Model {
    /// Hidden layer weights [128][784]
    pub hidden_weights: Vec<f32>,
    /// Hidden layer biases [128]
    pub hidden_biases: Vec<f32>,
    /// Output layer weights [10][128]
    pub output_weights: Vec<f32>,
    /// Output layer biases [10]
    pub output_biases: Vec<f32>,
}

impl Model {
    /// Create zero-initialized model
    pub fn zero() -> Self {
        Model {
            hidden_weights: vec![0.0; HIDDEN_SIZE * INPUT_SIZE],
            hidden_biases: vec![0.0; HIDDEN_SIZE],
            output_weights: vec![0.0; OUTPUT_SIZE * HIDDEN_SIZE],
            output_biases: vec![0.0; OUTPUT_SIZE],
        }
    }

    /// Forward propagation through the network
    pub fn propagate(&self, input: &[f32; INPUT_SIZE]) -> [f32; OUTPUT_SIZE] {
        // Hidden layer
        let mut hidden = [0.0f32; HIDDEN_SIZE];
        affine_propagate::<INPUT_SIZE, HIDDEN_SIZE>(
            input,
            &self.hidden_weights,
            &self.hidden_biases,
            &mut hidden,
        );
        for h in hidden.iter_mut() {
            *h = sigmoid(*h);
        }

        // Output layer
        let mut output = [0.0f32; OUTPUT_SIZE];
        affine_propagate::<HIDDEN_SIZE, OUTPUT_SIZE>(
            &hidden,
            &self.output_weights,
            &self.output_biases,
            &mut output,
        );
        for o in output.iter_mut() {
            *o = sigmoid(*o);
        }

        output
    }
}

/// Affine transformation (matrix multiply + bias)
fn affine_propagate<const IN: usize, const OUT: usize>(
    input: &[f32],
    weights: &[f32],
    biases: &[f32],
    output: &mut [f32],
) {
    debug_assert_eq!(input.len(), IN);
    debug_assert_eq!(weights.len(), IN * OUT);
    debug_assert_eq!(biases.len(), OUT);
    debug_assert_eq!(output.len(), OUT);

    output.copy_from_slice(biases);

    for i in 0..OUT {
        let mut sum = output[i];
        for j in 0..IN {
            sum += input[j] * weights[i * IN + j];
        }
        output[i] = sum;
    }
}

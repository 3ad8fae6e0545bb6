//! Generate a synthetic digit-model weight blob
//!
//! Useful for demo pages and loader fixtures before a trained model is
//! available.
//!
//! Usage:
//!   # All-zero model (uniform 0.5 output for any drawing)
//!   model_gen --out zero_model.bin --zero
//!
//!   # Reproducible random weights
//!   model_gen --out random_model.bin --seed 42

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use tegaki_core::{encode_model, Model};

#[derive(Parser, Debug)]
#[command(about = "Generate a synthetic digit-model weight blob")]
struct Cli {
    /// Output path for the blob
    #[arg(long, value_name = "FILE")]
    out: PathBuf,

    /// Write an all-zero model instead of random weights
    #[arg(long, conflicts_with = "seed")]
    zero: bool,

    /// RNG seed for reproducible random weights
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

/// Fill every section with uniform values in [-0.5, 0.5)
fn random_model(seed: u64) -> Model {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut model = Model::zero();
    for w in model
        .hidden_weights
        .iter_mut()
        .chain(model.hidden_biases.iter_mut())
        .chain(model.output_weights.iter_mut())
        .chain(model.output_biases.iter_mut())
    {
        *w = rng.random_range(-0.5..0.5);
    }
    model
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let model = if cli.zero {
        Model::zero()
    } else {
        random_model(cli.seed)
    };

    let bytes = encode_model(&model);
    fs::write(&cli.out, &bytes)
        .with_context(|| format!("failed to write {}", cli.out.display()))?;
    info!("wrote {} bytes to {}", bytes.len(), cli.out.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tegaki_core::{load_model, WEIGHTS_BYTES};

    #[test]
    fn test_random_model_is_reproducible() {
        let a = random_model(42);
        let b = random_model(42);
        assert_eq!(a.hidden_weights, b.hidden_weights);
        assert_eq!(a.output_biases, b.output_biases);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = random_model(1);
        let b = random_model(2);
        assert_ne!(a.hidden_weights, b.hidden_weights);
    }

    #[test]
    fn test_generated_blob_loads() {
        let bytes = encode_model(&random_model(7));
        assert_eq!(bytes.len(), WEIGHTS_BYTES);
        assert!(load_model(&bytes).is_ok());
    }

    #[test]
    fn test_weights_stay_in_range() {
        let model = random_model(3);
        assert!(model.hidden_weights.iter().all(|w| (-0.5..0.5).contains(w)));
        assert!(model.output_weights.iter().all(|w| (-0.5..0.5).contains(w)));
    }
}

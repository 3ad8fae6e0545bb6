//! Inspect a digit-model weight blob
//!
//! Usage:
//!   model_inspect --path satoimo_mnist_model.bin
//!
//!   # JSON output mode
//!   model_inspect --path satoimo_mnist_model.bin --json

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use sha2::{Digest, Sha256};

use tegaki_core::{load_model, Model, HIDDEN_SIZE, INPUT_SIZE, OUTPUT_SIZE};

#[derive(Parser, Debug)]
#[command(about = "Inspect a digit-model weight blob")]
struct Cli {
    /// Path to the flat f32 weight blob
    #[arg(long, value_name = "FILE")]
    path: PathBuf,

    /// Emit JSON instead of human-readable text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Serialize)]
struct InspectReport {
    path: String,
    size_bytes: usize,
    weight_count: usize,
    dimensions: DimensionReport,
    sections: SectionReport,
    sha256: String,
}

#[derive(Debug, Clone, Serialize)]
struct DimensionReport {
    input: usize,
    hidden: usize,
    output: usize,
}

#[derive(Debug, Clone, Serialize)]
struct SectionReport {
    hidden_weights: RangeSummary,
    hidden_biases: RangeSummary,
    output_weights: RangeSummary,
    output_biases: RangeSummary,
}

#[derive(Debug, Clone, Serialize)]
struct RangeSummary {
    min: f32,
    max: f32,
}

fn summarize(values: &[f32]) -> RangeSummary {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    RangeSummary { min, max }
}

fn build_report(path: &str, bytes: &[u8], model: &Model) -> InspectReport {
    InspectReport {
        path: path.to_string(),
        size_bytes: bytes.len(),
        weight_count: bytes.len() / 4,
        dimensions: DimensionReport {
            input: INPUT_SIZE,
            hidden: HIDDEN_SIZE,
            output: OUTPUT_SIZE,
        },
        sections: SectionReport {
            hidden_weights: summarize(&model.hidden_weights),
            hidden_biases: summarize(&model.hidden_biases),
            output_weights: summarize(&model.output_weights),
            output_biases: summarize(&model.output_biases),
        },
        sha256: hex::encode(Sha256::digest(bytes)),
    }
}

fn print_text(report: &InspectReport) {
    println!("path: {}", report.path);
    println!("size: {} bytes ({} weights)", report.size_bytes, report.weight_count);
    println!(
        "architecture: {}-{}-{}",
        report.dimensions.input, report.dimensions.hidden, report.dimensions.output
    );
    println!(
        "hidden weights: [{:.6}, {:.6}]",
        report.sections.hidden_weights.min, report.sections.hidden_weights.max
    );
    println!(
        "hidden biases:  [{:.6}, {:.6}]",
        report.sections.hidden_biases.min, report.sections.hidden_biases.max
    );
    println!(
        "output weights: [{:.6}, {:.6}]",
        report.sections.output_weights.min, report.sections.output_weights.max
    );
    println!(
        "output biases:  [{:.6}, {:.6}]",
        report.sections.output_biases.min, report.sections.output_biases.max
    );
    println!("sha256: {}", report.sha256);
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let bytes = fs::read(&cli.path)
        .with_context(|| format!("failed to read {}", cli.path.display()))?;
    let model = load_model(&bytes)
        .with_context(|| format!("invalid weight blob: {}", cli.path.display()))?;

    let report = build_report(&cli.path.display().to_string(), &bytes, &model);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&report);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tegaki_core::{encode_model, WEIGHTS_BYTES, WEIGHTS_LEN};

    #[test]
    fn test_report_on_zero_model() {
        let model = Model::zero();
        let bytes = encode_model(&model);

        let report = build_report("zero.bin", &bytes, &model);
        assert_eq!(report.size_bytes, WEIGHTS_BYTES);
        assert_eq!(report.weight_count, WEIGHTS_LEN);
        assert_eq!(report.sections.hidden_weights.min, 0.0);
        assert_eq!(report.sections.output_biases.max, 0.0);
        assert_eq!(report.sha256.len(), 64);
    }

    #[test]
    fn test_summarize_range() {
        let summary = summarize(&[0.5, -1.25, 3.0, 0.0]);
        assert_eq!(summary.min, -1.25);
        assert_eq!(summary.max, 3.0);
    }
}

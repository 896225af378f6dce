//! Score command handler.
//!
//! Implements the `score` subcommand: load one attribute record, evaluate it
//! once, render the result. The engine is called exactly once per analysis;
//! nothing rendered here feeds back into it.

use std::io::Read as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::error::AgroScoreError;
use crate::model::FarmAttributes;
use crate::reports::{render, ReportContext, ReportFormat};
use crate::scoring::ViabilityScorer;

use super::exit_codes;

/// Score command configuration
pub struct ScoreConfig {
    /// Attribute record path; `None` or `-` reads stdin
    pub input: Option<PathBuf>,
    /// Output format
    pub output: ReportFormat,
    /// Output file path (stdout if not specified)
    pub output_file: Option<PathBuf>,
    /// Fail (exit 1) when the composite index is below this value
    pub min_index: Option<f64>,
    /// Include the weight table in the report
    pub show_weights: bool,
    /// Disable colored output
    pub no_color: bool,
}

/// Load a farm attribute record from a JSON file.
///
/// # Errors
///
/// Returns [`AgroScoreError::Io`] when the file cannot be read and
/// [`AgroScoreError::Parse`] when it is not a valid attribute record.
pub fn load_attributes(path: &Path) -> crate::error::Result<FarmAttributes> {
    let content =
        std::fs::read_to_string(path).map_err(|e| AgroScoreError::io(path, e))?;
    let attributes = serde_json::from_str(&content)?;
    Ok(attributes)
}

/// Read a farm attribute record from stdin.
fn read_attributes_from_stdin() -> crate::error::Result<FarmAttributes> {
    let mut content = String::new();
    std::io::stdin().read_to_string(&mut content)?;
    let attributes = serde_json::from_str(&content)?;
    Ok(attributes)
}

/// Run the score command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_score(config: ScoreConfig) -> Result<i32> {
    let attributes = match &config.input {
        Some(path) if path.as_os_str() != "-" => load_attributes(path)
            .with_context(|| format!("loading attributes from {}", path.display()))?,
        _ => read_attributes_from_stdin().context("loading attributes from stdin")?,
    };

    let scorer = ViabilityScorer::new();
    let result = scorer.evaluate(&attributes)?;

    tracing::info!(
        composite_index = result.composite_index,
        classification = %result.classification,
        "evaluation complete"
    );

    let ctx = ReportContext {
        farm: &attributes,
        result: &result,
        weights: scorer.weights(),
        show_weights: config.show_weights,
    };
    let output_text = render(config.output, &ctx, !config.no_color)?;

    match &config.output_file {
        Some(path) => std::fs::write(path, output_text.as_bytes())
            .with_context(|| format!("writing report to {}", path.display()))?,
        None => println!("{output_text}"),
    }

    if let Some(threshold) = config.min_index {
        if result.composite_index < threshold {
            tracing::error!(
                "composite index {:.2} is below minimum threshold {:.2}",
                result.composite_index,
                threshold
            );
            return Ok(exit_codes::BELOW_THRESHOLD);
        }
    }

    Ok(exit_codes::SUCCESS)
}

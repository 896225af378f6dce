//! Report generation for viability results.
//!
//! Three output formats over one evaluation:
//! - Summary: compact shell-friendly output with per-category score bars
//! - JSON: structured data for programmatic integration
//! - Markdown: human-readable documentation
//!
//! Rendering is read-only over the attributes, the result, and the weight
//! table; it never feeds anything back into the engine, and all rounding for
//! display happens here.

mod json;
mod markdown;
mod summary;
mod types;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;
pub use types::ReportFormat;

use thiserror::Error;

use crate::config::ViabilityWeights;
use crate::model::{FarmAttributes, ViabilityResult};

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Everything a reporter may draw on to render one evaluation.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    /// The evaluated attribute record
    pub farm: &'a FarmAttributes,
    /// The evaluation outcome
    pub result: &'a ViabilityResult,
    /// The weight table used for aggregation
    pub weights: &'a ViabilityWeights,
    /// Include the weight table in the rendered report
    pub show_weights: bool,
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render one evaluation to a string
    fn generate(&self, ctx: &ReportContext<'_>) -> Result<String, ReportError>;
}

/// Render an evaluation in the requested format.
///
/// # Errors
///
/// Returns [`ReportError`] when serialization fails.
pub fn render(
    format: ReportFormat,
    ctx: &ReportContext<'_>,
    colored: bool,
) -> Result<String, ReportError> {
    match format {
        ReportFormat::Summary => {
            let reporter = if colored {
                SummaryReporter::new()
            } else {
                SummaryReporter::new().no_color()
            };
            reporter.generate(ctx)
        }
        ReportFormat::Json => JsonReporter::new().generate(ctx),
        ReportFormat::Markdown => MarkdownReporter::new().generate(ctx),
    }
}

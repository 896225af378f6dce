//! Markdown report generator.
//!
//! Human-readable documentation output: classification header, category
//! score table, and (optionally) the weight table with its rationale.

use std::fmt::Write as _;

use super::{ReportContext, ReportError, ReportGenerator};

/// Markdown reporter
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext<'_>) -> Result<String, ReportError> {
        let result = ctx.result;
        let mut out = String::new();

        writeln!(out, "# Farm Viability Analysis")?;
        writeln!(out)?;
        writeln!(
            out,
            "**Composite index:** {:.2} / 10 — **{}**",
            result.composite_index, result.classification
        )?;
        writeln!(out)?;
        writeln!(out, "> {}", result.classification_description)?;
        writeln!(out)?;

        writeln!(out, "## Category scores")?;
        writeln!(out)?;
        writeln!(out, "| Category | Score | Weight | Contribution |")?;
        writeln!(out, "|---|---|---|---|")?;
        for (category, score) in result.category_scores.iter() {
            let weight = ctx.weights.for_category(category);
            writeln!(
                out,
                "| {} | {score:.1} | {:.0}% | {:.2} |",
                category.name(),
                weight * 100.0,
                score * weight
            )?;
        }

        if ctx.show_weights {
            writeln!(out)?;
            writeln!(out, "## Methodology")?;
            writeln!(out)?;
            for (category, _) in ctx.weights.iter() {
                writeln!(
                    out,
                    "- **{}** — {}",
                    category.name(),
                    category.weight_rationale()
                )?;
            }
        }

        Ok(out)
    }
}

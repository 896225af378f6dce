//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage, with a
//! ten-segment bar per category score.

use std::fmt::Write as _;

use super::{ReportContext, ReportError, ReportGenerator};
use crate::model::Classification;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    /// Color for a tier: A/B read as go, C as caution, D as stop.
    const fn tier_color(tier: Classification) -> &'static str {
        match tier {
            Classification::A | Classification::B => "green",
            Classification::C => "yellow",
            Classification::D => "red",
        }
    }

    /// Ten-segment bar for a score in [0, 10].
    fn score_bar(score: f64) -> String {
        let filled = (score.clamp(0.0, 10.0).round() as usize).min(10);
        format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(&self, ctx: &ReportContext<'_>) -> Result<String, ReportError> {
        let result = ctx.result;
        let mut lines = Vec::new();

        lines.push(self.color("Farm Viability Analysis", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        let tier = result.classification;
        lines.push(format!(
            "{}  {:.2} / 10  —  {}",
            self.color("Index:", "cyan"),
            result.composite_index,
            self.color(&tier.to_string(), Self::tier_color(tier)),
        ));
        lines.push(format!("{}  {}", self.color("Tier:", "cyan"), tier.description()));

        lines.push(String::new());
        lines.push(self.color("Category scores:", "bold"));
        for (category, score) in result.category_scores.iter() {
            lines.push(format!(
                "  {:<22} {}  {:>4.1}",
                category.name(),
                self.color(&Self::score_bar(score), "cyan"),
                score
            ));
        }

        if ctx.show_weights {
            lines.push(String::new());
            lines.push(self.color("Weights:", "bold"));
            let mut line = String::new();
            for (category, weight) in ctx.weights.iter() {
                write!(line, "  {} {:.0}%", category.name(), weight * 100.0)?;
            }
            lines.push(line);
        }

        Ok(lines.join("\n"))
    }
}

//! Methodology command handler.
//!
//! Prints the read-only scoring configuration — the weight table with its
//! rationale and the four classification bands — so the methodology can be
//! inspected without running an evaluation. Display only; nothing here can
//! alter what the engine computes.

use anyhow::Result;

use crate::config::ViabilityWeights;
use crate::model::Classification;

use super::exit_codes;

/// Run the methodology command, returning the desired exit code.
pub fn run_methodology() -> Result<i32> {
    println!("{}", methodology_text(&ViabilityWeights::default()));
    Ok(exit_codes::SUCCESS)
}

/// Render the methodology as plain text.
#[must_use]
pub fn methodology_text(weights: &ViabilityWeights) -> String {
    let mut lines = Vec::new();

    lines.push("Viability methodology".to_string());
    lines.push("─".repeat(40));
    lines.push(String::new());
    lines.push("Category weights:".to_string());
    for (category, weight) in weights.iter() {
        lines.push(format!("  {:<22} {:>3.0}%", category.name(), weight * 100.0));
        lines.push(format!("      {}", category.weight_rationale()));
    }

    lines.push(String::new());
    lines.push("Classification bands (composite index):".to_string());
    let bands = [
        (Classification::A, "≥ 8.0"),
        (Classification::B, "[6.5, 8.0)"),
        (Classification::C, "[4.5, 6.5)"),
        (Classification::D, "< 4.5"),
    ];
    for (tier, range) in bands {
        lines.push(format!("  {:<9} {:<11} {}", tier.to_string(), range, tier.description()));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_covers_weights_and_bands() {
        let text = methodology_text(&ViabilityWeights::default());
        assert!(text.contains("Logistics"));
        assert!(text.contains("35%"));
        assert!(text.contains("Classe A"));
        assert!(text.contains("≥ 8.0"));
        assert!(text.contains("Freight costs"));
    }
}

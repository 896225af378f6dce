//! JSON report generator.
//!
//! Structured output for programmatic integration: a small envelope around
//! the serialized result, plus the per-category weighted contributions so a
//! consumer can reconstruct the composite index without knowing the weight
//! table.

use indexmap::IndexMap;
use serde_json::json;

use super::{ReportContext, ReportError, ReportGenerator};

/// JSON reporter
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, ctx: &ReportContext<'_>) -> Result<String, ReportError> {
        let contributions: IndexMap<&'static str, f64> = ctx
            .result
            .category_scores
            .iter()
            .map(|(category, score)| {
                (category.key(), score * ctx.weights.for_category(category))
            })
            .collect();

        let mut output = json!({
            "tool": "agroscore",
            "version": env!("CARGO_PKG_VERSION"),
            "attributes": ctx.farm,
            "report": ctx.result,
            "weighted_contributions": contributions,
        });

        if ctx.show_weights {
            output["weights"] = serde_json::to_value(ctx.weights)
                .map_err(|e| ReportError::SerializationError(e.to_string()))?;
        }

        serde_json::to_string_pretty(&output)
            .map_err(|e| ReportError::SerializationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::tests::sample_context;

    #[test]
    fn envelope_carries_report_and_contributions() {
        let (farm, result, weights) = sample_context();
        let ctx = ReportContext {
            farm: &farm,
            result: &result,
            weights: &weights,
            show_weights: false,
        };

        let output = JsonReporter::new().generate(&ctx).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["tool"], "agroscore");
        assert_eq!(value["report"]["classification"], "A");
        let logistics = value["weighted_contributions"]["logistics"].as_f64().unwrap();
        assert!((logistics - 2.45).abs() < 1e-9);
        assert!(value.get("weights").is_none());
    }

    #[test]
    fn weights_included_on_request() {
        let (farm, result, weights) = sample_context();
        let ctx = ReportContext {
            farm: &farm,
            result: &result,
            weights: &weights,
            show_weights: true,
        };

        let output = JsonReporter::new().generate(&ctx).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["weights"]["logistics"], 0.35);
    }

    #[test]
    fn contributions_sum_to_the_composite_index() {
        let (farm, result, weights) = sample_context();
        let ctx = ReportContext {
            farm: &farm,
            result: &result,
            weights: &weights,
            show_weights: false,
        };

        let output = JsonReporter::new().generate(&ctx).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let sum: f64 = value["weighted_contributions"]
            .as_object()
            .unwrap()
            .values()
            .map(|v| v.as_f64().unwrap())
            .sum();
        assert!((sum - result.composite_index).abs() < 1e-9);
    }
}

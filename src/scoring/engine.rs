//! Viability scoring engine.
//!
//! Combines the five category scorers, the weighted aggregation, and the
//! classifier into the one operation the core exposes:
//! [`ViabilityScorer::evaluate`].

use crate::config::{Validatable, ViabilityWeights};
use crate::error::{AgroScoreError, Result};
use crate::model::{
    Category, CategoryScores, Classification, FarmAttributes, ViabilityResult,
};

use super::categories::{
    agronomy_score, legal_environmental_score, logistics_score, topography_score,
    water_resources_score,
};

/// Deterministic scorer for farm viability.
///
/// Owns a validated, immutable weight table. Evaluation is a pure
/// computation over the input record: no I/O, no shared mutable state, and
/// identical inputs always produce identical outputs, so one scorer may be
/// shared by reference across any number of threads.
#[derive(Debug, Clone)]
pub struct ViabilityScorer {
    weights: ViabilityWeights,
}

impl ViabilityScorer {
    /// Create a scorer with the fixed methodology weight table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            weights: ViabilityWeights::default(),
        }
    }

    /// Create a scorer with a custom weight table.
    ///
    /// # Errors
    ///
    /// Returns [`AgroScoreError::Config`] when any weight is outside
    /// `[0, 1]`, non-finite, or the table does not sum to 1.0.
    pub fn with_weights(weights: ViabilityWeights) -> Result<Self> {
        let errors = weights.validate();
        if !errors.is_empty() {
            let joined = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(AgroScoreError::config(joined));
        }
        Ok(Self { weights })
    }

    /// The weight table this scorer aggregates with.
    #[must_use]
    pub const fn weights(&self) -> &ViabilityWeights {
        &self.weights
    }

    /// Evaluate a farm: validate, score each category, aggregate, classify.
    ///
    /// # Errors
    ///
    /// Returns [`AgroScoreError::InvalidInput`] listing every field outside
    /// its physical domain. Validation failure rejects the evaluation as a
    /// whole; no partial result is produced.
    pub fn evaluate(&self, farm: &FarmAttributes) -> Result<ViabilityResult> {
        let violations = farm.validate();
        if !violations.is_empty() {
            return Err(AgroScoreError::invalid_input(violations));
        }

        let category_scores = self.score_categories(farm);
        let composite_index = self.aggregate(&category_scores);
        let classification = Classification::from_index(composite_index);

        Ok(ViabilityResult {
            composite_index,
            category_scores,
            classification,
            classification_description: classification.description().to_string(),
        })
    }

    /// Run the five independent category scorers.
    fn score_categories(&self, farm: &FarmAttributes) -> CategoryScores {
        CategoryScores {
            logistics: logistics_score(
                farm.distance_to_paved_road_km,
                farm.distance_to_grain_storage_km,
            ),
            legal_environmental: legal_environmental_score(
                farm.legal_reserve_status,
                farm.has_georeferencing,
            ),
            water_resources: water_resources_score(
                farm.annual_rainfall_mm,
                farm.has_perennial_river,
            ),
            agronomy: agronomy_score(farm.soil_ph, farm.clay_content_percent),
            topography: topography_score(farm.mechanizable_area_percent),
        }
    }

    /// Weighted sum of the sub-scores, in fixed category order.
    ///
    /// No rounding happens here; formatting is the presentation layer's job.
    fn aggregate(&self, scores: &CategoryScores) -> f64 {
        Category::ALL
            .into_iter()
            .map(|c| scores.get(c) * self.weights.for_category(c))
            .sum()
    }
}

impl Default for ViabilityScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate a farm with the fixed methodology weights.
///
/// Convenience wrapper over [`ViabilityScorer::evaluate`] for callers that
/// never customize the weight table.
///
/// # Errors
///
/// Same as [`ViabilityScorer::evaluate`].
pub fn evaluate(farm: &FarmAttributes) -> Result<ViabilityResult> {
    ViabilityScorer::new().evaluate(farm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LegalReserveStatus;

    const EPS: f64 = 1e-9;

    fn reference_farm() -> FarmAttributes {
        FarmAttributes {
            distance_to_paved_road_km: 25.0,
            distance_to_grain_storage_km: 45.0,
            legal_reserve_status: LegalReserveStatus::Regularized,
            has_georeferencing: true,
            annual_rainfall_mm: 1500.0,
            has_perennial_river: true,
            soil_ph: 5.8,
            clay_content_percent: 30.0,
            mechanizable_area_percent: 85.0,
        }
    }

    #[test]
    fn reference_scenario_scores_class_a() {
        let result = evaluate(&reference_farm()).unwrap();

        assert_eq!(result.category_scores.logistics, 7.0);
        assert_eq!(result.category_scores.legal_environmental, 10.0);
        assert_eq!(result.category_scores.water_resources, 10.0);
        assert_eq!(result.category_scores.agronomy, 10.0);
        assert_eq!(result.category_scores.topography, 10.0);

        // 7*0.35 + 10*0.30 + 10*0.15 + 10*0.10 + 10*0.10
        assert!((result.composite_index - 8.95).abs() < EPS);
        assert_eq!(result.classification, Classification::A);
        assert_eq!(
            result.classification_description,
            Classification::A.description()
        );
    }

    #[test]
    fn all_perfect_scores_aggregate_to_ten() {
        let mut farm = reference_farm();
        farm.distance_to_paved_road_km = 5.0;
        let result = evaluate(&farm).unwrap();
        assert!((result.composite_index - 10.0).abs() < EPS);
        assert_eq!(result.classification, Classification::A);
    }

    #[test]
    fn all_floor_scores_aggregate_above_zero() {
        // Worst legal input without the veto is 2, topography floors at 1,
        // water at 2, agronomy at 3: composite can only reach 0.0 through
        // the georeferencing veto pushing legal to 0.
        let farm = FarmAttributes {
            distance_to_paved_road_km: 60.0,
            distance_to_grain_storage_km: 120.0,
            legal_reserve_status: LegalReserveStatus::PendingWithLiability,
            has_georeferencing: false,
            annual_rainfall_mm: 800.0,
            has_perennial_river: false,
            soil_ph: 8.0,
            clay_content_percent: 60.0,
            mechanizable_area_percent: 20.0,
        };
        let result = evaluate(&farm).unwrap();

        assert_eq!(result.category_scores.logistics, 0.0);
        assert_eq!(result.category_scores.legal_environmental, 0.0);
        // 2*0.15 + 3*0.10 + 1*0.10 = 0.70
        assert!((result.composite_index - 0.70).abs() < EPS);
        assert_eq!(result.classification, Classification::D);
    }

    #[test]
    fn georeferencing_veto_drags_a_regular_farm_down() {
        let mut farm = reference_farm();
        farm.has_georeferencing = false;
        let result = evaluate(&farm).unwrap();

        assert_eq!(result.category_scores.legal_environmental, 0.0);
        // 7*0.35 + 0*0.30 + 10*0.15 + 10*0.10 + 10*0.10 = 5.95
        assert!((result.composite_index - 5.95).abs() < EPS);
        assert_eq!(result.classification, Classification::C);
    }

    #[test]
    fn invalid_input_rejects_the_whole_evaluation() {
        let mut farm = reference_farm();
        farm.soil_ph = 15.0;
        farm.clay_content_percent = -2.0;

        let err = evaluate(&farm).unwrap_err();
        match err {
            AgroScoreError::InvalidInput(violations) => {
                assert_eq!(violations.len(), 2);
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn evaluation_is_idempotent() {
        let scorer = ViabilityScorer::new();
        let farm = reference_farm();
        let first = scorer.evaluate(&farm).unwrap();
        let second = scorer.evaluate(&farm).unwrap();
        // Bit-identical, not merely approximately equal
        assert_eq!(first, second);
        assert_eq!(
            first.composite_index.to_bits(),
            second.composite_index.to_bits()
        );
    }

    #[test]
    fn aggregation_extremes_are_exact() {
        let scorer = ViabilityScorer::new();
        let all_ten = CategoryScores {
            logistics: 10.0,
            legal_environmental: 10.0,
            water_resources: 10.0,
            agronomy: 10.0,
            topography: 10.0,
        };
        assert!((scorer.aggregate(&all_ten) - 10.0).abs() < EPS);

        let all_zero = CategoryScores {
            logistics: 0.0,
            legal_environmental: 0.0,
            water_resources: 0.0,
            agronomy: 0.0,
            topography: 0.0,
        };
        assert_eq!(scorer.aggregate(&all_zero), 0.0);
    }

    #[test]
    fn custom_weights_must_sum_to_one() {
        let bad = ViabilityWeights {
            logistics: 0.9,
            ..ViabilityWeights::default()
        };
        assert!(matches!(
            ViabilityScorer::with_weights(bad),
            Err(AgroScoreError::Config(_))
        ));

        let even = ViabilityWeights {
            logistics: 0.2,
            legal_environmental: 0.2,
            water_resources: 0.2,
            agronomy: 0.2,
            topography: 0.2,
        };
        let scorer = ViabilityScorer::with_weights(even).unwrap();
        let result = scorer.evaluate(&reference_farm()).unwrap();
        // (7 + 10 + 10 + 10 + 10) * 0.2
        assert!((result.composite_index - 9.4).abs() < EPS);
    }
}

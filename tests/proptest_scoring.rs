//! Property-based tests for the scoring engine.
//!
//! Ensures the range invariant (every sub-score and the composite index stay
//! in [0, 10] for any domain-valid input), classifier monotonicity, and
//! determinism hold across random inputs.

use proptest::prelude::*;

use agroscore::scoring::{
    agronomy_score, legal_environmental_score, logistics_score, topography_score,
    water_resources_score,
};
use agroscore::{
    evaluate, Classification, FarmAttributes, LegalReserveStatus, ViabilityScorer,
};

fn any_legal_status() -> impl Strategy<Value = LegalReserveStatus> {
    prop_oneof![
        Just(LegalReserveStatus::Regularized),
        Just(LegalReserveStatus::RegularizedPendingReview),
        Just(LegalReserveStatus::PendingWithLiability),
    ]
}

prop_compose! {
    /// Any record inside the documented physical domains.
    fn any_valid_farm()(
        road in 0.0f64..500.0,
        storage in 0.0f64..500.0,
        status in any_legal_status(),
        geo in any::<bool>(),
        rainfall in 0.0f64..4000.0,
        river in any::<bool>(),
        ph in 0.0f64..=14.0,
        clay in 0.0f64..=100.0,
        mech in 0.0f64..=100.0,
    ) -> FarmAttributes {
        FarmAttributes {
            distance_to_paved_road_km: road,
            distance_to_grain_storage_km: storage,
            legal_reserve_status: status,
            has_georeferencing: geo,
            annual_rainfall_mm: rainfall,
            has_perennial_river: river,
            soil_ph: ph,
            clay_content_percent: clay,
            mechanizable_area_percent: mech,
        }
    }
}

proptest! {
    // 1000 cases: the engine is pure arithmetic, so broad coverage is cheap.
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn category_scores_stay_in_range(farm in any_valid_farm()) {
        let result = evaluate(&farm).expect("domain-valid input must score");
        for (category, score) in result.category_scores.iter() {
            prop_assert!(
                (0.0..=10.0).contains(&score),
                "{category} score {score} out of range"
            );
        }
        prop_assert!((0.0..=10.0).contains(&result.composite_index));
    }

    #[test]
    fn individual_scorers_stay_in_range(
        road in 0.0f64..1000.0,
        storage in 0.0f64..1000.0,
        rainfall in 0.0f64..4000.0,
        river in any::<bool>(),
        ph in 0.0f64..=14.0,
        clay in 0.0f64..=100.0,
        mech in 0.0f64..=100.0,
        status in any_legal_status(),
        geo in any::<bool>(),
    ) {
        for score in [
            logistics_score(road, storage),
            legal_environmental_score(status, geo),
            water_resources_score(rainfall, river),
            agronomy_score(ph, clay),
            topography_score(mech),
        ] {
            prop_assert!((0.0..=10.0).contains(&score), "score {score} out of range");
        }
    }

    #[test]
    fn classification_is_monotonic(a in 0.0f64..=10.0, b in 0.0f64..=10.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        // Classification derives Ord with A first: a lower index must never
        // map to a better (smaller) tier than a higher index.
        prop_assert!(
            Classification::from_index(lo) >= Classification::from_index(hi),
            "index {lo} classified better than {hi}"
        );
    }

    #[test]
    fn evaluation_is_deterministic(farm in any_valid_farm()) {
        let first = evaluate(&farm).expect("valid input");
        let second = evaluate(&farm).expect("valid input");
        prop_assert_eq!(
            first.composite_index.to_bits(),
            second.composite_index.to_bits()
        );
        prop_assert_eq!(first, second);
    }

    #[test]
    fn missing_georeferencing_always_vetoes_legal(
        status in any_legal_status(),
    ) {
        prop_assert_eq!(legal_environmental_score(status, false), 0.0);
    }

    #[test]
    fn composite_matches_manual_weighted_sum(farm in any_valid_farm()) {
        let scorer = ViabilityScorer::new();
        let result = scorer.evaluate(&farm).expect("valid input");
        let manual: f64 = result
            .category_scores
            .iter()
            .map(|(category, score)| score * scorer.weights().for_category(category))
            .sum();
        prop_assert!((result.composite_index - manual).abs() < 1e-12);
    }

    #[test]
    fn negative_distances_are_rejected(
        road in -1000.0f64..-0.0001,
    ) {
        let farm = FarmAttributes {
            distance_to_paved_road_km: road,
            distance_to_grain_storage_km: 10.0,
            legal_reserve_status: LegalReserveStatus::Regularized,
            has_georeferencing: true,
            annual_rainfall_mm: 1200.0,
            has_perennial_river: false,
            soil_ph: 6.0,
            clay_content_percent: 25.0,
            mechanizable_area_percent: 70.0,
        };
        prop_assert!(evaluate(&farm).is_err());
    }

    #[test]
    fn out_of_domain_percentages_are_rejected(
        excess in 100.0001f64..10000.0,
    ) {
        let farm = FarmAttributes {
            distance_to_paved_road_km: 10.0,
            distance_to_grain_storage_km: 10.0,
            legal_reserve_status: LegalReserveStatus::Regularized,
            has_georeferencing: true,
            annual_rainfall_mm: 1200.0,
            has_perennial_river: false,
            soil_ph: 6.0,
            clay_content_percent: excess,
            mechanizable_area_percent: 70.0,
        };
        prop_assert!(evaluate(&farm).is_err());
    }

    #[test]
    fn attributes_round_trip_through_serde(farm in any_valid_farm()) {
        let json = serde_json::to_string(&farm).expect("serialize");
        let back: FarmAttributes = serde_json::from_str(&json).expect("deserialize");
        prop_assert_eq!(farm, back);
    }
}

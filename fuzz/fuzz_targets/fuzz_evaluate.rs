#![no_main]
use libfuzzer_sys::fuzz_target;

use agroscore::{evaluate, FarmAttributes, LegalReserveStatus};

/// Fuzz the engine with raw (not pre-validated) numeric inputs.
///
/// Evaluation must either reject the record or return a result; it must
/// never panic, whatever the floats look like.
fuzz_target!(|input: (f64, f64, u8, bool, f64, bool, f64, f64, f64)| {
    let (road, storage, status, geo, rainfall, river, ph, clay, mech) = input;

    let status = match status % 3 {
        0 => LegalReserveStatus::Regularized,
        1 => LegalReserveStatus::RegularizedPendingReview,
        _ => LegalReserveStatus::PendingWithLiability,
    };

    let attributes = FarmAttributes {
        distance_to_paved_road_km: road,
        distance_to_grain_storage_km: storage,
        legal_reserve_status: status,
        has_georeferencing: geo,
        annual_rainfall_mm: rainfall,
        has_perennial_river: river,
        soil_ph: ph,
        clay_content_percent: clay,
        mechanizable_area_percent: mech,
    };

    if let Ok(result) = evaluate(&attributes) {
        assert!((0.0..=10.0).contains(&result.composite_index));
    }
});

//! The five category scorers.
//!
//! Each scorer is a pure function from a subset of the farm attributes to a
//! sub-score in `[0, 10]`. They are total over their validated domains —
//! domain enforcement happens at the boundary
//! ([`FarmAttributes::validate`](crate::model::FarmAttributes::validate)),
//! never in here.
//!
//! Threshold conventions are part of the methodology and pinned by tests:
//! logistics and water use strict `>` (the boundary value lands on the
//! cheaper side), agronomy uses open intervals (the boundary value is
//! penalized), topography and classification use `>=` ladders.

use crate::model::LegalReserveStatus;

// ============================================================================
// Logistics
// ============================================================================

/// Score road and storage access.
///
/// Starts at 10 and deducts per distance band: 5 points past 50 km of paved
/// road (3 past 20 km), 5 points past 100 km of grain storage (2 past 50 km).
/// The two deductions can stack to exactly 10, so the result is floored at 0.
#[must_use]
pub fn logistics_score(road_km: f64, storage_km: f64) -> f64 {
    let mut score: f64 = 10.0;

    if road_km > 50.0 {
        score -= 5.0;
    } else if road_km > 20.0 {
        score -= 3.0;
    }

    if storage_km > 100.0 {
        score -= 5.0;
    } else if storage_km > 50.0 {
        score -= 2.0;
    }

    score.max(0.0)
}

// ============================================================================
// Legal / environmental
// ============================================================================

/// Score legal reserve standing and cadastral survey status.
///
/// The legal-reserve status *sets* the score (10 / 7 / 2) rather than
/// deducting from it. Missing georeferencing then overrides everything to 0:
/// without a SIGEF survey the property cannot be financed or sold, so no
/// legal-reserve standing can compensate. The override must stay last and
/// unconditional.
#[must_use]
pub fn legal_environmental_score(
    reserve_status: LegalReserveStatus,
    has_georeferencing: bool,
) -> f64 {
    let score = match reserve_status {
        LegalReserveStatus::Regularized => 10.0,
        LegalReserveStatus::RegularizedPendingReview => 7.0,
        LegalReserveStatus::PendingWithLiability => 2.0,
    };

    if has_georeferencing {
        score
    } else {
        0.0
    }
}

// ============================================================================
// Water resources
// ============================================================================

/// Score rainfall regime and perennial surface water.
///
/// Rainfall sets the base tier (strict `>`: exactly 1400 mm or 1100 mm fall
/// into the lower tier), then a perennial river adds a +2 bonus. Capped at
/// 10 — the bonus can reach it exactly, never exceed it.
#[must_use]
pub fn water_resources_score(annual_rainfall_mm: f64, has_perennial_river: bool) -> f64 {
    let mut score: f64 = if annual_rainfall_mm > 1400.0 {
        8.0
    } else if annual_rainfall_mm > 1100.0 {
        5.0
    } else {
        2.0
    };

    if has_perennial_river {
        score += 2.0;
    }

    score.min(10.0)
}

// ============================================================================
// Agronomy
// ============================================================================

/// Score soil chemistry and texture.
///
/// Deducts 3 when pH is outside the open interval (5.0, 6.5) and 4 when clay
/// content is outside (15, 40) — the interval bounds themselves are
/// penalized. Current penalties bottom out at 3, but the floor stays so a
/// future retuning of the deductions cannot underflow the `[0, 10]` range.
#[must_use]
pub fn agronomy_score(soil_ph: f64, clay_content_percent: f64) -> f64 {
    let mut score: f64 = 10.0;

    let ph_in_range = soil_ph > 5.0 && soil_ph < 6.5;
    if !ph_in_range {
        score -= 3.0;
    }

    let clay_in_range = clay_content_percent > 15.0 && clay_content_percent < 40.0;
    if !clay_in_range {
        score -= 4.0;
    }

    score.max(0.0)
}

// ============================================================================
// Topography
// ============================================================================

/// Score mechanizable relief.
///
/// Single threshold ladder, first matching band from the top wins.
#[must_use]
pub fn topography_score(mechanizable_area_percent: f64) -> f64 {
    if mechanizable_area_percent >= 80.0 {
        10.0
    } else if mechanizable_area_percent >= 60.0 {
        7.0
    } else if mechanizable_area_percent >= 40.0 {
        4.0
    } else {
        1.0
    }
}

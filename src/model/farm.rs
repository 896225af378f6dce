//! Farm attribute record and boundary validation.
//!
//! `FarmAttributes` is the single input to an evaluation. It is constructed
//! fresh per analysis (typically deserialized from JSON collected by a UI or
//! geodata services) and validated once at the boundary, so the category
//! scorers stay total functions over their domains.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::InputViolation;

/// Registration status of the property's legal reserve (CAR).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LegalReserveStatus {
    /// Registered and in good standing
    Regularized,
    /// Registered, but flagged for review
    RegularizedPendingReview,
    /// Unregistered with an outstanding environmental liability
    PendingWithLiability,
}

impl LegalReserveStatus {
    /// Human-readable status label.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Regularized => "Regularized",
            Self::RegularizedPendingReview => "Regularized, pending review",
            Self::PendingWithLiability => "Pending with liability",
        }
    }
}

impl std::fmt::Display for LegalReserveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Raw attributes of a rural property, as gathered by the caller.
///
/// All continuous inputs are `f64`; domains are enforced by
/// [`FarmAttributes::validate`], not by the individual scorers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct FarmAttributes {
    /// Distance to the nearest paved road, in km
    #[schemars(range(min = 0.0))]
    pub distance_to_paved_road_km: f64,

    /// Distance to the nearest grain storage facility, in km
    #[schemars(range(min = 0.0))]
    pub distance_to_grain_storage_km: f64,

    /// Legal reserve (CAR) registration status
    pub legal_reserve_status: LegalReserveStatus,

    /// Whether the property has a georeferenced cadastral survey (SIGEF)
    pub has_georeferencing: bool,

    /// Mean annual rainfall, in mm
    #[schemars(range(min = 0.0))]
    pub annual_rainfall_mm: f64,

    /// Whether a perennial river crosses the property
    pub has_perennial_river: bool,

    /// Mean soil pH
    #[schemars(range(min = 0.0, max = 14.0))]
    pub soil_ph: f64,

    /// Soil clay content, percent of composition
    #[schemars(range(min = 0.0, max = 100.0))]
    pub clay_content_percent: f64,

    /// Share of the farm area workable by machinery, percent
    #[schemars(range(min = 0.0, max = 100.0))]
    pub mechanizable_area_percent: f64,
}

impl FarmAttributes {
    /// Validate every field against its physical domain.
    ///
    /// Returns all violations found, not just the first, so a caller can
    /// report the full set of problems with a record in one pass. An empty
    /// vector means the record is safe to score.
    #[must_use]
    pub fn validate(&self) -> Vec<InputViolation> {
        let mut violations = Vec::new();

        check_non_negative(
            &mut violations,
            "distance_to_paved_road_km",
            self.distance_to_paved_road_km,
        );
        check_non_negative(
            &mut violations,
            "distance_to_grain_storage_km",
            self.distance_to_grain_storage_km,
        );
        check_non_negative(&mut violations, "annual_rainfall_mm", self.annual_rainfall_mm);
        check_range(&mut violations, "soil_ph", self.soil_ph, 0.0, 14.0);
        check_range(
            &mut violations,
            "clay_content_percent",
            self.clay_content_percent,
            0.0,
            100.0,
        );
        check_range(
            &mut violations,
            "mechanizable_area_percent",
            self.mechanizable_area_percent,
            0.0,
            100.0,
        );

        violations
    }
}

/// Reject NaN/infinity and negatives.
fn check_non_negative(violations: &mut Vec<InputViolation>, field: &'static str, value: f64) {
    if !value.is_finite() {
        violations.push(InputViolation {
            field,
            message: format!("must be a finite number, got {value}"),
        });
    } else if value < 0.0 {
        violations.push(InputViolation {
            field,
            message: format!("must be non-negative, got {value}"),
        });
    }
}

/// Reject NaN/infinity and values outside [min, max].
fn check_range(
    violations: &mut Vec<InputViolation>,
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !value.is_finite() {
        violations.push(InputViolation {
            field,
            message: format!("must be a finite number, got {value}"),
        });
    } else if value < min || value > max {
        violations.push(InputViolation {
            field,
            message: format!("must be within [{min}, {max}], got {value}"),
        });
    }
}

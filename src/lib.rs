//! **Weighted viability scoring for rural properties.**
//!
//! `agroscore` computes a 0–10 composite viability index for a farm from
//! logistics, legal, hydrological, agronomic, and topographic inputs, and
//! classifies the property into one of four risk tiers (A–D). The engine is
//! deterministic and pure: identical inputs always produce identical
//! outputs, and a single scorer may be shared across threads without
//! coordination.
//!
//! The crate powers both a command-line tool and a library API. Everything
//! around the engine — collecting coordinates, resolving distances against
//! map data, rendering dashboards, exporting documents — is the caller's
//! concern; callers assemble a [`FarmAttributes`] record, invoke the engine
//! once per analysis, and render the returned [`ViabilityResult`].
//!
//! ## Core concepts & modules
//!
//! - **[`model`]**: the input record ([`FarmAttributes`]), the closed
//!   [`Category`] enum, and the result types ([`CategoryScores`],
//!   [`Classification`], [`ViabilityResult`]).
//! - **[`scoring`]**: five independent category scorers, the weighted
//!   aggregation, and the [`ViabilityScorer`] entry point.
//! - **[`config`]**: the immutable [`ViabilityWeights`] table with its
//!   validation; fixed at engine construction, never mutated per request.
//! - **[`reports`]**: summary / JSON / Markdown renderers over one result.
//! - **[`geo`]**: pure geodesic helpers (haversine distance, agro-hub
//!   table) for callers deriving distance inputs from coordinates.
//!
//! ## Getting started
//!
//! ```
//! use agroscore::{evaluate, Classification, FarmAttributes, LegalReserveStatus};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let farm = FarmAttributes {
//!         distance_to_paved_road_km: 25.0,
//!         distance_to_grain_storage_km: 45.0,
//!         legal_reserve_status: LegalReserveStatus::Regularized,
//!         has_georeferencing: true,
//!         annual_rainfall_mm: 1500.0,
//!         has_perennial_river: true,
//!         soil_ph: 5.8,
//!         clay_content_percent: 30.0,
//!         mechanizable_area_percent: 85.0,
//!     };
//!
//!     let result = evaluate(&farm)?;
//!     assert_eq!(result.classification, Classification::A);
//!     println!("index {:.2}: {}", result.composite_index, result.classification);
//!     Ok(())
//! }
//! ```
//!
//! Input validation happens once at the boundary: any field outside its
//! physical domain rejects the whole evaluation with
//! [`AgroScoreError::InvalidInput`] listing every violation, and no partial
//! result is produced.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]

pub mod cli;
pub mod config;
pub mod error;
pub mod geo;
pub mod model;
pub mod reports;
pub mod scoring;

// Re-export main types for convenience
pub use config::{ConfigError, Validatable, ViabilityWeights};
pub use error::{AgroScoreError, InputViolation, Result};
pub use model::{
    Category, CategoryScores, Classification, FarmAttributes, LegalReserveStatus, ViabilityResult,
};
pub use reports::{ReportFormat, ReportGenerator};
pub use scoring::{evaluate, ViabilityScorer};

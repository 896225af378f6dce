//! Default weight table for the viability methodology.
//!
//! The composite index weighs logistics and legal standing heaviest: both
//! can make an otherwise productive property uneconomical or unsellable,
//! while soil and relief problems are correctable with capex.

/// Weight of the logistics category (road and storage access)
pub const DEFAULT_LOGISTICS_WEIGHT: f64 = 0.35;

/// Weight of the legal/environmental category (CAR, georeferencing)
pub const DEFAULT_LEGAL_ENVIRONMENTAL_WEIGHT: f64 = 0.30;

/// Weight of the water resources category (rainfall, perennial river)
pub const DEFAULT_WATER_RESOURCES_WEIGHT: f64 = 0.15;

/// Weight of the agronomy category (soil pH, clay content)
pub const DEFAULT_AGRONOMY_WEIGHT: f64 = 0.10;

/// Weight of the topography category (mechanizable area)
pub const DEFAULT_TOPOGRAPHY_WEIGHT: f64 = 0.10;

/// Maximum allowed deviation of a weight table's sum from 1.0.
///
/// Covers accumulated floating-point error when callers build tables from
/// arithmetic; anything larger is a genuinely wrong table.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

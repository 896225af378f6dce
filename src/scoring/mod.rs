//! Scoring engine: category scorers, weighted aggregation, classification.
//!
//! The module is a straight function composition — five independent scorers
//! feed a weighted sum, whose result is classified into a tier. Every piece
//! is synchronous and stateless; see [`ViabilityScorer`] for the entry point.

mod categories;
mod engine;

pub use categories::{
    agronomy_score, legal_environmental_score, logistics_score, topography_score,
    water_resources_score,
};
pub use engine::{evaluate, ViabilityScorer};

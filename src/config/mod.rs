//! Configuration for the scoring engine.
//!
//! The only tunable is the category weight table, and it is deliberately
//! rigid: validated once when an engine is constructed, immutable afterwards,
//! and shareable by reference across any number of concurrent evaluations.

mod defaults;
mod types;
mod validation;

pub use defaults::{
    DEFAULT_AGRONOMY_WEIGHT, DEFAULT_LEGAL_ENVIRONMENTAL_WEIGHT, DEFAULT_LOGISTICS_WEIGHT,
    DEFAULT_TOPOGRAPHY_WEIGHT, DEFAULT_WATER_RESOURCES_WEIGHT, WEIGHT_SUM_TOLERANCE,
};
pub use types::ViabilityWeights;
pub use validation::{ConfigError, Validatable};

/// Generate a JSON Schema for the `FarmAttributes` input format.
///
/// Documents the record callers must assemble before invoking the engine; an
/// editor or form layer can use it for validation and autocompletion.
#[must_use]
pub fn input_json_schema() -> String {
    let schema = schemars::schema_for!(crate::model::FarmAttributes);
    serde_json::to_string_pretty(&schema).expect("schema serialization should not fail")
}

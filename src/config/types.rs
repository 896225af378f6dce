//! Weight configuration types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::defaults;
use crate::model::Category;

/// Relative weight of each evaluation category in the composite index.
///
/// Weights must sum to 1.0. The default table is fixed, process-wide
/// configuration; the engine only accepts alternatives through
/// [`ViabilityScorer::with_weights`](crate::scoring::ViabilityScorer::with_weights),
/// which validates them, and never mutates the table afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct ViabilityWeights {
    /// Weight of the logistics score
    #[schemars(range(min = 0.0, max = 1.0))]
    pub logistics: f64,
    /// Weight of the legal/environmental score
    #[schemars(range(min = 0.0, max = 1.0))]
    pub legal_environmental: f64,
    /// Weight of the water resources score
    #[schemars(range(min = 0.0, max = 1.0))]
    pub water_resources: f64,
    /// Weight of the agronomy score
    #[schemars(range(min = 0.0, max = 1.0))]
    pub agronomy: f64,
    /// Weight of the topography score
    #[schemars(range(min = 0.0, max = 1.0))]
    pub topography: f64,
}

impl Default for ViabilityWeights {
    fn default() -> Self {
        Self {
            logistics: defaults::DEFAULT_LOGISTICS_WEIGHT,
            legal_environmental: defaults::DEFAULT_LEGAL_ENVIRONMENTAL_WEIGHT,
            water_resources: defaults::DEFAULT_WATER_RESOURCES_WEIGHT,
            agronomy: defaults::DEFAULT_AGRONOMY_WEIGHT,
            topography: defaults::DEFAULT_TOPOGRAPHY_WEIGHT,
        }
    }
}

impl ViabilityWeights {
    /// Look up the weight for a category. Total over all categories.
    #[must_use]
    pub const fn for_category(&self, category: Category) -> f64 {
        match category {
            Category::Logistics => self.logistics,
            Category::LegalEnvironmental => self.legal_environmental,
            Category::WaterResources => self.water_resources,
            Category::Agronomy => self.agronomy,
            Category::Topography => self.topography,
        }
    }

    /// Iterate `(category, weight)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.for_category(c)))
    }

    /// Sum of all weights. 1.0 (within tolerance) for a valid table.
    #[must_use]
    pub fn sum(&self) -> f64 {
        Category::ALL
            .into_iter()
            .map(|c| self.for_category(c))
            .sum()
    }
}

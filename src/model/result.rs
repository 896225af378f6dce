//! Evaluation result types: per-category scores, classification tiers, and
//! the composite `ViabilityResult`.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Category;

/// Sub-scores for every evaluation category, each in `[0, 10]`.
///
/// Field order matches the display order of [`Category::ALL`]; serialized
/// JSON objects keep that order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryScores {
    /// Road and storage access score
    pub logistics: f64,
    /// Legal reserve and cadastral status score
    pub legal_environmental: f64,
    /// Rainfall and perennial water score
    pub water_resources: f64,
    /// Soil chemistry and texture score
    pub agronomy: f64,
    /// Mechanizable relief score
    pub topography: f64,
}

impl CategoryScores {
    /// Look up the score for a category. Total over all categories.
    #[must_use]
    pub const fn get(&self, category: Category) -> f64 {
        match category {
            Category::Logistics => self.logistics,
            Category::LegalEnvironmental => self.legal_environmental,
            Category::WaterResources => self.water_resources,
            Category::Agronomy => self.agronomy,
            Category::Topography => self.topography,
        }
    }

    /// Iterate `(category, score)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// Ordered `category → score` map view, for callers that want the
    /// mapping form (report renderers, UI tables).
    #[must_use]
    pub fn to_map(&self) -> IndexMap<Category, f64> {
        self.iter().collect()
    }
}

/// Risk/opportunity tier derived from the composite index.
///
/// Ordering places `A` first, so a *greater* variant is a *worse* tier;
/// `Classification::A < Classification::D`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum Classification {
    /// Composite index ≥ 8.0
    A,
    /// Composite index in [6.5, 8.0)
    B,
    /// Composite index in [4.5, 6.5)
    C,
    /// Composite index < 4.5
    D,
}

impl Classification {
    /// Classify a composite index into its tier.
    ///
    /// Bands are closed on their lower end, matching the `>=` ladder the
    /// category scorers use for their own thresholds.
    #[must_use]
    pub fn from_index(composite_index: f64) -> Self {
        if composite_index >= 8.0 {
            Self::A
        } else if composite_index >= 6.5 {
            Self::B
        } else if composite_index >= 4.5 {
            Self::C
        } else {
            Self::D
        }
    }

    /// Tier letter
    #[must_use]
    pub const fn letter(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }

    /// Short tier title
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::A => "Prime opportunity",
            Self::B => "Strategic investment",
            Self::C => "Requires caution",
            Self::D => "High risk",
        }
    }

    /// Full tier description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::A => "Prime opportunity: exceptional fundamentals, low apparent risk.",
            Self::B => {
                "Strategic investment: solid asset with meaningful potential, \
                 specific attention points."
            }
            Self::C => {
                "Requires caution: significant challenges; viability depends on a \
                 high-capex restructuring plan."
            }
            Self::D => {
                "High risk: multiple critical limiting factors; investment not \
                 recommended under current conditions."
            }
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Classe {}", self.letter())
    }
}

/// Outcome of one viability evaluation.
///
/// Derived synchronously from a [`FarmAttributes`](super::FarmAttributes)
/// record and meant to be rendered or exported by the caller, then dropped;
/// nothing in the core retains it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[must_use]
pub struct ViabilityResult {
    /// Weighted composite index in `[0, 10]`
    pub composite_index: f64,
    /// Per-category sub-scores
    pub category_scores: CategoryScores,
    /// Risk tier for the composite index
    pub classification: Classification,
    /// Human-readable description of the tier
    pub classification_description: String,
}

//! Evaluation categories.
//!
//! The five dimensions a farm is scored on. Using a closed enum (rather than
//! string keys) makes an invalid category a compile-time error instead of a
//! runtime lookup failure.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One evaluation dimension of the viability analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Road and storage access
    Logistics,
    /// Legal reserve and cadastral status
    LegalEnvironmental,
    /// Rainfall and perennial water
    WaterResources,
    /// Soil chemistry and texture
    Agronomy,
    /// Mechanizable relief
    Topography,
}

impl Category {
    /// All categories in display order.
    ///
    /// The order is significant only for presentation; aggregation is a
    /// plain weighted sum and does not depend on it.
    pub const ALL: [Self; 5] = [
        Self::Logistics,
        Self::LegalEnvironmental,
        Self::WaterResources,
        Self::Agronomy,
        Self::Topography,
    ];

    /// Stable snake_case identifier, matching the serialized form.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Logistics => "logistics",
            Self::LegalEnvironmental => "legal_environmental",
            Self::WaterResources => "water_resources",
            Self::Agronomy => "agronomy",
            Self::Topography => "topography",
        }
    }

    /// Human-readable category name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Logistics => "Logistics",
            Self::LegalEnvironmental => "Legal & Environmental",
            Self::WaterResources => "Water Resources",
            Self::Agronomy => "Agronomy",
            Self::Topography => "Topography",
        }
    }

    /// Why the category carries the weight it does.
    ///
    /// Read-only methodology text that a UI or the `methodology` subcommand
    /// may display alongside the weight table.
    #[must_use]
    pub const fn weight_rationale(&self) -> &'static str {
        match self {
            Self::Logistics => {
                "Freight costs hit the margin directly; an expensive haul can make \
                 commodity sales unviable and turn the farm into a productive island \
                 without efficient market access."
            }
            Self::LegalEnvironmental => {
                "Documentation problems (title, georeferencing, environmental registry) \
                 are eliminatory: they block financing and transfers and can draw fines \
                 or embargoes. An environmental liability is a hidden debt."
            }
            Self::WaterResources => {
                "Water is the production insurance. In dry years irrigation capacity not \
                 only saves the harvest but enables a second crop, doubling annual revenue."
            }
            Self::Agronomy => {
                "Most soil problems (acidity, fertility) are correctable with investment; \
                 a solvable capex problem, not a strategic impediment."
            }
            Self::Topography => {
                "Relief defines operating efficiency. Flat areas take large machinery and \
                 cut cost per hectare; rough terrain narrows the farm's vocation."
            }
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

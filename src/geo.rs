//! Pure geodesic helpers.
//!
//! Utilities a caller can use to derive distance inputs from coordinates:
//! great-circle distance and a static table of Brazilian agribusiness hubs.
//! No network lookups happen here — resolving roads or storage facilities
//! against live map data is the caller's concern — and the scoring engine
//! itself never consults this module.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Mean Earth radius in km (IUGG)
const EARTH_RADIUS_KM: f64 = 6371.0088;

/// A WGS84 coordinate pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Coordinates {
    /// Latitude, degrees (south negative)
    pub lat: f64,
    /// Longitude, degrees (west negative)
    pub lon: f64,
}

impl Coordinates {
    /// Create a coordinate pair.
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A named agribusiness hub with its coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hub {
    /// Hub name, including its state
    pub name: &'static str,
    /// Hub location
    pub coordinates: Coordinates,
}

/// Reference agribusiness hubs (trading towns and the Santos port).
pub const AGRO_HUBS: [Hub; 8] = [
    Hub {
        name: "Rio Verde (GO)",
        coordinates: Coordinates::new(-17.7972, -50.9262),
    },
    Hub {
        name: "Goiânia (GO)",
        coordinates: Coordinates::new(-16.6869, -49.2648),
    },
    Hub {
        name: "Rondonópolis (MT)",
        coordinates: Coordinates::new(-16.4705, -54.636),
    },
    Hub {
        name: "Sorriso (MT)",
        coordinates: Coordinates::new(-12.5447, -55.7126),
    },
    Hub {
        name: "Uberlândia (MG)",
        coordinates: Coordinates::new(-18.9186, -48.2772),
    },
    Hub {
        name: "Cascavel (PR)",
        coordinates: Coordinates::new(-24.9555, -53.4552),
    },
    Hub {
        name: "Campinas (SP)",
        coordinates: Coordinates::new(-22.9068, -47.0616),
    },
    Hub {
        name: "Porto de Santos (SP)",
        coordinates: Coordinates::new(-23.9882, -46.3095),
    },
];

/// Great-circle distance between two coordinates in km (haversine).
#[must_use]
pub fn distance_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Find the agribusiness hub closest to a location.
///
/// Returns the hub and its distance in km. The table is non-empty, so this
/// is total.
#[must_use]
pub fn nearest_hub(location: Coordinates) -> (&'static Hub, f64) {
    let mut best = &AGRO_HUBS[0];
    let mut best_dist = distance_km(location, best.coordinates);

    for hub in &AGRO_HUBS[1..] {
        let dist = distance_km(location, hub.coordinates);
        if dist < best_dist {
            best = hub;
            best_dist = dist;
        }
    }

    (best, best_dist)
}

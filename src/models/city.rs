//! Known cities and their static geographic metadata

use serde::{Deserialize, Serialize};

/// City covered by the trained model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    Islamabad,
    Lahore,
    Karachi,
    Peshawar,
    Quetta,
    Gilgit,
}

/// Static per-city geographic metadata
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CityGeo {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Elevation above sea level in meters
    pub elevation: f64,
}

impl City {
    /// All known cities, in the order the model was trained on
    pub const ALL: [City; 6] = [
        City::Islamabad,
        City::Lahore,
        City::Karachi,
        City::Peshawar,
        City::Quetta,
        City::Gilgit,
    ];

    /// City name as it appears in the model vocabulary
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            City::Islamabad => "Islamabad",
            City::Lahore => "Lahore",
            City::Karachi => "Karachi",
            City::Peshawar => "Peshawar",
            City::Quetta => "Quetta",
            City::Gilgit => "Gilgit",
        }
    }

    /// Geographic metadata for this city
    ///
    /// The registry is read-only; the same city always yields identical
    /// values.
    #[must_use]
    pub fn geo(self) -> CityGeo {
        match self {
            City::Islamabad => CityGeo {
                latitude: 33.6844,
                longitude: 73.0479,
                elevation: 540.0,
            },
            City::Lahore => CityGeo {
                latitude: 31.5204,
                longitude: 74.3587,
                elevation: 217.0,
            },
            City::Karachi => CityGeo {
                latitude: 24.8607,
                longitude: 67.0011,
                elevation: 8.0,
            },
            City::Peshawar => CityGeo {
                latitude: 34.0151,
                longitude: 71.5805,
                elevation: 359.0,
            },
            City::Quetta => CityGeo {
                latitude: 30.1798,
                longitude: 66.9750,
                elevation: 1680.0,
            },
            City::Gilgit => CityGeo {
                latitude: 35.9208,
                longitude: 74.3085,
                elevation: 1500.0,
            },
        }
    }
}

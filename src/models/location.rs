//! Location model for geographic coordinates and metadata

use serde::{Deserialize, Serialize};

/// A named geographic location
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// Location name (city, region, etc.)
    pub name: String,
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lon: f64,
    /// Country code (ISO 3166-1 alpha-2)
    pub country: String,
    /// State or region, where the geocoder provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Marked as a favorite by the user
    #[serde(default)]
    pub is_favorite: bool,
}

impl Location {
    /// Create a new location
    #[must_use]
    pub fn new(name: impl Into<String>, lat: f64, lon: f64, country: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
            country: country.into(),
            state: None,
            is_favorite: false,
        }
    }

    /// Two locations count as the same place iff both coordinates match exactly.
    /// Used for favorite and recent-search deduplication.
    #[must_use]
    pub fn same_coordinates(&self, other: &Self) -> bool {
        self.lat.to_bits() == other.lat.to_bits() && self.lon.to_bits() == other.lon.to_bits()
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.lat, self.lon)
    }
}

/// A point of interest attached to an event or activity
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Place {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

impl Place {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: None,
            lat: None,
            lon: None,
        }
    }
}

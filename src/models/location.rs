//! Inbound location selection payload

use serde::{Deserialize, Serialize};

/// A user-selected map location, as pushed by the browser.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LocationQuery {
    /// Coordinates in map order: `[longitude, latitude]`
    pub coords: [f64; 2],
    /// Display name chosen by the user
    pub name: String,
}

impl LocationQuery {
    /// Create a new location query
    #[must_use]
    pub fn new(coords: [f64; 2], name: impl Into<String>) -> Self {
        Self {
            coords,
            name: name.into(),
        }
    }

    /// Coordinates in `(latitude, longitude)` order, as weather lookups consume them.
    #[must_use]
    pub fn lat_lon(&self) -> (f64, f64) {
        (self.coords[1], self.coords[0])
    }
}

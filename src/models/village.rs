//! Outbound village record and points of interest

use serde::{Deserialize, Serialize};

/// Fixed description attached to every synthesized record.
pub const VILLAGE_DESC: &str = "User selected location";

/// Synthesized data for one selected location.
///
/// Constructed fresh per request and discarded after transmission.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VillageRecord {
    /// Display name, echoed from the query
    pub name: String,
    /// `[longitude, latitude]`, echoed from the query unmodified
    pub coords: [f64; 2],
    /// Fixed descriptive text
    pub desc: String,
    /// Temperature in Celsius, live or fallback
    pub temperature: f64,
    /// Air Quality Index, synthetic
    pub aqi: i64,
    /// Visitor-count metric, synthetic
    pub footfall: i64,
    /// Generated points of interest around the location
    pub pois: PoiSet,
}

/// Points of interest grouped into the three fixed categories.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PoiSet {
    pub homestays: [Poi; 2],
    pub tourist_spots: [Poi; 2],
    pub shops: [Poi; 2],
}

impl PoiSet {
    /// All six entries in category order.
    pub fn iter(&self) -> impl Iterator<Item = &Poi> {
        self.homestays
            .iter()
            .chain(self.tourist_spots.iter())
            .chain(self.shops.iter())
    }
}

/// A named point of interest near a center coordinate.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Poi {
    pub name: String,
    /// `[longitude, latitude]`
    pub coords: [f64; 2],
}

//! Points-of-interest generation around a selected location
//!
//! Produces the fixed six-entry set of nearby places, each jittered off the
//! center coordinate. Output is intentionally non-deterministic unless the
//! caller seeds the RNG.

use crate::models::{Poi, PoiSet};
use rand::RngExt;

/// Maximum per-axis offset of a generated POI from the center, in degrees.
pub const MAX_POI_OFFSET: f64 = 0.01;

/// Fixed labels, one pair per category.
pub const HOMESTAY_LABELS: [&str; 2] = ["Eco Lodge", "Village Stay"];
pub const TOURIST_SPOT_LABELS: [&str; 2] = ["Temple Point", "River View"];
pub const SHOP_LABELS: [&str; 2] = ["Craft Store", "Local Market"];

/// Generate the points of interest around `center` (`[longitude, latitude]`).
pub fn generate_pois<R: RngExt>(center: [f64; 2], rng: &mut R) -> PoiSet {
    let mut poi = |name: &str| Poi {
        name: name.to_string(),
        coords: [
            center[0] + rng.random_range(-MAX_POI_OFFSET..=MAX_POI_OFFSET),
            center[1] + rng.random_range(-MAX_POI_OFFSET..=MAX_POI_OFFSET),
        ],
    };

    PoiSet {
        homestays: [poi(HOMESTAY_LABELS[0]), poi(HOMESTAY_LABELS[1])],
        tourist_spots: [poi(TOURIST_SPOT_LABELS[0]), poi(TOURIST_SPOT_LABELS[1])],
        shops: [poi(SHOP_LABELS[0]), poi(SHOP_LABELS[1])],
    }
}

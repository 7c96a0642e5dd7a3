//! Data models for location queries and synthesized village data

pub mod location;
pub mod village;

pub use location::LocationQuery;
pub use village::{Poi, PoiSet, VillageRecord, VILLAGE_DESC};

//! `VillagePulse` - Real-time village digital-twin demo server
//!
//! Serves a static map page and answers location selections pushed over a
//! WebSocket channel with synthesized village data: live-or-fallback
//! temperature, synthetic air quality and footfall, and generated points
//! of interest.

pub mod channel;
pub mod config;
pub mod error;
pub mod models;
pub mod poi;
pub mod village;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use channel::{ClientEvent, ServerEvent};
pub use config::VillagePulseConfig;
pub use error::VillagePulseError;
pub use models::{LocationQuery, Poi, PoiSet, VillageRecord};
pub use weather::{EnvReading, EnvSource, OpenWeatherClient, TemperatureProvider};
pub use web::AppState;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, VillagePulseError>;

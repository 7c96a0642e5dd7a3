//! Environmental data lookup with a never-fails fallback
//!
//! This module provides the HTTP client for retrieving the current
//! temperature from the OpenWeatherMap API, and the best-effort
//! environment reading built on top of it. The provider is not a source of
//! real air-quality data; AQI is always synthesized.

use crate::config::WeatherConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use rand::RngExt;
use std::ops::RangeInclusive;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Temperature reported when the external lookup fails, in Celsius.
pub const FALLBACK_TEMPERATURE: f64 = 25.0;
/// AQI reported when the external lookup fails.
pub const FALLBACK_AQI: i64 = 90;
/// Range the synthetic AQI is sampled from on a successful lookup.
pub const AQI_RANGE: RangeInclusive<i64> = 40..=150;

/// Source of the current temperature for a coordinate pair.
#[async_trait]
pub trait TemperatureProvider: Send + Sync {
    /// Current temperature in Celsius at `(lat, lon)`.
    async fn current_temperature(&self, lat: f64, lon: f64) -> Result<f64>;
}

/// Weather API client for OpenWeatherMap
pub struct OpenWeatherClient {
    /// HTTP client
    client: reqwest::Client,
    /// API configuration
    config: WeatherConfig,
}

impl OpenWeatherClient {
    /// Create a new weather API client
    pub fn new(config: WeatherConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_seconds.into());

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent("VillagePulse/0.1.0")
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl TemperatureProvider for OpenWeatherClient {
    #[instrument(skip(self))]
    async fn current_temperature(&self, lat: f64, lon: f64) -> Result<f64> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .context("No weather API key configured")?;

        let url = format!(
            "{}/weather?lat={}&lon={}&appid={}&units={}",
            self.config.base_url, lat, lon, api_key, self.config.units
        );

        debug!("Requesting current weather for {:.4}, {:.4}", lat, lon);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| "Weather request failed")?
            .error_for_status()
            .with_context(|| "Weather API returned an error status")?;

        let weather: openweathermap::CurrentWeatherResponse = response
            .json()
            .await
            .with_context(|| "Failed to parse OpenWeatherMap weather response")?;

        Ok(weather.main.temp)
    }
}

/// A best-effort environment reading. Always valid; `source` records whether
/// live data was available.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvReading {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Synthetic Air Quality Index
    pub aqi: i64,
    /// Which path produced this reading
    pub source: EnvSource,
}

/// Whether an environment reading came from a live lookup or the fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum EnvSource {
    /// Temperature retrieved from the external provider
    Live,
    /// Lookup failed; fixed fallback values were used
    Fallback { reason: String },
}

/// Read the environment at `(lat, lon)`.
///
/// Never fails: any lookup error is logged and mapped to the fixed fallback
/// pair, with the reason recorded in [`EnvSource::Fallback`].
pub async fn read_environment<R: RngExt>(
    provider: &dyn TemperatureProvider,
    lat: f64,
    lon: f64,
    rng: &mut R,
) -> EnvReading {
    match provider.current_temperature(lat, lon).await {
        Ok(temperature) => EnvReading {
            temperature,
            aqi: rng.random_range(AQI_RANGE),
            source: EnvSource::Live,
        },
        Err(e) => {
            warn!("Weather lookup failed for {:.4}, {:.4}: {:#}", lat, lon, e);
            EnvReading {
                temperature: FALLBACK_TEMPERATURE,
                aqi: FALLBACK_AQI,
                source: EnvSource::Fallback {
                    reason: format!("{e:#}"),
                },
            }
        }
    }
}

/// `OpenWeatherMap` API response structures
mod openweathermap {
    use serde::Deserialize;

    /// Current weather response; only the fields we consume.
    #[derive(Debug, Deserialize)]
    pub struct CurrentWeatherResponse {
        pub main: MainReadings,
    }

    #[derive(Debug, Deserialize)]
    pub struct MainReadings {
        /// Temperature in the requested unit system
        pub temp: f64,
    }
}

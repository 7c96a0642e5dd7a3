//! Location update handling: synthesize a village record for a query

use crate::models::{LocationQuery, VillageRecord, VILLAGE_DESC};
use crate::poi;
use crate::weather::{self, TemperatureProvider};
use rand::RngExt;
use std::ops::RangeInclusive;

/// Range the synthetic footfall metric is sampled from.
pub const FOOTFALL_RANGE: RangeInclusive<i64> = 10..=300;

/// Build the reply for one location selection.
///
/// Always yields exactly one record; a failed weather lookup surfaces as
/// fallback values inside the record, never as an error.
pub async fn build_village_update<R: RngExt>(
    provider: &dyn TemperatureProvider,
    query: &LocationQuery,
    rng: &mut R,
) -> Vec<VillageRecord> {
    let (lat, lon) = query.lat_lon();
    let reading = weather::read_environment(provider, lat, lon, rng).await;

    let footfall = rng.random_range(FOOTFALL_RANGE);
    let pois = poi::generate_pois(query.coords, rng);

    vec![VillageRecord {
        name: query.name.clone(),
        coords: query.coords,
        desc: VILLAGE_DESC.to_string(),
        temperature: reading.temperature,
        aqi: reading.aqi,
        footfall,
        pois,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poi::MAX_POI_OFFSET;
    use crate::weather::AQI_RANGE;
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct FixedTemperature(f64);

    #[async_trait]
    impl TemperatureProvider for FixedTemperature {
        async fn current_temperature(&self, _lat: f64, _lon: f64) -> Result<f64> {
            Ok(self.0)
        }
    }

    struct Unreachable;

    #[async_trait]
    impl TemperatureProvider for Unreachable {
        async fn current_temperature(&self, _lat: f64, _lon: f64) -> Result<f64> {
            Err(anyhow!("connect error"))
        }
    }

    /// Panics unless queried with the expected `(lat, lon)` pair.
    struct ExpectCoords {
        lat: f64,
        lon: f64,
    }

    #[async_trait]
    impl TemperatureProvider for ExpectCoords {
        async fn current_temperature(&self, lat: f64, lon: f64) -> Result<f64> {
            assert_eq!((lat, lon), (self.lat, self.lon));
            Ok(10.0)
        }
    }

    #[tokio::test]
    async fn test_update_echoes_query_fields() {
        let query = LocationQuery::new([8.2275, 46.8182], "Interlaken");
        let mut rng = StdRng::seed_from_u64(3);

        let records = build_village_update(&FixedTemperature(12.5), &query, &mut rng).await;

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.name, "Interlaken");
        assert_eq!(record.coords, [8.2275, 46.8182]);
        assert_eq!(record.desc, "User selected location");
        assert_eq!(record.temperature, 12.5);
        assert!(AQI_RANGE.contains(&record.aqi));
        assert!(FOOTFALL_RANGE.contains(&record.footfall));
    }

    #[tokio::test]
    async fn test_lookup_receives_lat_lon_order() {
        // Query coords are [lon, lat]; the provider must see (lat, lon).
        let query = LocationQuery::new([77.2, 28.6], "Test Village");
        let mut rng = StdRng::seed_from_u64(3);

        let provider = ExpectCoords {
            lat: 28.6,
            lon: 77.2,
        };
        let records = build_village_update(&provider, &query, &mut rng).await;
        assert_eq!(records[0].temperature, 10.0);
    }

    #[tokio::test]
    async fn test_unreachable_lookup_scenario() {
        let query = LocationQuery::new([77.2, 28.6], "Test Village");
        let mut rng = StdRng::seed_from_u64(9);

        let records = build_village_update(&Unreachable, &query, &mut rng).await;

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.name, "Test Village");
        assert_eq!(record.coords, [77.2, 28.6]);
        assert_eq!(record.desc, "User selected location");
        assert_eq!(record.temperature, 25.0);
        assert_eq!(record.aqi, 90);
        assert!((10..=300).contains(&record.footfall));

        assert_eq!(record.pois.iter().count(), 6);
        for poi in record.pois.iter() {
            assert!((poi.coords[0] - 77.2).abs() <= MAX_POI_OFFSET);
            assert!((poi.coords[1] - 28.6).abs() <= MAX_POI_OFFSET);
        }
    }

    #[tokio::test]
    async fn test_records_are_fresh_per_request() {
        let query = LocationQuery::new([77.2, 28.6], "Test Village");
        let mut rng = StdRng::seed_from_u64(11);

        let first = build_village_update(&FixedTemperature(20.0), &query, &mut rng).await;
        let second = build_village_update(&FixedTemperature(20.0), &query, &mut rng).await;

        // Same echoed fields, independently sampled synthetic data
        assert_eq!(first[0].name, second[0].name);
        assert_ne!(first[0].pois, second[0].pois);
    }
}

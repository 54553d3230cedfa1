//! Demo weather provider.
//!
//! Generates bounded random conditions per city, standing in for a real
//! weather service. The fabricated payload has the same shape a real service
//! would return, so decoding into domain snapshots is shared with any future
//! HTTP provider.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::{
    error::LookupError,
    model::{Condition, WeatherRequest, WeatherSnapshot},
    provider::{
        WeatherProvider,
        response::{CurrentSection, ForecastSection, ServiceResponse},
    },
};

/// Simulated network round-trip.
const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

/// (condition, base °C) palette for current conditions. The actual reading
/// lands within ±5 °C of the base, feels-like within ±3 °C.
const CURRENT_PALETTE: &[(Condition, f64)] = &[
    (Condition::Sunny, 25.0),
    (Condition::PartlyCloudy, 20.0),
    (Condition::Cloudy, 18.0),
    (Condition::Rainy, 15.0),
    (Condition::Snowy, -2.0),
];

/// Conditions the forecast draws from.
const FORECAST_PALETTE: &[Condition] = &[
    Condition::Sunny,
    Condition::PartlyCloudy,
    Condition::Cloudy,
    Condition::LightRain,
];

#[derive(Debug, Clone)]
pub struct MockProvider {
    latency: Duration,
    seed: Option<u64>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
            seed: None,
        }
    }

    /// No simulated latency; for tests and scripted callers.
    pub fn instant() -> Self {
        Self {
            latency: Duration::ZERO,
            seed: None,
        }
    }

    /// Fix the RNG seed so fabricated payloads are deterministic.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    fn fabricate(&self, city: &str, today: NaiveDate) -> Result<ServiceResponse, LookupError> {
        // The geocoding stand-in: a city name needs at least one letter.
        if !city.chars().any(char::is_alphabetic) {
            return Err(LookupError::UnknownLocation(city.to_string()));
        }

        let mut rng = self.rng();

        let (condition, base) = CURRENT_PALETTE[rng.random_range(0..CURRENT_PALETTE.len())];

        let current = CurrentSection {
            temp: base + rng.random_range(-5.0..5.0),
            feels_like: base + rng.random_range(-3.0..3.0),
            humidity: rng.random_range(40..80),
            pressure: rng.random_range(1000..1050),
            wind_speed: rng.random_range(5.0..25.0),
            visibility: f64::from(rng.random_range(8_u8..13)),
            cloud_cover: rng.random_range(10..90),
            condition: condition.description().to_string(),
        };

        let forecast = forecast_labels(today)
            .into_iter()
            .map(|day| {
                let condition = FORECAST_PALETTE[rng.random_range(0..FORECAST_PALETTE.len())];
                ForecastSection {
                    day,
                    temp_min: f64::from(rng.random_range(5_u8..15)),
                    temp_max: f64::from(rng.random_range(15_u8..30)),
                    condition: condition.description().to_string(),
                }
            })
            .collect();

        Ok(ServiceResponse {
            name: capitalize(city),
            country: "Country".to_string(),
            current,
            forecast,
        })
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WeatherProvider for MockProvider {
    async fn fetch(&self, request: &WeatherRequest) -> Result<WeatherSnapshot, LookupError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let response = self.fabricate(&request.city, Utc::now().date_naive())?;
        debug!(city = %request.city, "fabricated demo weather payload");

        response.into_snapshot("mock", Utc::now())
    }
}

/// Labels for the five forecast days: "Tomorrow", then weekday names.
fn forecast_labels(today: NaiveDate) -> Vec<String> {
    (1..=5)
        .map(|offset| {
            if offset == 1 {
                "Tomorrow".to_string()
            } else {
                (today + chrono::Duration::days(offset)).format("%A").to_string()
            }
        })
        .collect()
}

fn capitalize(city: &str) -> String {
    let mut chars = city.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn any_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).expect("valid date")
    }

    #[test]
    fn fabricated_values_stay_within_documented_bounds() {
        for seed in 0..64 {
            let provider = MockProvider::instant().with_seed(seed);
            let response = provider.fabricate("london", any_date()).expect("city is valid");

            let current = &response.current;
            let (_, base) = CURRENT_PALETTE
                .iter()
                .find(|(c, _)| c.description() == current.condition)
                .expect("condition comes from the palette");

            assert!((current.temp - base).abs() <= 5.0, "temp off palette base: {}", current.temp);
            assert!((current.feels_like - base).abs() <= 3.0);
            assert!((40..80).contains(&current.humidity));
            assert!((1000..1050).contains(&current.pressure));
            assert!((5.0..25.0).contains(&current.wind_speed));
            assert!((8.0..=12.0).contains(&current.visibility));
            assert!((10..90).contains(&current.cloud_cover));

            assert_eq!(response.forecast.len(), 5);
            for day in &response.forecast {
                assert!((5.0..=14.0).contains(&day.temp_min));
                assert!((15.0..=29.0).contains(&day.temp_max));
                assert!(
                    FORECAST_PALETTE.iter().any(|c| c.description() == day.condition),
                    "forecast condition off palette: {}",
                    day.condition
                );
            }
        }
    }

    #[test]
    fn same_seed_same_payload() {
        let a = MockProvider::instant()
            .with_seed(42)
            .fabricate("tokyo", any_date())
            .expect("city is valid");
        let b = MockProvider::instant()
            .with_seed(42)
            .fabricate("tokyo", any_date())
            .expect("city is valid");

        let a = serde_json::to_string(&a).expect("serializable");
        let b = serde_json::to_string(&b).expect("serializable");
        assert_eq!(a, b);
    }

    #[test]
    fn numeric_query_is_unknown_location() {
        let provider = MockProvider::instant();
        let err = provider.fabricate("12345", any_date()).unwrap_err();
        assert_eq!(err, LookupError::UnknownLocation("12345".to_string()));
    }

    #[test]
    fn labels_start_at_tomorrow_then_weekdays() {
        // 2026-08-06 is a Thursday.
        let labels = forecast_labels(any_date());
        assert_eq!(labels, vec!["Tomorrow", "Saturday", "Sunday", "Monday", "Tuesday"]);
    }

    #[test]
    fn city_name_is_capitalized() {
        assert_eq!(capitalize("london"), "London");
        assert_eq!(capitalize("oslo"), "Oslo");
        assert_eq!(capitalize(""), "");
    }

    #[tokio::test]
    async fn fetch_produces_a_five_day_snapshot() {
        let provider = MockProvider::instant().with_seed(1);
        let request = WeatherRequest { city: "paris".to_string() };

        let snapshot = provider.fetch(&request).await.expect("fetch should succeed");

        assert_eq!(snapshot.provider, "mock");
        assert_eq!(snapshot.location_name, "Paris");
        assert_eq!(snapshot.forecast.len(), 5);
        assert_eq!(snapshot.forecast[0].label, "Tomorrow");
    }
}

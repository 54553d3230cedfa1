//! Serde model of a weather-service JSON payload.
//!
//! The bundled mock provider fabricates payloads in this shape, and a real
//! integration would deserialize its HTTP body into the same types, so the
//! conversion into domain snapshots lives in one place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::LookupError,
    model::{Condition, ForecastEntry, WeatherReading, WeatherSnapshot},
};

/// Top-level service payload: one location, current conditions, short forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceResponse {
    pub name: String,
    pub country: String,
    pub current: CurrentSection,
    pub forecast: Vec<ForecastSection>,
}

/// Current-conditions block. Temperatures in Celsius, wind in m/s,
/// visibility in km, pressure in hPa.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentSection {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub pressure: u32,
    pub wind_speed: f64,
    pub visibility: f64,
    pub cloud_cover: u8,
    pub condition: String,
}

/// One forecast day. Temperatures in Celsius.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSection {
    pub day: String,
    pub temp_min: f64,
    pub temp_max: f64,
    pub condition: String,
}

impl ServiceResponse {
    /// Decode a raw JSON body. Malformed payloads map to [`LookupError::Transient`]:
    /// the service answered, just not usably.
    pub fn from_json(body: &str) -> Result<Self, LookupError> {
        serde_json::from_str(body)
            .map_err(|e| LookupError::Transient(format!("malformed service response: {e}")))
    }

    /// Convert the wire payload into a domain snapshot.
    ///
    /// `observed_at` is supplied by the caller so decoding stays clock-free.
    pub fn into_snapshot(
        self,
        provider: &str,
        observed_at: DateTime<Utc>,
    ) -> Result<WeatherSnapshot, LookupError> {
        let condition = parse_condition(&self.current.condition)?;

        let forecast = self
            .forecast
            .into_iter()
            .map(|day| {
                Ok(ForecastEntry {
                    label: day.day,
                    condition: parse_condition(&day.condition)?,
                    temp_min_c: day.temp_min,
                    temp_max_c: day.temp_max,
                })
            })
            .collect::<Result<Vec<_>, LookupError>>()?;

        Ok(WeatherSnapshot {
            provider: provider.to_string(),
            location_name: self.name,
            country: self.country,
            current: WeatherReading {
                temperature_c: self.current.temp,
                feels_like_c: self.current.feels_like,
                humidity_pct: self.current.humidity,
                pressure_hpa: self.current.pressure,
                wind_speed_mps: self.current.wind_speed,
                visibility_km: self.current.visibility,
                cloud_cover_pct: self.current.cloud_cover,
                condition,
                observation_time: observed_at,
            },
            forecast,
        })
    }
}

fn parse_condition(raw: &str) -> Result<Condition, LookupError> {
    Condition::from_description(raw)
        .ok_or_else(|| LookupError::Transient(format!("unrecognized condition '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "name": "London",
        "country": "UK",
        "current": {
            "temp": 18.4,
            "feels_like": 17.1,
            "humidity": 62,
            "pressure": 1013,
            "wind_speed": 5.2,
            "visibility": 10.0,
            "cloud_cover": 45,
            "condition": "partly cloudy"
        },
        "forecast": [
            { "day": "Tomorrow", "temp_min": 9.0, "temp_max": 19.0, "condition": "sunny" },
            { "day": "Friday", "temp_min": 11.0, "temp_max": 21.0, "condition": "light rain" }
        ]
    }"#;

    #[test]
    fn decodes_a_full_payload() {
        let observed_at = Utc::now();
        let snapshot = ServiceResponse::from_json(SAMPLE)
            .expect("sample should parse")
            .into_snapshot("mock", observed_at)
            .expect("sample should convert");

        assert_eq!(snapshot.location_name, "London");
        assert_eq!(snapshot.country, "UK");
        assert_eq!(snapshot.current.temperature_c, 18.4);
        assert_eq!(snapshot.current.condition, Condition::PartlyCloudy);
        assert_eq!(snapshot.current.observation_time, observed_at);

        assert_eq!(snapshot.forecast.len(), 2);
        assert_eq!(snapshot.forecast[0].label, "Tomorrow");
        assert_eq!(snapshot.forecast[1].condition, Condition::LightRain);
        assert_eq!(snapshot.forecast[1].temp_max_c, 21.0);
    }

    #[test]
    fn malformed_json_is_transient() {
        let err = ServiceResponse::from_json("{ not json").unwrap_err();
        assert!(matches!(err, LookupError::Transient(_)));
    }

    #[test]
    fn unknown_condition_is_transient() {
        let body = SAMPLE.replace("partly cloudy", "sharknado");
        let err = ServiceResponse::from_json(&body)
            .expect("still valid json")
            .into_snapshot("mock", Utc::now())
            .unwrap_err();

        assert!(matches!(err, LookupError::Transient(reason) if reason.contains("sharknado")));
    }
}

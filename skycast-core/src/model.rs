use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A weather lookup request.
#[derive(Debug, Clone)]
pub struct WeatherRequest {
    pub city: String,
}

/// Sky condition palette shared by current readings and forecast entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rainy,
    LightRain,
    Snowy,
}

impl Condition {
    /// Human-readable descriptor, matching the strings a weather service
    /// would put in its payload.
    pub const fn description(&self) -> &'static str {
        match self {
            Condition::Sunny => "sunny",
            Condition::PartlyCloudy => "partly cloudy",
            Condition::Cloudy => "cloudy",
            Condition::Rainy => "rainy",
            Condition::LightRain => "light rain",
            Condition::Snowy => "snowy",
        }
    }

    /// Parse a service-payload descriptor back into a condition.
    pub fn from_description(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "sunny" => Some(Condition::Sunny),
            "partly cloudy" => Some(Condition::PartlyCloudy),
            "cloudy" => Some(Condition::Cloudy),
            "rainy" => Some(Condition::Rainy),
            "light rain" => Some(Condition::LightRain),
            "snowy" => Some(Condition::Snowy),
            _ => None,
        }
    }

    /// Terminal glyph for the condition.
    pub const fn icon(&self) -> &'static str {
        match self {
            Condition::Sunny => "☀",
            Condition::PartlyCloudy => "⛅",
            Condition::Cloudy => "☁",
            Condition::Rainy => "🌧",
            Condition::LightRain => "🌦",
            Condition::Snowy => "❄",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// Current conditions for one location.
///
/// Temperatures are canonical Celsius regardless of the display preference.
/// Fahrenheit values are computed at render time and never stored, so
/// repeated unit toggles cannot accumulate rounding error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub pressure_hpa: u32,
    pub wind_speed_mps: f64,
    pub visibility_km: f64,
    pub cloud_cover_pct: u8,
    pub condition: Condition,
    pub observation_time: DateTime<Utc>,
}

/// One day of the five-day forecast. Min/max are canonical Celsius.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub label: String,
    pub condition: Condition,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
}

/// Everything one successful lookup produces.
///
/// Replaced wholesale by the next lookup, never partially mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub provider: String,
    pub location_name: String,
    pub country: String,
    pub current: WeatherReading,
    pub forecast: Vec<ForecastEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_description_roundtrip() {
        let all = [
            Condition::Sunny,
            Condition::PartlyCloudy,
            Condition::Cloudy,
            Condition::Rainy,
            Condition::LightRain,
            Condition::Snowy,
        ];

        for condition in all {
            let parsed = Condition::from_description(condition.description())
                .expect("roundtrip should succeed");
            assert_eq!(condition, parsed);
        }
    }

    #[test]
    fn condition_parse_is_case_insensitive() {
        assert_eq!(
            Condition::from_description("Partly Cloudy"),
            Some(Condition::PartlyCloudy)
        );
        assert_eq!(Condition::from_description(" SUNNY "), Some(Condition::Sunny));
    }

    #[test]
    fn unknown_condition_is_none() {
        assert_eq!(Condition::from_description("volcanic ash"), None);
    }
}

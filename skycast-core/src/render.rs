//! Pure projection of application state into display instructions.
//!
//! Nothing here touches a terminal. [`render`] turns the current
//! [`AppState`] into a [`Frame`] of named, already-formatted text targets,
//! and the presentation layer decides where each one lands. All unit
//! conversion happens here, at the display boundary.

use crate::{
    model::WeatherSnapshot,
    state::AppState,
    units::{TemperatureUnit, to_display_unit},
};

/// One labelled detail cell (humidity, wind, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detail {
    pub label: &'static str,
    pub value: String,
}

/// One forecast row, temperatures already in the display unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastLine {
    pub day: String,
    pub icon: &'static str,
    pub high: String,
    pub low: String,
    pub description: String,
}

/// Display instructions for one snapshot: stable named targets the
/// presentation layer writes out verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub location: String,
    pub date_line: String,
    pub icon: &'static str,
    pub temperature: String,
    pub unit_suffix: &'static str,
    pub condition: String,
    pub feels_like: String,
    /// Active-unit indicator, derived from the unit itself.
    pub unit_toggle: String,
    pub details: Vec<Detail>,
    pub forecast: Vec<ForecastLine>,
}

/// Render the held snapshot in the selected unit.
///
/// Returns `None` before the first successful lookup. Pure: calling this
/// never mutates state, fetches data, or rounds anything into storage.
pub fn render(state: &AppState) -> Option<Frame> {
    state.snapshot().map(|snapshot| frame_for(snapshot, state.unit()))
}

fn frame_for(snapshot: &WeatherSnapshot, unit: TemperatureUnit) -> Frame {
    let reading = &snapshot.current;

    let temperature = to_display_unit(reading.temperature_c, unit).to_string();
    let feels_like = format!(
        "Feels like {}{}",
        to_display_unit(reading.feels_like_c, unit),
        unit.suffix()
    );

    let wind_kmh = (reading.wind_speed_mps * 3.6).round() as i32;

    let details = vec![
        Detail { label: "Humidity", value: format!("{}%", reading.humidity_pct) },
        Detail { label: "Wind", value: format!("{wind_kmh} km/h") },
        Detail { label: "Pressure", value: format!("{} hPa", reading.pressure_hpa) },
        Detail { label: "Visibility", value: format!("{:.0} km", reading.visibility_km) },
        Detail { label: "Cloudiness", value: format!("{}%", reading.cloud_cover_pct) },
    ];

    let forecast = snapshot
        .forecast
        .iter()
        .map(|entry| ForecastLine {
            day: entry.label.clone(),
            icon: entry.condition.icon(),
            high: format!("{}°", to_display_unit(entry.temp_max_c, unit)),
            low: format!("{}°", to_display_unit(entry.temp_min_c, unit)),
            description: entry.condition.description().to_string(),
        })
        .collect();

    Frame {
        location: format!("{}, {}", snapshot.location_name, snapshot.country),
        date_line: reading.observation_time.format("%A, %B %-d, %Y").to_string(),
        icon: reading.condition.icon(),
        temperature,
        unit_suffix: unit.suffix(),
        condition: reading.condition.description().to_string(),
        feels_like,
        unit_toggle: unit_toggle_line(unit),
        details,
        forecast,
    }
}

fn unit_toggle_line(unit: TemperatureUnit) -> String {
    match unit {
        TemperatureUnit::Celsius => "[°C] / °F".to_string(),
        TemperatureUnit::Fahrenheit => "°C / [°F]".to_string(),
    }
}

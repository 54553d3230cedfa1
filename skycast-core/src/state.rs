use crate::{model::WeatherSnapshot, units::TemperatureUnit};

/// Mutable session state: the last successful snapshot plus the display unit.
///
/// This is deliberately a plain value passed around by the presentation
/// layer, not a global. Toggling the unit only changes which projection
/// [`crate::render`] produces; the stored snapshot is untouched.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    snapshot: Option<WeatherSnapshot>,
    unit: TemperatureUnit,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    /// Replace the held snapshot wholesale.
    pub fn set_snapshot(&mut self, snapshot: WeatherSnapshot) {
        self.snapshot = Some(snapshot);
    }

    pub fn set_unit(&mut self, unit: TemperatureUnit) {
        self.unit = unit;
    }

    /// Flip the display unit, returning the new one.
    pub fn toggle_unit(&mut self) -> TemperatureUnit {
        self.unit = self.unit.toggled();
        self.unit
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::model::{Condition, WeatherReading, WeatherSnapshot};

    fn snapshot(temperature_c: f64) -> WeatherSnapshot {
        WeatherSnapshot {
            provider: "mock".into(),
            location_name: "London".into(),
            country: "UK".into(),
            current: WeatherReading {
                temperature_c,
                feels_like_c: temperature_c - 1.0,
                humidity_pct: 60,
                pressure_hpa: 1012,
                wind_speed_mps: 4.0,
                visibility_km: 10.0,
                cloud_cover_pct: 20,
                condition: Condition::PartlyCloudy,
                observation_time: Utc::now(),
            },
            forecast: Vec::new(),
        }
    }

    #[test]
    fn starts_empty_in_celsius() {
        let state = AppState::new();
        assert!(state.snapshot().is_none());
        assert_eq!(state.unit(), TemperatureUnit::Celsius);
    }

    #[test]
    fn toggle_flips_and_reports_new_unit() {
        let mut state = AppState::new();
        assert_eq!(state.toggle_unit(), TemperatureUnit::Fahrenheit);
        assert_eq!(state.toggle_unit(), TemperatureUnit::Celsius);
    }

    #[test]
    fn toggling_never_touches_the_stored_reading() {
        let mut state = AppState::new();
        state.set_snapshot(snapshot(21.7));

        state.toggle_unit();
        state.toggle_unit();

        let held = state.snapshot().expect("snapshot should survive toggling");
        assert_eq!(held.current.temperature_c.to_bits(), 21.7_f64.to_bits());
    }

    #[test]
    fn set_snapshot_replaces_wholesale() {
        let mut state = AppState::new();
        state.set_snapshot(snapshot(10.0));
        state.set_snapshot(snapshot(-3.2));

        let held = state.snapshot().expect("snapshot should be present");
        assert_eq!(held.current.temperature_c, -3.2);
    }
}

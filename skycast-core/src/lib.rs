//! Core library for the `skycast` terminal weather viewer.
//!
//! This crate defines:
//! - Shared domain models (snapshots, readings, forecasts)
//! - The canonical-Celsius unit-conversion contract
//! - Abstraction over weather providers, plus the bundled demo provider
//! - Session display state and pure frame rendering
//! - Configuration handling
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod render;
pub mod state;
pub mod units;

pub use config::Config;
pub use error::LookupError;
pub use model::{Condition, ForecastEntry, WeatherReading, WeatherRequest, WeatherSnapshot};
pub use provider::{ProviderId, WeatherProvider, lookup};
pub use render::{Frame, render};
pub use state::AppState;
pub use units::{TemperatureUnit, to_display_unit};

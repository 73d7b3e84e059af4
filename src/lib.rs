//! HTTP relay that resolves a city/country pair through the Open-Meteo
//! geocoding API and returns the current weather for the best match.
//!
//! The binary listens on its own; hosting runtimes that bring their own
//! server mount [`app`] instead.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod routes;
pub mod service;

pub use config::Config;
pub use error::LookupError;
pub use models::{GeoResult, LocationSummary, WeatherQuery, WeatherReport};
pub use service::{select_location, WeatherService};

/// Builds the complete, mountable application router.
pub fn app(config: &Config) -> anyhow::Result<axum::Router> {
    let service = WeatherService::new(config)?;
    Ok(routes::router(service))
}

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

use crate::config::Config;
use crate::constants::{AUTO_TIMEZONE, CURRENT_METRICS, GEOCODING_COUNT, PROVIDER_NAME, USER_AGENT};
use crate::error::LookupError;
use crate::models::{
    ForecastResponse, GeoResult, GeocodingResponse, LocationSummary, WeatherQuery, WeatherReport,
};

#[derive(Debug, Serialize)]
struct ForecastQuery<'a> {
    latitude: f64,
    longitude: f64,
    current: &'a str,
    timezone: &'a str,
}

/// Resolves a city/country pair to a location and fetches its current weather
#[derive(Debug, Clone)]
pub struct WeatherService {
    client: Arc<Client>,
    geocoding_url: Arc<str>,
    forecast_url: Arc<str>,
}

impl WeatherService {
    /// Creates a new service talking to the endpoints in `config`
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client: Arc::new(client),
            geocoding_url: config.geocoding_url.as_str().into(),
            forecast_url: config.forecast_url.as_str().into(),
        })
    }

    /// Makes an HTTP GET request and deserializes the JSON response
    async fn make_request<T, Q>(&self, provider: &str, url: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {provider} provider"))?;

        if !response.status().is_success() {
            anyhow::bail!(
                "{} request failed with status: {}",
                provider,
                response.status()
            );
        }

        let data = response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse {provider} response"))?;
        Ok(data)
    }

    /// Asks the geocoding provider for up to five candidates named `city`
    pub async fn geocode(&self, city: &str) -> Result<Vec<GeoResult>> {
        let response: GeocodingResponse = self
            .make_request(
                "geocoding",
                &self.geocoding_url,
                &[("name", city), ("count", GEOCODING_COUNT), ("format", "json")],
            )
            .await?;

        Ok(response.into_results())
    }

    /// Fetches current conditions at the given coordinates
    pub async fn current_weather(
        &self,
        latitude: f64,
        longitude: f64,
        timezone: Option<&str>,
    ) -> Result<serde_json::Value> {
        let query = ForecastQuery {
            latitude,
            longitude,
            current: CURRENT_METRICS,
            timezone: timezone.unwrap_or(AUTO_TIMEZONE),
        };

        let response: ForecastResponse = self
            .make_request("forecast", &self.forecast_url, &query)
            .await?;

        response
            .current
            .context("Forecast response is missing current conditions")
    }

    /// Runs the full geocode -> select -> forecast pipeline for one query
    pub async fn lookup(&self, query: &WeatherQuery) -> Result<WeatherReport, LookupError> {
        tracing::info!("Looking up weather for {}, {}", query.city, query.country);

        let candidates = self.geocode(&query.city).await?;
        let best = select_location(&candidates, &query.country).ok_or(LookupError::NotFound)?;

        tracing::debug!(
            "Selected {:?} ({:?}) out of {} candidates",
            best.name,
            best.country_code,
            candidates.len()
        );

        let lat = best
            .latitude
            .context("Geocoding result is missing latitude")?;
        let lon = best
            .longitude
            .context("Geocoding result is missing longitude")?;

        let weather = self
            .current_weather(lat, lon, best.timezone.as_deref())
            .await?;

        Ok(WeatherReport {
            location: LocationSummary {
                name: best.name.clone(),
                country: best.country.clone(),
                lat,
                lon,
                timezone: best.timezone.clone(),
            },
            weather,
            provider: PROVIDER_NAME,
        })
    }
}

/// Picks the first candidate in `country` (an uppercase code), falling back
/// to the provider's top-ranked candidate. `None` only when there are none.
pub fn select_location<'a>(candidates: &'a [GeoResult], country: &str) -> Option<&'a GeoResult> {
    candidates
        .iter()
        .find(|candidate| {
            candidate
                .country_code
                .as_deref()
                .is_some_and(|code| code.to_uppercase() == country)
        })
        .or_else(|| candidates.first())
}

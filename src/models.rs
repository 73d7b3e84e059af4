use serde::{Deserialize, Serialize};

use crate::error::LookupError;

// ============================================================================
// Open-Meteo Geocoding Models
// ============================================================================

/// Body of a geocoding search. Open-Meteo drops `results` entirely when
/// nothing matched.
#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    pub results: Option<Vec<GeoResult>>,
}

impl GeocodingResponse {
    pub fn into_results(self) -> Vec<GeoResult> {
        self.results.unwrap_or_default()
    }
}

/// One ranked geocoding candidate.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct GeoResult {
    pub name: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
}

// ============================================================================
// Open-Meteo Forecast Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    /// Passed through to the caller untouched
    pub current: Option<serde_json::Value>,
}

// ============================================================================
// Inbound Request Models
// ============================================================================

/// Raw `/weather` query parameters as they arrive.
#[derive(Debug, Default, Deserialize)]
pub struct WeatherParams {
    pub city: Option<String>,
    pub country: Option<String>,
}

/// Normalized lookup target: both fields trimmed and non-empty, country
/// uppercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    pub city: String,
    pub country: String,
}

impl WeatherQuery {
    pub fn new(city: Option<&str>, country: Option<&str>) -> Result<Self, LookupError> {
        let city = city.unwrap_or_default().trim();
        let country = country.unwrap_or_default().trim().to_uppercase();

        if city.is_empty() || country.is_empty() {
            return Err(LookupError::Validation);
        }

        Ok(Self {
            city: city.to_string(),
            country,
        })
    }
}

impl TryFrom<WeatherParams> for WeatherQuery {
    type Error = LookupError;

    fn try_from(params: WeatherParams) -> Result<Self, Self::Error> {
        Self::new(params.city.as_deref(), params.country.as_deref())
    }
}

// ============================================================================
// Outbound Response Models
// ============================================================================

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LocationSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub lat: f64,
    pub lon: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// Merged result returned by `GET /weather`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeatherReport {
    pub location: LocationSummary,
    pub weather: serde_json::Value,
    pub provider: &'static str,
}

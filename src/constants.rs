/// User agent string for outbound HTTP requests
pub const USER_AGENT: &str = concat!("weather-relay/", env!("CARGO_PKG_VERSION"));

/// Open-Meteo geocoding search endpoint
pub const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Open-Meteo forecast endpoint
pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Number of candidates requested from the geocoding provider
pub const GEOCODING_COUNT: &str = "5";

/// Current metrics requested from the forecast provider
pub const CURRENT_METRICS: &str = "temperature_2m,weather_code,wind_speed_10m";

/// Timezone sent to the forecast provider when the candidate has none
pub const AUTO_TIMEZONE: &str = "auto";

/// Provider name reported in every response
pub const PROVIDER_NAME: &str = "open-meteo";

/// Port used when `PORT` is not set
pub const DEFAULT_PORT: u16 = 3000;

/// Address used when `HOST` is not set
pub const DEFAULT_HOST: &str = "0.0.0.0";

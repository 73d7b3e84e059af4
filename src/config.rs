//! Process configuration, read from the environment once at startup.

use anyhow::{Context, Result};
use std::net::{IpAddr, SocketAddr};

use crate::constants::{DEFAULT_HOST, DEFAULT_PORT, FORECAST_URL, GEOCODING_URL};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Set when running under a hosting runtime that mounts the router itself.
    pub production: bool,
    pub geocoding_url: String,
    pub forecast_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            production: false,
            geocoding_url: GEOCODING_URL.to_string(),
            forecast_url: FORECAST_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup; unset keys keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(port) = lookup("PORT") {
            config.port = port
                .trim()
                .parse()
                .with_context(|| format!("Invalid PORT value '{port}'"))?;
        }
        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(env) = lookup("APP_ENV") {
            config.production = env == "production";
        }
        if let Some(url) = lookup("GEOCODING_URL") {
            config.geocoding_url = url;
        }
        if let Some(url) = lookup("FORECAST_URL") {
            config.forecast_url = url;
        }

        Ok(config)
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .with_context(|| format!("Invalid HOST value '{}'", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

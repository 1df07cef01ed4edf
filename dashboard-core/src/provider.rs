use crate::{
    Config,
    model::{CurrentWeather, ForecastEntry},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

pub mod openweather;

/// Errors raised while talking to the weather API. Callers that face the
/// user collapse these into a single message; the variants exist so logs
/// keep the real cause.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to send request to the weather API: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Weather API request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to decode weather API response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions for a city.
    async fn current_weather(&self, city: &str) -> Result<CurrentWeather, FetchError>;

    /// Raw multi-day forecast list for a city, in API order (3-hour steps).
    async fn forecast(&self, city: &str) -> Result<Vec<ForecastEntry>, FetchError>;
}

/// Construct the OpenWeather provider from config. The API key is injected
/// here, at construction; nothing reads it from globals afterwards.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured.\n\
             Hint: run `weather-dashboard configure` and enter your OpenWeather API key."
        )
    })?;

    Ok(Box::new(OpenWeatherProvider::new(
        api_key.to_owned(),
        config.base_url().to_owned(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_config_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = provider_from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("No API key configured"));
        assert!(err.to_string().contains("Hint: run `weather-dashboard configure`"));
    }

    #[test]
    fn provider_from_config_works_when_key_is_set() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());

        let provider = provider_from_config(&cfg);
        assert!(provider.is_ok());
    }
}

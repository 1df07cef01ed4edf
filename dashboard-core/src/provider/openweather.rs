use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{FetchError, WeatherProvider};
use crate::model::{CurrentWeather, ForecastEntry};

/// Client for the OpenWeather v2.5 HTTP API.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    /// GET `{base_url}/{path}?q={city}&appid={key}&units=metric` and decode
    /// the body. The body is read as text first so status errors can carry
    /// a snippet of what the API actually said.
    async fn get_json<T: DeserializeOwned>(&self, path: &str, city: &str) -> Result<T, FetchError> {
        let url = format!("{}/{path}", self.base_url);
        debug!(%url, city, "requesting weather data");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<CurrentWeather, FetchError> {
        let parsed: OwCurrentResponse = self.get_json("weather", city).await?;

        Ok(CurrentWeather {
            city: parsed.name,
            country: parsed.sys.country,
            description: first_description(&parsed.weather),
            temperature_c: parsed.main.temp,
            humidity_pct: parsed.main.humidity,
        })
    }

    async fn forecast(&self, city: &str) -> Result<Vec<ForecastEntry>, FetchError> {
        let parsed: OwForecastResponse = self.get_json("forecast", city).await?;

        Ok(parsed
            .list
            .into_iter()
            .map(|entry| ForecastEntry {
                timestamp: unix_to_utc(entry.dt),
                description: first_description(&entry.weather),
                temperature_c: entry.main.temp,
            })
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    sys: OwSys,
    weather: Vec<OwWeather>,
    main: OwCurrentMain,
}

#[derive(Debug, Deserialize)]
struct OwForecastMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    weather: Vec<OwWeather>,
    main: OwForecastMain,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

fn first_description(weather: &[OwWeather]) -> String {
    weather
        .first()
        .map(|w| w.description.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}

fn unix_to_utc(ts: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(ts, 0).unwrap_or_else(Utc::now)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    // Cut on a character boundary; error bodies are not guaranteed ASCII.
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

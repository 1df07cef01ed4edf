use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current conditions for a city, passed through from the weather API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub city: String,
    pub country: String,
    pub description: String,
    pub temperature_c: f64,
    pub humidity_pct: u8,
}

/// One 3-hour-granularity sample from the multi-day forecast list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub timestamp: DateTime<Utc>,
    pub description: String,
    pub temperature_c: f64,
}

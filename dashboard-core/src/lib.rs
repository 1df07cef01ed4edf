//! Core library for the `weather-dashboard` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The weather provider abstraction and its OpenWeather implementation
//! - The dashboard itself: fetch orchestration, forecast reduction,
//!   and rendering
//!
//! It is used by `dashboard-cli`, but can also be reused by other binaries
//! or services.

pub mod config;
pub mod dashboard;
pub mod forecast;
pub mod model;
pub mod provider;
pub mod render;

pub use config::Config;
pub use dashboard::{Dashboard, DashboardState, FETCH_ERROR_MESSAGE};
pub use forecast::daily_samples;
pub use model::{CurrentWeather, ForecastEntry};
pub use provider::{FetchError, WeatherProvider, provider_from_config};
pub use render::render;

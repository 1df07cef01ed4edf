use tracing::{debug, warn};

use crate::{
    forecast::daily_samples,
    model::{CurrentWeather, ForecastEntry},
    provider::{FetchError, WeatherProvider},
};

/// The one user-facing failure message. Network errors, non-2xx statuses
/// and unknown cities all collapse into it; the real cause goes to the log.
pub const FETCH_ERROR_MESSAGE: &str = "City not found or API error. Try again.";

/// Everything the dashboard renders: the city query, the loading/error
/// flags and the last successfully fetched results.
///
/// A failed refresh sets `error` but leaves `weather` and `forecast` as
/// they were, so stale data stays visible under the error banner.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub city: String,
    pub loading: bool,
    pub error: Option<String>,
    pub weather: Option<CurrentWeather>,
    pub forecast: Option<Vec<ForecastEntry>>,
}

/// Ties an in-flight refresh to the generation that started it. Results
/// carrying a stale token are discarded instead of applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RefreshToken(u64);

/// Drives the two weather fetches and owns the dashboard state.
#[derive(Debug)]
pub struct Dashboard {
    provider: Box<dyn WeatherProvider>,
    state: DashboardState,
    generation: u64,
}

impl Dashboard {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self {
            provider,
            state: DashboardState::default(),
            generation: 0,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.state.city = city.into();
    }

    /// Fetch current weather and forecast for the current city query, then
    /// fold the outcome into the state. Both requests are issued together
    /// and joined; if either fails the whole refresh fails and partial
    /// results are discarded. Does nothing when the query is empty.
    pub async fn refresh(&mut self) {
        let Some(token) = self.begin() else {
            return;
        };

        let city = self.state.city.trim().to_owned();
        let (weather, forecast) = tokio::join!(
            self.provider.current_weather(&city),
            self.provider.forecast(&city),
        );
        let outcome = weather.and_then(|w| forecast.map(|f| (w, f)));

        self.apply(token, outcome);
    }

    /// Invalidate any in-flight refresh, e.g. on teardown: a refresh that
    /// completes afterwards finds its token stale and is discarded.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.state.loading = false;
    }

    /// Start a refresh generation. Returns `None` (and touches nothing)
    /// when the city query is empty or whitespace.
    fn begin(&mut self) -> Option<RefreshToken> {
        if self.state.city.trim().is_empty() {
            return None;
        }

        self.generation += 1;
        self.state.loading = true;
        self.state.error = None;

        Some(RefreshToken(self.generation))
    }

    /// Fold a completed refresh into the state, unless the token is stale.
    fn apply(
        &mut self,
        token: RefreshToken,
        outcome: Result<(CurrentWeather, Vec<ForecastEntry>), FetchError>,
    ) {
        if token.0 != self.generation {
            debug!(token = token.0, current = self.generation, "discarding stale refresh");
            return;
        }

        match outcome {
            Ok((weather, entries)) => {
                self.state.weather = Some(weather);
                self.state.forecast = Some(daily_samples(entries));
            }
            Err(err) => {
                warn!(error = %err, city = %self.state.city, "weather fetch failed");
                self.state.error = Some(FETCH_ERROR_MESSAGE.to_owned());
            }
        }

        self.state.loading = false;
    }
}

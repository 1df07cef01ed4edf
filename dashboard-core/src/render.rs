use crate::dashboard::DashboardState;
use crate::model::ForecastEntry;

/// Render the dashboard state as text. Pure function of the state: the
/// header and city query always appear, then a loading line, an error
/// line, the current conditions and the reduced forecast, each only when
/// present.
pub fn render(state: &DashboardState) -> String {
    let mut out = String::new();

    out.push_str("Weather Dashboard\n");
    out.push_str(&format!("City: {}\n", state.city));

    if state.loading {
        out.push_str("Loading...\n");
    }

    if let Some(error) = &state.error {
        out.push_str(&format!("!! {error}\n"));
    }

    if let Some(weather) = &state.weather {
        out.push('\n');
        out.push_str(&format!("{}, {}\n", weather.city, weather.country));
        out.push_str(&format!("{}\n", weather.description));
        out.push_str(&format!("Temperature: {}°C\n", weather.temperature_c));
        out.push_str(&format!("Humidity: {}%\n", weather.humidity_pct));
    }

    if let Some(forecast) = &state.forecast {
        out.push('\n');
        out.push_str("5-Day Forecast\n");
        for entry in forecast {
            out.push_str(&render_entry(entry));
        }
    }

    out
}

fn render_entry(entry: &ForecastEntry) -> String {
    // Same shape as JavaScript's Date#toDateString, e.g. "Tue Mar 12 2024".
    format!(
        "{}  {}  {}°C\n",
        entry.timestamp.format("%a %b %d %Y"),
        entry.description,
        entry.temperature_c,
    )
}

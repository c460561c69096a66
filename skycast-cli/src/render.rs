//! Human-friendly rendering of the view state.
//!
//! Rounding and date formatting happen here only; the stored state keeps the
//! backend values untouched.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use skycast_core::{CurrentWeather, ForecastEntry, ViewState, weather_icon};

/// Render a full view snapshot.
pub fn view(state: &ViewState) -> String {
    match state {
        ViewState::Loading => "Loading...".to_string(),
        ViewState::Error(message) => message.clone(),
        ViewState::Ready { weather, forecast } => ready(weather, forecast),
    }
}

fn ready(weather: &CurrentWeather, forecast: &[ForecastEntry]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{}  {:.0}°  {}\n",
        weather_icon(&weather.description),
        weather.temperature,
        capitalize(&weather.description),
    ));
    out.push_str(&format!("{} — {}\n", long_date(&weather.date), weather.city));

    out.push_str("\n3-day forecast:\n");
    for entry in forecast {
        out.push_str(&format!(
            "  {:<7} {}  {:.0}°  {}\n",
            short_date(&entry.date),
            weather_icon(&entry.description),
            entry.temperature,
            capitalize(&entry.description),
        ));
    }

    out.push_str(&format!(
        "\nWind: {} {}   Humidity: {}% {}\n",
        weather.wind_speed,
        weather.unit.wind_label(),
        weather.humidity,
        humidity_gauge(weather.humidity),
    ));

    out
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// "24 August 2026" from an ISO-8601 string; falls back to the raw value.
fn long_date(raw: &str) -> String {
    parse_date(raw)
        .map(|d| d.format("%-d %B %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// "24 Aug" from an ISO-8601 string; falls back to the raw value.
fn short_date(raw: &str) -> String {
    parse_date(raw)
        .map(|d| d.format("%-d %b").to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn humidity_gauge(pct: u8) -> String {
    let filled = usize::from(pct.min(100)) / 10;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(10 - filled))
}

use serde::{Deserialize, Serialize};

/// Temperature unit system requested from the backend.
///
/// `metric` means Celsius and km/h, `imperial` means Fahrenheit and mph. The
/// backend does the conversion; the client never converts values itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Metric,
    Imperial,
}

impl Unit {
    /// The other unit system. Toggling twice is the identity.
    pub fn toggle(self) -> Self {
        match self {
            Unit::Metric => Unit::Imperial,
            Unit::Imperial => Unit::Metric,
        }
    }

    /// Wire representation used as the `unit` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Metric => "metric",
            Unit::Imperial => "imperial",
        }
    }

    /// Wind speed label for display.
    pub fn wind_label(self) -> &'static str {
        match self {
            Unit::Metric => "km/h",
            Unit::Imperial => "mph",
        }
    }

    /// Degrees label for display.
    pub fn degrees_label(self) -> &'static str {
        match self {
            Unit::Metric => "°C",
            Unit::Imperial => "°F",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The (city, unit) pair that determines what the next fetch requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub city: String,
    pub unit: Unit,
}

impl Query {
    pub fn new(city: impl Into<String>, unit: Unit) -> Self {
        Self { city: city.into(), unit }
    }
}

/// Current conditions as reported by the backend.
///
/// Values are stored exactly as decoded; rounding happens at display time
/// only. `date` is the backend's ISO-8601 string, kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub city: String,
    pub temperature: f64,
    pub description: String,
    pub wind_speed: f64,
    pub humidity: u8,
    pub icon: String,
    pub date: String,
    pub unit: Unit,
}

/// One day of the short-range forecast, in backend order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub date: String,
    pub temperature: f64,
    pub description: String,
    pub icon: String,
}

/// Everything the display can be at any instant.
///
/// Replaced wholesale on each transition so the view never mixes stale
/// `Ready` data with a `Loading` or `Error` belonging to a newer query.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Error(String),
    Ready {
        weather: CurrentWeather,
        forecast: Vec<ForecastEntry>,
    },
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ViewState::Ready { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_toggle_is_an_involution() {
        assert_eq!(Unit::Metric.toggle(), Unit::Imperial);
        assert_eq!(Unit::Imperial.toggle(), Unit::Metric);
        assert_eq!(Unit::Metric.toggle().toggle(), Unit::Metric);
    }

    #[test]
    fn unit_wire_representation() {
        assert_eq!(Unit::Metric.as_str(), "metric");
        assert_eq!(Unit::Imperial.as_str(), "imperial");
        assert_eq!(Unit::Metric.to_string(), "metric");
    }

    #[test]
    fn unit_deserializes_from_wire_strings() {
        let metric: Unit = serde_json::from_str("\"metric\"").expect("metric should parse");
        let imperial: Unit = serde_json::from_str("\"imperial\"").expect("imperial should parse");

        assert_eq!(metric, Unit::Metric);
        assert_eq!(imperial, Unit::Imperial);
        assert!(serde_json::from_str::<Unit>("\"kelvin\"").is_err());
    }

    #[test]
    fn current_weather_decodes_backend_body() {
        let body = r#"{
            "city": "Nairobi",
            "temperature": 24.6,
            "description": "partly cloudy",
            "wind_speed": 11.5,
            "humidity": 64,
            "icon": "partly-cloudy",
            "date": "2026-08-24T09:00:00Z",
            "unit": "metric"
        }"#;

        let weather: CurrentWeather = serde_json::from_str(body).expect("body should decode");
        assert_eq!(weather.city, "Nairobi");
        assert_eq!(weather.unit, Unit::Metric);
        assert_eq!(weather.humidity, 64);
        // Stored exactly as decoded, no rounding.
        assert!((weather.temperature - 24.6).abs() < f64::EPSILON);
        assert_eq!(weather.date, "2026-08-24T09:00:00Z");
    }

    #[test]
    fn forecast_decodes_as_ordered_array() {
        let body = r#"[
            {"date": "2026-08-25", "temperature": 23.0, "description": "sunny", "icon": "sun"},
            {"date": "2026-08-26", "temperature": 21.5, "description": "rainy", "icon": "rain"},
            {"date": "2026-08-27", "temperature": 22.0, "description": "cloudy", "icon": "cloud"}
        ]"#;

        let forecast: Vec<ForecastEntry> = serde_json::from_str(body).expect("body should decode");
        assert_eq!(forecast.len(), 3);
        assert_eq!(forecast[0].date, "2026-08-25");
        assert_eq!(forecast[2].description, "cloudy");
    }
}

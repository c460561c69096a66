use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::model::{CurrentWeather, ForecastEntry, Query};

/// Failure modes of one backend request.
///
/// The `Display` strings double as the user-facing messages that replace the
/// content area, so a caller can surface `err.to_string()` directly.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Non-2xx status from the current-weather endpoint.
    #[error("Weather data unavailable")]
    WeatherUnavailable { status: StatusCode },

    /// Non-2xx status from the forecast endpoint.
    #[error("Forecast data unavailable")]
    ForecastUnavailable { status: StatusCode },

    /// Network-level failure not tied to a specific endpoint.
    #[error("Failed to fetch weather data")]
    Request(#[from] reqwest::Error),

    /// Response body did not decode as the expected shape.
    #[error("Failed to fetch weather data")]
    Decode(#[source] serde_json::Error),
}

/// Abstraction over the weather API, so the controller can be exercised
/// without a live HTTP server.
#[async_trait]
pub trait WeatherBackend: Send + Sync + std::fmt::Debug {
    /// `GET /api/weather/current?city=..&unit=..`
    async fn current(&self, query: &Query) -> Result<CurrentWeather, FetchError>;

    /// `GET /api/weather/forecast?city=..&unit=..`
    async fn forecast(&self, query: &Query) -> Result<Vec<ForecastEntry>, FetchError>;
}

/// reqwest-backed client for the local weather API.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: String,
    http: Client,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query,
        unavailable: fn(StatusCode) -> FetchError,
    ) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, city = %query.city, unit = %query.unit, "issuing backend request");

        let res = self
            .http
            .get(&url)
            .query(&[("city", query.city.as_str()), ("unit", query.unit.as_str())])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            debug!(%url, %status, "backend returned non-success status");
            return Err(unavailable(status));
        }

        let body = res.text().await?;
        serde_json::from_str(&body).map_err(FetchError::Decode)
    }
}

#[async_trait]
impl WeatherBackend for HttpBackend {
    async fn current(&self, query: &Query) -> Result<CurrentWeather, FetchError> {
        self.get_json("/api/weather/current", query, |status| {
            FetchError::WeatherUnavailable { status }
        })
        .await
    }

    async fn forecast(&self, query: &Query) -> Result<Vec<ForecastEntry>, FetchError> {
        self.get_json("/api/weather/forecast", query, |status| {
            FetchError::ForecastUnavailable { status }
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_match_user_facing_strings() {
        let err = FetchError::WeatherUnavailable {
            status: StatusCode::NOT_FOUND,
        };
        assert_eq!(err.to_string(), "Weather data unavailable");

        let err = FetchError::ForecastUnavailable {
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(err.to_string(), "Forecast data unavailable");

        let err = FetchError::Decode(
            serde_json::from_str::<CurrentWeather>("{}").expect_err("empty object must not decode"),
        );
        assert_eq!(err.to_string(), "Failed to fetch weather data");
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let backend = HttpBackend::new("http://127.0.0.1:8080/");
        assert_eq!(backend.base_url, "http://127.0.0.1:8080");
    }
}

//! Core library for the `skycast` terminal weather client.
//!
//! This crate defines:
//! - The shared domain model (queries, weather data, view state)
//! - The view-state controller coordinating paired backend fetches
//! - The HTTP client for the weather API and its error taxonomy
//! - Configuration handling
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries.

pub mod backend;
pub mod config;
pub mod controller;
pub mod icon;
pub mod model;

pub use backend::{FetchError, HttpBackend, WeatherBackend};
pub use config::Config;
pub use controller::ViewController;
pub use icon::weather_icon;
pub use model::{CurrentWeather, ForecastEntry, Query, Unit, ViewState};

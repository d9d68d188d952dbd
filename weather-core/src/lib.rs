//! Core library for the `weather-lookup` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather HTTP client (geocoding + current weather)
//! - Schema validation of weather payloads
//! - The lookup service and the state it publishes
//!
//! It is used by `weather-lookup-cli`, but any UI layer can drive
//! [`WeatherLookupService`] and observe its [`LookupState`].

pub mod config;
pub mod error;
pub mod model;
pub mod openweather;
pub mod schema;
pub mod service;

pub use config::Config;
pub use error::LookupError;
pub use model::{GeoResult, LookupOutcome, LookupState, LookupStatus, SearchRequest, WeatherRecord};
pub use openweather::OpenWeatherClient;
pub use service::WeatherLookupService;

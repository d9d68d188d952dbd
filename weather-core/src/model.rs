use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A city/country pair to look up. Neither field is validated before use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub city: String,
    /// ISO 3166 country code, e.g. "ES".
    pub country: String,
}

impl SearchRequest {
    pub fn new(city: impl Into<String>, country: impl Into<String>) -> Self {
        Self { city: city.into(), country: country.into() }
    }

    /// Value of the geocoding `q` parameter.
    pub fn query(&self) -> String {
        format!("{},{}", self.city, self.country)
    }
}

/// Coordinates of the first geocoding candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoResult {
    pub latitude: f64,
    pub longitude: f64,
}

/// Validated current weather. Temperatures are in Kelvin, the API default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub location_name: String,
    pub current_temp: f64,
    pub max_temp: f64,
    pub min_temp: f64,
}

impl WeatherRecord {
    pub fn has_result(&self) -> bool {
        !self.location_name.is_empty()
    }
}

/// Phase of the most recent lookup.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "phase", content = "reason", rename_all = "snake_case")]
pub enum LookupStatus {
    #[default]
    Idle,
    Loading,
    Success,
    NotFound,
    /// The weather payload did not match the expected shape.
    Invalid(String),
    /// A request failed before a usable payload arrived.
    Failed(String),
}

/// Observable state of a [`WeatherLookupService`](crate::WeatherLookupService).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LookupState {
    pub data: WeatherRecord,
    pub is_loading: bool,
    pub is_not_found: bool,
    pub status: LookupStatus,
    pub completed_at: Option<DateTime<Utc>>,
}

impl LookupState {
    pub fn has_result(&self) -> bool {
        self.data.has_result()
    }
}

/// Tagged result of a single lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(WeatherRecord),
    NotFound,
    Invalid(String),
    Failed(String),
}

impl LookupOutcome {
    pub fn record(&self) -> Option<&WeatherRecord> {
        match self {
            LookupOutcome::Found(record) => Some(record),
            _ => None,
        }
    }
}

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::{
    error::LookupError,
    model::{GeoResult, SearchRequest},
    schema::first_geo_result,
};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

const GEOCODE_PATH: &str = "/geo/1.0/direct";
const WEATHER_PATH: &str = "/data/2.5/weather";

/// Thin HTTP client for the two OpenWeather endpoints used by a lookup.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: String, base_url: &str) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a city/country pair to the coordinates of the first candidate.
    pub async fn geocode(&self, request: &SearchRequest) -> Result<Option<GeoResult>, LookupError> {
        let query = request.query();
        let body = self
            .get_json(GEOCODE_PATH, &[("q", query.as_str()), ("appid", self.api_key.as_str())])
            .await?;

        first_geo_result(&body)
    }

    /// Fetch the raw current-weather payload for a coordinate pair.
    pub async fn current_weather(&self, geo: GeoResult) -> Result<Value, LookupError> {
        let lat = geo.latitude.to_string();
        let lon = geo.longitude.to_string();

        self.get_json(
            WEATHER_PATH,
            &[("lat", lat.as_str()), ("lon", lon.as_str()), ("appid", self.api_key.as_str())],
        )
        .await
    }

    async fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, LookupError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "Sending OpenWeather request");

        let res = self.http.get(&url).query(query).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(LookupError::Transport(format!(
                "OpenWeather request to {} failed with status {}: {}",
                path,
                status,
                truncate_body(&body),
            )));
        }

        serde_json::from_str(&body).map_err(|e| {
            LookupError::Transport(format!("Failed to parse OpenWeather JSON from {path}: {e}"))
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}

//! Shape checks for OpenWeather payloads.
//!
//! Payloads arrive as untyped JSON and only become domain types here.
//! Unknown fields are ignored.

use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::LookupError,
    model::{GeoResult, WeatherRecord},
};

#[derive(Debug, Deserialize)]
struct OwGeoCandidate {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    temp_max: f64,
    temp_min: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
}

/// Validate a current-weather payload into a [`WeatherRecord`].
pub fn validate_weather(payload: &Value) -> Result<WeatherRecord, LookupError> {
    let parsed = OwCurrentResponse::deserialize(payload)
        .map_err(|e| LookupError::Invalid(e.to_string()))?;

    Ok(WeatherRecord {
        location_name: parsed.name,
        current_temp: parsed.main.temp,
        max_temp: parsed.main.temp_max,
        min_temp: parsed.main.temp_min,
    })
}

/// Extract the first candidate of a geocoding payload.
///
/// `Ok(None)` means the array was empty or its first element is falsy
/// (`null`, `false`, `0`, `""`). A body that is not an array at all, or a
/// candidate object without numeric coordinates, is a transport error rather
/// than not-found.
pub fn first_geo_result(payload: &Value) -> Result<Option<GeoResult>, LookupError> {
    let candidates = payload.as_array().ok_or_else(|| {
        LookupError::Transport(format!("Geocoding response is not an array: {}", kind(payload)))
    })?;

    let first = match candidates.first() {
        None => return Ok(None),
        Some(first) if is_falsy(first) => return Ok(None),
        Some(first) => first,
    };

    let candidate = OwGeoCandidate::deserialize(first)
        .map_err(|e| LookupError::Transport(format!("Malformed geocoding candidate: {e}")))?;

    Ok(Some(GeoResult { latitude: candidate.lat, longitude: candidate.lon }))
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

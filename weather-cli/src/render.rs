use chrono::Local;
use weather_core::{LookupOutcome, LookupState, SearchRequest, WeatherRecord};

const KELVIN_OFFSET: f64 = 273.15;

fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

fn temp(kelvin: f64) -> String {
    format!("{:.1} K ({:.1} °C)", kelvin, kelvin_to_celsius(kelvin))
}

pub fn record(record: &WeatherRecord) -> String {
    format!(
        "Weather in {}\n  Current: {}\n  Max:     {}\n  Min:     {}",
        record.location_name,
        temp(record.current_temp),
        temp(record.max_temp),
        temp(record.min_temp),
    )
}

pub fn outcome(request: &SearchRequest, outcome: &LookupOutcome, state: &LookupState) -> String {
    let body = match outcome {
        LookupOutcome::Found(r) => record(r),
        LookupOutcome::NotFound => {
            format!("No location found for '{}' in '{}'.", request.city, request.country)
        }
        LookupOutcome::Invalid(reason) => {
            format!("The weather service returned an unexpected payload: {reason}")
        }
        LookupOutcome::Failed(reason) => format!("Weather lookup failed: {reason}"),
    };

    match state.completed_at {
        Some(at) => format!("{body}\n  (as of {})", at.with_timezone(&Local).format("%Y-%m-%d %H:%M")),
        None => body,
    }
}

//! Lookup lifecycle: geocode, fetch weather, validate, publish state.
//!
//! State lives in a [`tokio::sync::watch`] channel so a UI can observe
//! `is_loading` while the request chain is in flight. Concurrent lookups are
//! neither cancelled nor serialized; the last one to resolve wins.

use chrono::Utc;
use tokio::sync::watch;
use tracing::{error, info, warn};

use crate::{
    error::LookupError,
    model::{LookupOutcome, LookupState, LookupStatus, SearchRequest, WeatherRecord},
    openweather::OpenWeatherClient,
    schema::validate_weather,
};

#[derive(Debug)]
pub struct WeatherLookupService {
    client: OpenWeatherClient,
    state: watch::Sender<LookupState>,
}

impl WeatherLookupService {
    pub fn new(client: OpenWeatherClient) -> Self {
        let (state, _) = watch::channel(LookupState::default());
        Self { client, state }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> LookupState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state transition.
    pub fn subscribe(&self) -> watch::Receiver<LookupState> {
        self.state.subscribe()
    }

    pub fn has_result(&self) -> bool {
        self.state.borrow().has_result()
    }

    /// Run one lookup. Never fails: every error is folded into the returned
    /// outcome and the published state.
    ///
    /// The `Loading` transition is published on the first poll of the
    /// returned future, not when `lookup` is called.
    pub async fn lookup(&self, request: &SearchRequest) -> LookupOutcome {
        info!(city = %request.city, country = %request.country, "Starting weather lookup");

        self.state.send_modify(|s| {
            s.is_loading = true;
            s.data = WeatherRecord::default();
            s.status = LookupStatus::Loading;
        });

        let result = self.run(request).await;

        let outcome = match result {
            Ok(record) => {
                info!(location = %record.location_name, "Weather lookup succeeded");
                LookupOutcome::Found(record)
            }
            Err(LookupError::NotFound) => {
                info!(query = %request.query(), "Location not found");
                LookupOutcome::NotFound
            }
            Err(LookupError::Invalid(reason)) => {
                warn!(%reason, "Discarding weather payload that failed validation");
                LookupOutcome::Invalid(reason)
            }
            Err(e) => {
                error!(error = %e, "Weather lookup failed");
                LookupOutcome::Failed(e.to_string())
            }
        };

        self.state.send_modify(|s| {
            match &outcome {
                LookupOutcome::Found(record) => {
                    s.data = record.clone();
                    s.status = LookupStatus::Success;
                }
                LookupOutcome::NotFound => s.status = LookupStatus::NotFound,
                LookupOutcome::Invalid(reason) => s.status = LookupStatus::Invalid(reason.clone()),
                LookupOutcome::Failed(reason) => s.status = LookupStatus::Failed(reason.clone()),
            }
            s.is_loading = false;
            s.completed_at = Some(Utc::now());
        });

        outcome
    }

    async fn run(&self, request: &SearchRequest) -> Result<WeatherRecord, LookupError> {
        let geo = self.client.geocode(request).await?;

        // The not-found flag is only decided once geocoding has answered.
        let found = geo.is_some();
        self.state.send_modify(|s| s.is_not_found = !found);

        let geo = geo.ok_or(LookupError::NotFound)?;
        let payload = self.client.current_weather(geo).await?;

        validate_weather(&payload)
    }
}

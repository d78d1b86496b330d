//! REST API helpers for the schedules service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`; the caller decides whether a
//! failure becomes a toast. Non-2xx responses are reported by status code
//! only, the body is not inspected.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::error::ApiError;
use super::types::{ScheduleId, ScheduleRecord};
#[cfg(feature = "hydrate")]
use super::types::{SchedulePayload, SchedulesPayload};

fn schedule_endpoint(api_base: &str, id: &ScheduleId) -> String {
    format!("{api_base}/schedules/{id}")
}

fn schedules_endpoint(api_base: &str) -> String {
    format!("{api_base}/schedules")
}

/// Remote operations the schedule table depends on.
///
/// Futures are not required to be `Send`; they run on the browser event loop.
pub trait ScheduleService {
    fn delete_schedule(&self, id: &ScheduleId) -> impl Future<Output = Result<(), ApiError>>;

    /// Resolves with the server's authoritative copy of the record.
    fn update_schedule(&self, record: &ScheduleRecord) -> impl Future<Output = Result<ScheduleRecord, ApiError>>;
}

/// `ScheduleService` backed by the HTTP helpers in this module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpScheduleService {
    api_base: String,
}

impl HttpScheduleService {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self { api_base: api_base.into() }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

impl ScheduleService for HttpScheduleService {
    fn delete_schedule(&self, id: &ScheduleId) -> impl Future<Output = Result<(), ApiError>> {
        delete_schedule(&self.api_base, id)
    }

    fn update_schedule(&self, record: &ScheduleRecord) -> impl Future<Output = Result<ScheduleRecord, ApiError>> {
        update_schedule(&self.api_base, record)
    }
}

/// Fetch every schedule via `GET {api_base}/schedules`.
///
/// # Errors
///
/// Returns an error if the request fails, the server responds with a non-OK
/// status, or the body is not a schedule list.
pub async fn fetch_schedules(api_base: &str) -> Result<Vec<ScheduleRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = schedules_endpoint(api_base);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body: SchedulesPayload = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.into_records())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = schedules_endpoint(api_base);
        Err(ApiError::Unavailable)
    }
}

/// Delete one schedule via `DELETE {api_base}/schedules/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the server responds with a
/// non-OK status.
pub async fn delete_schedule(api_base: &str, id: &ScheduleId) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = schedule_endpoint(api_base, id);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = schedule_endpoint(api_base, id);
        Err(ApiError::Unavailable)
    }
}

/// Send an edited record via `PUT {api_base}/schedules/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails, the server responds with a non-OK
/// status, or the response is not a schedule record.
pub async fn update_schedule(api_base: &str, record: &ScheduleRecord) -> Result<ScheduleRecord, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = schedule_endpoint(api_base, &record.id);
        let resp = gloo_net::http::Request::put(&url)
            .json(record)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body: SchedulePayload = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.into_record())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = schedule_endpoint(api_base, &record.id);
        Err(ApiError::Unavailable)
    }
}

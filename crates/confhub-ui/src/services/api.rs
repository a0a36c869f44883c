//! HTTP client helpers (REST).
//!
//! # Design
//! - One client per app boot, shared through `ApiCtx`.
//! - Every request carries the bearer token when one is configured.
//! - Aborted requests surface as [`ApiError::Cancelled`], never as failures.

use crate::core::error::ApiError;
use crate::core::wire::{
    bearer, camera_ready_path, decode_json, decode_settings_body, is_absent_status, join_url,
    session_path, status_error, track_path,
};
use confhub_api_models::{
    CameraReadySettings, ConferenceSession, ConferenceSessionResponse, TrackId,
    TrackUpdateRequest,
};
use gloo_net::http::{Request, Response};
use web_sys::AbortSignal;

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub base_url: String,
    pub access_token: Option<String>,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>, access_token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token,
        }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    fn authorize(&self, req: Request) -> Request {
        match self.access_token.as_deref().and_then(bearer) {
            Some(value) => req.header("Authorization", &value),
            None => req,
        }
    }

    async fn send(req: Request, signal: Option<&AbortSignal>) -> Result<Response, ApiError> {
        req.send().await.map_err(|err| {
            if signal.is_some_and(AbortSignal::aborted) {
                ApiError::Cancelled
            } else {
                ApiError::Network(err.to_string())
            }
        })
    }

    async fn read_body(resp: Response, signal: Option<&AbortSignal>) -> Result<String, ApiError> {
        resp.text().await.map_err(|err| {
            if signal.is_some_and(AbortSignal::aborted) {
                ApiError::Cancelled
            } else {
                ApiError::Decode(err.to_string())
            }
        })
    }

    async fn ensure_success(resp: Response) -> Result<Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(status_error(status, &body))
    }

    pub(crate) async fn fetch_session(
        &self,
        conference_id: &str,
        signal: Option<&AbortSignal>,
    ) -> Result<ConferenceSession, ApiError> {
        let req = self
            .authorize(Request::get(&self.url(&session_path(conference_id))))
            .abort_signal(signal);
        let resp = Self::ensure_success(Self::send(req, signal).await?).await?;
        let body = Self::read_body(resp, signal).await?;
        decode_json::<ConferenceSessionResponse>(&body).map(|envelope| envelope.result)
    }

    pub(crate) async fn fetch_camera_ready_settings(
        &self,
        track: &TrackId,
        signal: Option<&AbortSignal>,
    ) -> Result<Option<CameraReadySettings>, ApiError> {
        let req = self
            .authorize(Request::get(&self.url(&camera_ready_path(track))))
            .abort_signal(signal);
        let resp = Self::send(req, signal).await?;
        if is_absent_status(resp.status()) {
            return Ok(None);
        }
        let resp = Self::ensure_success(resp).await?;
        let body = Self::read_body(resp, signal).await?;
        decode_settings_body(&body)
    }

    pub(crate) async fn update_camera_ready_settings(
        &self,
        track: &TrackId,
        settings: &CameraReadySettings,
    ) -> Result<(), ApiError> {
        let req = self
            .authorize(Request::put(&self.url(&camera_ready_path(track))))
            .json(settings)
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        Self::ensure_success(Self::send(req, None).await?).await?;
        Ok(())
    }

    pub(crate) async fn rename_track(&self, track: &TrackId, name: &str) -> Result<(), ApiError> {
        let body = TrackUpdateRequest {
            name: name.to_string(),
        };
        let req = self
            .authorize(Request::put(&self.url(&track_path(track))))
            .json(&body)
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        Self::ensure_success(Self::send(req, None).await?).await?;
        Ok(())
    }

    pub(crate) async fn delete_track(&self, track: &TrackId) -> Result<(), ApiError> {
        let req = self.authorize(Request::delete(&self.url(&track_path(track))));
        Self::ensure_success(Self::send(req, None).await?).await?;
        Ok(())
    }
}

//! Browser transport for camera-ready settings.
//!
//! # Design
//! - Each fetch owns an `AbortController` tied to the caller's cancel token.
//! - Saves are not abortable; the page keeps the save indicator until they settle.

use crate::core::cancel::CancelToken;
use crate::core::error::ApiError;
use crate::features::camera_ready::logic::CameraReadyApi;
use crate::services::api::ApiClient;
use async_trait::async_trait;
use confhub_api_models::{CameraReadySettings, TrackId};
use web_sys::AbortController;

#[async_trait(?Send)]
impl CameraReadyApi for ApiClient {
    async fn fetch_camera_ready(
        &self,
        track: &TrackId,
        cancel: &CancelToken,
    ) -> Result<Option<CameraReadySettings>, ApiError> {
        let Ok(controller) = AbortController::new() else {
            return self.fetch_camera_ready_settings(track, None).await;
        };
        let signal = controller.signal();
        cancel.on_cancel(move || controller.abort());
        self.fetch_camera_ready_settings(track, Some(&signal)).await
    }

    async fn update_camera_ready(
        &self,
        track: &TrackId,
        settings: &CameraReadySettings,
    ) -> Result<(), ApiError> {
        self.update_camera_ready_settings(track, settings).await
    }
}

//! API helpers for track management.
//!
//! # Design
//! - Keep HTTP calls localized to the feature layer.
//! - Callers pass names already normalized by `logic::normalize_track_name`.

use crate::core::error::ApiError;
use crate::services::api::ApiClient;
use confhub_api_models::TrackId;

/// Rename a track.
pub(crate) async fn rename_track(
    client: &ApiClient,
    track: &TrackId,
    name: &str,
) -> Result<(), ApiError> {
    client.rename_track(track, name).await
}

/// Delete a track.
pub(crate) async fn delete_track(client: &ApiClient, track: &TrackId) -> Result<(), ApiError> {
    client.delete_track(track).await
}

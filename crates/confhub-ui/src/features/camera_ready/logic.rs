//! Load/save drivers and pure helpers for camera-ready settings.
//!
//! # Design
//! - Drivers are generic over `CameraReadyApi` so they run natively in tests.
//! - Cancellation is checked after the request settles; a cancelled load never
//!   reports a failure.
//! - Notices are chosen here, rendered by the app shell.

use crate::core::cancel::CancelToken;
use crate::core::error::ApiError;
use crate::core::notify::Notice;
use crate::features::camera_ready::actions::EntryEdit;
use crate::features::camera_ready::defaults::default_settings;
use async_trait::async_trait;
use confhub_api_models::{CameraReadySettings, FileRequirement, TrackId};

/// Error notice shown when settings fail to load.
pub const LOAD_FAILED: Notice = Notice::error(
    "camera_ready.load_failed",
    "Something went wrong, please try again later.",
);

/// Success notice shown after a save.
pub const SAVE_SUCCEEDED: Notice = Notice::success(
    "camera_ready.save_success",
    "Save Submission Settings Successfully.",
);

/// Remote service for per-track camera-ready settings.
#[async_trait(?Send)]
pub trait CameraReadyApi {
    /// Fetch the stored record; `Ok(None)` when the track has none.
    ///
    /// Implementations should abort the underlying request when `cancel` fires.
    async fn fetch_camera_ready(
        &self,
        track: &TrackId,
        cancel: &CancelToken,
    ) -> Result<Option<CameraReadySettings>, ApiError>;

    /// Replace the stored record.
    async fn update_camera_ready(
        &self,
        track: &TrackId,
        settings: &CameraReadySettings,
    ) -> Result<(), ApiError>;
}

/// Where the editable lists came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsSource {
    /// Stored record returned by the service.
    Remote,
    /// Built-in defaults; the track has no stored record.
    Defaults,
}

/// Result of a settings fetch as seen by the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Settings are available for editing.
    Loaded {
        /// Editable record.
        settings: CameraReadySettings,
        /// Origin of the record.
        source: SettingsSource,
    },
    /// The fetch failed.
    Failed(ApiError),
    /// The fetch was cancelled by its owner.
    Cancelled,
}

/// Fetch settings for `track`, substituting defaults for an absent record.
pub async fn load_settings<A>(api: &A, track: &TrackId, cancel: &CancelToken) -> LoadOutcome
where
    A: CameraReadyApi + ?Sized,
{
    if cancel.is_cancelled() {
        return LoadOutcome::Cancelled;
    }
    let result = api.fetch_camera_ready(track, cancel).await;
    if cancel.is_cancelled() {
        return LoadOutcome::Cancelled;
    }
    match result {
        Ok(Some(settings)) => LoadOutcome::Loaded {
            settings,
            source: SettingsSource::Remote,
        },
        Ok(None) => LoadOutcome::Loaded {
            settings: default_settings(),
            source: SettingsSource::Defaults,
        },
        Err(err) if err.is_cancelled() => LoadOutcome::Cancelled,
        Err(err) => LoadOutcome::Failed(err),
    }
}

/// Submit both lists for `track`.
///
/// # Errors
/// Returns the service error unchanged.
pub async fn save_settings<A>(
    api: &A,
    track: &TrackId,
    settings: &CameraReadySettings,
) -> Result<(), ApiError>
where
    A: CameraReadyApi + ?Sized,
{
    api.update_camera_ready(track, settings).await
}

/// Notice to show after a load settles.
#[must_use]
pub const fn load_notice(outcome: &LoadOutcome) -> Option<Notice> {
    match outcome {
        LoadOutcome::Failed(_) => Some(LOAD_FAILED),
        LoadOutcome::Loaded { .. } | LoadOutcome::Cancelled => None,
    }
}

/// Notice to show after a save settles.
///
/// Save failures are silent until product confirms the copy; the page writes
/// them to the browser console instead.
#[must_use]
pub const fn save_notice(result: &Result<(), ApiError>) -> Option<Notice> {
    match result {
        Ok(()) => Some(SAVE_SUCCEEDED),
        Err(_) => None,
    }
}

/// Error to report to the console after a load settles.
#[must_use]
pub const fn load_error(outcome: &LoadOutcome) -> Option<&ApiError> {
    match outcome {
        LoadOutcome::Failed(err) => Some(err),
        LoadOutcome::Loaded { .. } | LoadOutcome::Cancelled => None,
    }
}

/// Rename edit for the text typed into a row; `None` when the text is blank
/// and the row should show its stored label again.
#[must_use]
pub fn rename_edit(index: usize, input: &str) -> Option<EntryEdit> {
    normalize_label(input).map(|label| EntryEdit::Rename(index, label.to_string()))
}

/// Apply an edit to a requirement list. Returns whether the list changed.
///
/// Blank labels and out-of-range indices are ignored.
pub fn apply_edit(entries: &mut Vec<FileRequirement>, edit: &EntryEdit) -> bool {
    match edit {
        EntryEdit::Add(label) => {
            let Some(label) = normalize_label(label) else {
                return false;
            };
            entries.push(FileRequirement::named(label, false));
            true
        }
        EntryEdit::Remove(index) => {
            if *index < entries.len() {
                entries.remove(*index);
                true
            } else {
                false
            }
        }
        EntryEdit::Rename(index, label) => {
            let Some(label) = normalize_label(label) else {
                return false;
            };
            replace_at(entries, *index, |entry| entry.with_label(label))
        }
        EntryEdit::SetRequired(index, required) => {
            replace_at(entries, *index, |entry| entry.with_required(*required))
        }
    }
}

fn replace_at(
    entries: &mut [FileRequirement],
    index: usize,
    update: impl FnOnce(&FileRequirement) -> FileRequirement,
) -> bool {
    let Some(entry) = entries.get_mut(index) else {
        return false;
    };
    let next = update(entry);
    if next == *entry {
        return false;
    }
    *entry = next;
    true
}

fn normalize_label(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

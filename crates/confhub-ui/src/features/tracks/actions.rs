//! Track list actions.
//!
//! # Design
//! - Capture user intent separate from rendering.
//! - Actions are UI-only and never perform side effects.

use confhub_api_models::TrackId;

/// Row-level intents emitted by the track list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrackAction {
    /// Open the editor for a track.
    Edit(TrackId),
    /// Ask for confirmation before removing a track.
    Remove(TrackId),
}

impl TrackAction {
    /// Track the action targets.
    #[must_use]
    pub const fn track_id(&self) -> &TrackId {
        match self {
            Self::Edit(id) | Self::Remove(id) => id,
        }
    }
}

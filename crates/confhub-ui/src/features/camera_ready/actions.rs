//! Camera-ready feature actions.
//!
//! # Design
//! - Actions describe what happened; the reducer in `state` decides what changes.
//! - Load results carry the ticket they answer so superseded fetches can be dropped.

use crate::features::camera_ready::logic::LoadOutcome;
use crate::features::camera_ready::state::{FileList, LoadTicket};

/// Mutation of one requirement list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryEdit {
    /// Append a new requirement with the given label.
    Add(String),
    /// Remove the requirement at an index.
    Remove(usize),
    /// Replace the label of the requirement at an index.
    Rename(usize, String),
    /// Set the required flag of the requirement at an index.
    SetRequired(usize, bool),
}

/// Reducer input for the camera-ready page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CameraReadyAction {
    /// No track resolved; return to idle.
    Reset,
    /// A fetch was issued for the ticket's track.
    BeginLoad(LoadTicket),
    /// A fetch settled.
    LoadSettled {
        /// Ticket the fetch was issued with.
        ticket: LoadTicket,
        /// Result of the fetch.
        outcome: LoadOutcome,
    },
    /// Edit one of the two lists.
    Edit {
        /// Target list.
        list: FileList,
        /// Mutation to apply.
        edit: EntryEdit,
    },
    /// Save submitted.
    SaveStarted,
    /// Save settled, successfully or not.
    SaveSettled,
}

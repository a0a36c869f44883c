//! Camera-ready page state.
//!
//! # Design
//! - `idle → loading → {ready | failed}`, with `ready → saving → ready` layered on top.
//! - Only the load issued last (by ticket) may populate the lists.
//! - Both lists always exist; they are empty until a load completes.

use crate::features::camera_ready::actions::CameraReadyAction;
use crate::features::camera_ready::logic::{LoadOutcome, SettingsSource, apply_edit};
use confhub_api_models::{CameraReadySettings, FileRequirement, TrackId};

/// Load lifecycle of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    /// No track resolved.
    #[default]
    Idle,
    /// Fetch in flight.
    Loading,
    /// Lists populated and editable.
    Ready,
    /// Fetch failed; nothing to edit.
    Failed,
}

/// Which of the two requirement lists an edit targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileList {
    /// Camera-ready files.
    CameraReady,
    /// Copyright files.
    Copyright,
}

/// Identity of one issued fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    /// Monotonic sequence number.
    pub generation: u64,
    /// Track the fetch was issued for.
    pub track: TrackId,
}

/// Issues load tickets in increasing order.
#[derive(Clone, Debug, Default)]
pub struct LoadSequencer {
    issued: u64,
}

impl LoadSequencer {
    /// Issue the next ticket for `track`.
    pub const fn issue(&mut self, track: TrackId) -> LoadTicket {
        self.issued += 1;
        LoadTicket {
            generation: self.issued,
            track,
        }
    }
}

/// Editable state of the camera-ready page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CameraReadyState {
    /// Load lifecycle.
    pub phase: LoadPhase,
    /// Ticket of the most recent fetch.
    pub ticket: Option<LoadTicket>,
    /// Origin of the current lists, once loaded.
    pub source: Option<SettingsSource>,
    /// Save in flight; the save control is disabled.
    pub saving: bool,
    camera_ready_files: Vec<FileRequirement>,
    copyright_files: Vec<FileRequirement>,
}

impl CameraReadyState {
    /// Apply an action. Returns whether the state changed.
    pub fn apply(&mut self, action: CameraReadyAction) -> bool {
        match action {
            CameraReadyAction::Reset => {
                let changed = *self != Self::default();
                *self = Self::default();
                changed
            }
            CameraReadyAction::BeginLoad(ticket) => {
                *self = Self {
                    phase: LoadPhase::Loading,
                    ticket: Some(ticket),
                    ..Self::default()
                };
                true
            }
            CameraReadyAction::LoadSettled { ticket, outcome } => {
                self.settle_load(&ticket, outcome)
            }
            CameraReadyAction::Edit { list, edit } => {
                if self.phase != LoadPhase::Ready {
                    return false;
                }
                apply_edit(self.list_mut(list), &edit)
            }
            CameraReadyAction::SaveStarted => {
                if !self.can_save() {
                    return false;
                }
                self.saving = true;
                true
            }
            CameraReadyAction::SaveSettled => {
                let changed = self.saving;
                self.saving = false;
                changed
            }
        }
    }

    fn settle_load(&mut self, ticket: &LoadTicket, outcome: LoadOutcome) -> bool {
        if self.phase != LoadPhase::Loading || self.ticket.as_ref() != Some(ticket) {
            return false;
        }
        match outcome {
            LoadOutcome::Loaded { settings, source } => {
                self.camera_ready_files = settings.camera_ready_file_settings;
                self.copyright_files = settings.copy_right_file_settings;
                self.source = Some(source);
                self.phase = LoadPhase::Ready;
                true
            }
            LoadOutcome::Failed(_) => {
                self.phase = LoadPhase::Failed;
                true
            }
            LoadOutcome::Cancelled => false,
        }
    }

    /// Track the page is bound to.
    #[must_use]
    pub fn track(&self) -> Option<&TrackId> {
        self.ticket.as_ref().map(|ticket| &ticket.track)
    }

    /// Entries of one list.
    #[must_use]
    pub fn list(&self, list: FileList) -> &[FileRequirement] {
        match list {
            FileList::CameraReady => &self.camera_ready_files,
            FileList::Copyright => &self.copyright_files,
        }
    }

    fn list_mut(&mut self, list: FileList) -> &mut Vec<FileRequirement> {
        match list {
            FileList::CameraReady => &mut self.camera_ready_files,
            FileList::Copyright => &mut self.copyright_files,
        }
    }

    /// Whether the loading placeholder should be shown.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// Whether a save may be submitted now.
    #[must_use]
    pub fn can_save(&self) -> bool {
        self.phase == LoadPhase::Ready && !self.saving
    }

    /// Snapshot of both lists bundled for submission, keyed by track.
    #[must_use]
    pub fn save_request(&self) -> Option<(TrackId, CameraReadySettings)> {
        if !self.can_save() {
            return None;
        }
        let track = self.track()?.clone();
        Some((
            track,
            CameraReadySettings {
                camera_ready_file_settings: self.camera_ready_files.clone(),
                copy_right_file_settings: self.copyright_files.clone(),
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ApiError;
    use crate::features::camera_ready::actions::EntryEdit;
    use crate::features::camera_ready::defaults::default_settings;

    fn record(label: &str) -> CameraReadySettings {
        CameraReadySettings {
            camera_ready_file_settings: vec![FileRequirement::named(label, true)],
            copy_right_file_settings: vec![FileRequirement::named("Copyright", true)],
        }
    }

    fn loaded(settings: CameraReadySettings) -> LoadOutcome {
        LoadOutcome::Loaded {
            settings,
            source: SettingsSource::Remote,
        }
    }

    fn ready_state(track: &str) -> CameraReadyState {
        let mut sequencer = LoadSequencer::default();
        let mut state = CameraReadyState::default();
        let ticket = sequencer.issue(TrackId::new(track));
        state.apply(CameraReadyAction::BeginLoad(ticket.clone()));
        state.apply(CameraReadyAction::LoadSettled {
            ticket,
            outcome: loaded(record("Paper")),
        });
        state
    }

    #[test]
    fn starts_idle_with_empty_lists() {
        let state = CameraReadyState::default();
        assert_eq!(state.phase, LoadPhase::Idle);
        assert!(state.list(FileList::CameraReady).is_empty());
        assert!(state.list(FileList::Copyright).is_empty());
        assert_eq!(state.save_request(), None);
    }

    #[test]
    fn loaded_record_populates_lists_exactly() {
        let state = ready_state("t-1");
        assert_eq!(state.phase, LoadPhase::Ready);
        assert_eq!(state.source, Some(SettingsSource::Remote));
        let (track, payload) = state.save_request().expect("ready state can save");
        assert_eq!(track, TrackId::new("t-1"));
        assert_eq!(payload, record("Paper"));
    }

    #[test]
    fn defaults_outcome_populates_default_lists() {
        let mut sequencer = LoadSequencer::default();
        let mut state = CameraReadyState::default();
        let ticket = sequencer.issue(TrackId::new("t-1"));
        state.apply(CameraReadyAction::BeginLoad(ticket.clone()));
        state.apply(CameraReadyAction::LoadSettled {
            ticket,
            outcome: LoadOutcome::Loaded {
                settings: default_settings(),
                source: SettingsSource::Defaults,
            },
        });
        assert_eq!(state.source, Some(SettingsSource::Defaults));
        assert_eq!(
            state.list(FileList::CameraReady),
            default_settings().camera_ready_file_settings.as_slice()
        );
        assert_eq!(
            state.list(FileList::Copyright),
            default_settings().copy_right_file_settings.as_slice()
        );
    }

    #[test]
    fn superseded_load_never_applies() {
        let mut sequencer = LoadSequencer::default();
        let mut state = CameraReadyState::default();
        let first = sequencer.issue(TrackId::new("t-1"));
        let second = sequencer.issue(TrackId::new("t-2"));
        state.apply(CameraReadyAction::BeginLoad(first.clone()));
        state.apply(CameraReadyAction::BeginLoad(second.clone()));

        assert!(!state.apply(CameraReadyAction::LoadSettled {
            ticket: first.clone(),
            outcome: loaded(record("Stale")),
        }));
        assert!(state.is_loading());
        assert!(state.list(FileList::CameraReady).is_empty());

        assert!(state.apply(CameraReadyAction::LoadSettled {
            ticket: second,
            outcome: loaded(record("Fresh")),
        }));
        assert_eq!(state.list(FileList::CameraReady)[0].label(), Some("Fresh"));

        assert!(!state.apply(CameraReadyAction::LoadSettled {
            ticket: first,
            outcome: loaded(record("Late")),
        }));
        assert_eq!(state.list(FileList::CameraReady)[0].label(), Some("Fresh"));
    }

    #[test]
    fn same_track_reload_uses_new_generation() {
        let mut sequencer = LoadSequencer::default();
        let first = sequencer.issue(TrackId::new("t-1"));
        let second = sequencer.issue(TrackId::new("t-1"));
        assert_ne!(first, second);
        assert!(second.generation > first.generation);
    }

    #[test]
    fn failure_clears_loading_and_keeps_lists_unset() {
        let mut sequencer = LoadSequencer::default();
        let mut state = CameraReadyState::default();
        let ticket = sequencer.issue(TrackId::new("t-1"));
        state.apply(CameraReadyAction::BeginLoad(ticket.clone()));
        assert!(state.apply(CameraReadyAction::LoadSettled {
            ticket,
            outcome: LoadOutcome::Failed(ApiError::Network("offline".to_string())),
        }));
        assert_eq!(state.phase, LoadPhase::Failed);
        assert!(!state.is_loading());
        assert!(state.list(FileList::CameraReady).is_empty());
        assert_eq!(state.save_request(), None);
    }

    #[test]
    fn cancelled_outcome_does_not_mutate() {
        let mut sequencer = LoadSequencer::default();
        let mut state = CameraReadyState::default();
        let ticket = sequencer.issue(TrackId::new("t-1"));
        state.apply(CameraReadyAction::BeginLoad(ticket.clone()));
        let before = state.clone();
        assert!(!state.apply(CameraReadyAction::LoadSettled {
            ticket,
            outcome: LoadOutcome::Cancelled,
        }));
        assert_eq!(state, before);
    }

    #[test]
    fn changing_track_discards_previous_lists() {
        let mut state = ready_state("t-1");
        let mut sequencer = LoadSequencer::default();
        sequencer.issue(TrackId::new("t-1"));
        state.apply(CameraReadyAction::BeginLoad(
            sequencer.issue(TrackId::new("t-2")),
        ));
        assert!(state.is_loading());
        assert_eq!(state.track(), Some(&TrackId::new("t-2")));
        assert!(state.list(FileList::CameraReady).is_empty());
        assert_eq!(state.source, None);
    }

    #[test]
    fn save_disables_until_settled() {
        let mut state = ready_state("t-1");
        assert!(state.apply(CameraReadyAction::SaveStarted));
        assert!(state.saving);
        assert_eq!(state.save_request(), None);
        assert!(!state.apply(CameraReadyAction::SaveStarted));
        assert!(state.apply(CameraReadyAction::SaveSettled));
        assert!(!state.saving);
        assert!(state.can_save());
    }

    #[test]
    fn save_is_refused_outside_ready() {
        let mut state = CameraReadyState::default();
        assert!(!state.apply(CameraReadyAction::SaveStarted));
        assert!(!state.apply(CameraReadyAction::SaveSettled));
    }

    #[test]
    fn edits_apply_only_when_ready() {
        let mut state = CameraReadyState::default();
        assert!(!state.apply(CameraReadyAction::Edit {
            list: FileList::Copyright,
            edit: EntryEdit::Add("Licence".to_string()),
        }));

        let mut state = ready_state("t-1");
        assert!(state.apply(CameraReadyAction::Edit {
            list: FileList::Copyright,
            edit: EntryEdit::Add("Licence".to_string()),
        }));
        assert_eq!(state.list(FileList::Copyright).len(), 2);
        assert_eq!(state.list(FileList::CameraReady).len(), 1);
        let (_, payload) = state.save_request().expect("payload");
        assert_eq!(payload.copy_right_file_settings[1].label(), Some("Licence"));
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut state = ready_state("t-1");
        assert!(state.apply(CameraReadyAction::Reset));
        assert_eq!(state, CameraReadyState::default());
        assert!(!state.apply(CameraReadyAction::Reset));
    }
}

//! Conference context resolved by the app shell.
//!
//! # Design
//! - Views never read role or track selection from globals; the shell resolves
//!   them here and passes plain values down as properties.
//! - A track chair configures the track they chair; every other role configures
//!   the track currently selected for chair review.

use crate::features::tracks::logic::{remove_track, rename_track};
use confhub_api_models::{ConferenceRole, ConferenceSession, TrackId, TrackSummary};

/// Loading state of the conference session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// No conference requested yet.
    #[default]
    Idle,
    /// Session request in flight.
    Loading,
    /// Session available.
    Ready,
    /// Session request failed.
    Failed,
}

/// Role, track and selection state for the active conference.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConferenceContext {
    /// Conference whose session is loaded or loading.
    pub conference_id: Option<String>,
    /// Session request status.
    pub status: SessionStatus,
    /// Session payload once loaded.
    pub session: Option<ConferenceSession>,
    /// Track picked by a chair for per-track configuration.
    pub track_for_chair: Option<TrackId>,
}

impl ConferenceContext {
    /// Mark a session request as started. Switching conferences drops prior state.
    pub fn begin_session(&mut self, conference_id: &str) {
        if self.conference_id.as_deref() != Some(conference_id) {
            self.session = None;
            self.track_for_chair = None;
            self.conference_id = Some(conference_id.to_string());
        }
        self.status = SessionStatus::Loading;
    }

    /// Store a loaded session. Responses for another conference are ignored.
    pub fn apply_session(&mut self, conference_id: &str, session: ConferenceSession) -> bool {
        if self.conference_id.as_deref() != Some(conference_id) {
            return false;
        }
        let keep_selection = self
            .track_for_chair
            .as_ref()
            .is_some_and(|id| session.tracks.iter().any(|track| &track.id == id));
        if !keep_selection {
            self.track_for_chair = session.tracks.first().map(|track| track.id.clone());
        }
        self.session = Some(session);
        self.status = SessionStatus::Ready;
        true
    }

    /// Record a failed session request for the given conference.
    pub fn fail_session(&mut self, conference_id: &str) {
        if self.conference_id.as_deref() == Some(conference_id) {
            self.status = SessionStatus::Failed;
        }
    }

    /// Role in the active conference, once known.
    #[must_use]
    pub fn role(&self) -> Option<ConferenceRole> {
        self.session.as_ref().map(|session| session.role)
    }

    /// Tracks of the active conference.
    #[must_use]
    pub fn tracks(&self) -> &[TrackSummary] {
        self.session
            .as_ref()
            .map(|session| session.tracks.as_slice())
            .unwrap_or_default()
    }

    /// Track whose camera-ready settings the user edits.
    #[must_use]
    pub fn settings_track(&self) -> Option<TrackId> {
        let session = self.session.as_ref()?;
        match session.role {
            ConferenceRole::TrackChair => session.track_id.clone(),
            _ => self.track_for_chair.clone(),
        }
    }

    /// Whether the user may switch the configured track.
    #[must_use]
    pub fn can_pick_track(&self) -> bool {
        self.role() == Some(ConferenceRole::Chair)
    }

    /// Select the track to configure. Unknown ids are rejected.
    pub fn select_track(&mut self, id: &TrackId) -> bool {
        if self.tracks().iter().any(|track| &track.id == id) {
            self.track_for_chair = Some(id.clone());
            true
        } else {
            false
        }
    }

    /// Apply a confirmed rename to the cached track list.
    pub fn rename_track(&mut self, id: &TrackId, name: &str) {
        if let Some(session) = self.session.as_mut() {
            session.tracks = rename_track(&session.tracks, id, name);
        }
    }

    /// Apply a confirmed removal, moving the chair selection off the removed track.
    pub fn remove_track(&mut self, id: &TrackId) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.tracks = remove_track(&session.tracks, id);
        if session.track_id.as_ref() == Some(id) {
            session.track_id = None;
        }
        if self.track_for_chair.as_ref() == Some(id) {
            self.track_for_chair = session.tracks.first().map(|track| track.id.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str, name: &str) -> TrackSummary {
        TrackSummary {
            id: TrackId::new(id),
            name: name.to_string(),
        }
    }

    fn session(role: ConferenceRole, chaired: Option<&str>) -> ConferenceSession {
        ConferenceSession {
            role,
            track_id: chaired.map(TrackId::new),
            tracks: vec![track("t-1", "Systems"), track("t-2", "Theory")],
        }
    }

    fn loaded(role: ConferenceRole, chaired: Option<&str>) -> ConferenceContext {
        let mut ctx = ConferenceContext::default();
        ctx.begin_session("conf-1");
        assert!(ctx.apply_session("conf-1", session(role, chaired)));
        ctx
    }

    #[test]
    fn track_chair_configures_chaired_track() {
        let mut ctx = loaded(ConferenceRole::TrackChair, Some("t-2"));
        assert!(ctx.select_track(&TrackId::new("t-1")));
        assert_eq!(ctx.settings_track(), Some(TrackId::new("t-2")));
        assert!(!ctx.can_pick_track());
    }

    #[test]
    fn chair_configures_selected_track() {
        let mut ctx = loaded(ConferenceRole::Chair, None);
        assert_eq!(ctx.settings_track(), Some(TrackId::new("t-1")));
        assert!(ctx.select_track(&TrackId::new("t-2")));
        assert_eq!(ctx.settings_track(), Some(TrackId::new("t-2")));
        assert!(!ctx.select_track(&TrackId::new("missing")));
        assert_eq!(ctx.settings_track(), Some(TrackId::new("t-2")));
        assert!(ctx.can_pick_track());
    }

    #[test]
    fn no_session_resolves_no_track() {
        let mut ctx = ConferenceContext::default();
        assert_eq!(ctx.settings_track(), None);
        ctx.begin_session("conf-1");
        assert_eq!(ctx.status, SessionStatus::Loading);
        assert_eq!(ctx.settings_track(), None);
    }

    #[test]
    fn stale_session_for_other_conference_is_ignored() {
        let mut ctx = ConferenceContext::default();
        ctx.begin_session("conf-1");
        ctx.begin_session("conf-2");
        assert!(!ctx.apply_session("conf-1", session(ConferenceRole::Chair, None)));
        assert!(ctx.session.is_none());
        ctx.fail_session("conf-1");
        assert_eq!(ctx.status, SessionStatus::Loading);
    }

    #[test]
    fn removing_selected_track_moves_selection() {
        let mut ctx = loaded(ConferenceRole::Chair, None);
        assert!(ctx.select_track(&TrackId::new("t-2")));
        ctx.remove_track(&TrackId::new("t-2"));
        assert_eq!(ctx.tracks().len(), 1);
        assert_eq!(ctx.settings_track(), Some(TrackId::new("t-1")));
    }

    #[test]
    fn rename_updates_cached_tracks() {
        let mut ctx = loaded(ConferenceRole::Chair, None);
        ctx.rename_track(&TrackId::new("t-1"), "Distributed Systems");
        assert_eq!(ctx.tracks()[0].name, "Distributed Systems");
        assert_eq!(ctx.tracks()[1].name, "Theory");
    }
}

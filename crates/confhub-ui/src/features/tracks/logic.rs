//! Pure helpers for the track list and its parent page.

use crate::core::notify::Notice;
use crate::features::tracks::actions::TrackAction;
use confhub_api_models::{TrackId, TrackSummary};

/// Shown after a rename is stored.
pub const RENAME_SUCCEEDED: Notice = Notice::success("tracks.rename_success", "Track updated.");
/// Shown after a track is deleted.
pub const REMOVE_SUCCEEDED: Notice = Notice::success("tracks.remove_success", "Track removed.");
/// Shown when a rename or delete request fails.
pub const ACTION_FAILED: Notice = Notice::error(
    "tracks.action_failed",
    "Something went wrong, please try again later.",
);

/// Visual emphasis of a track row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowTone {
    /// Default card styling.
    Plain,
    /// Primary background with light foreground, used for the active row.
    Inverted,
}

impl RowTone {
    /// CSS modifier class for the row.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Plain => "track-row-plain",
            Self::Inverted => "track-row-active",
        }
    }
}

/// Render model for one row of the track list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackRow {
    /// Track identifier.
    pub id: TrackId,
    /// Display label.
    pub label: String,
    /// Whether the row is the externally tracked active item.
    pub active: bool,
}

impl TrackRow {
    /// Edit intent for this row's own track.
    #[must_use]
    pub fn edit_action(&self) -> TrackAction {
        TrackAction::Edit(self.id.clone())
    }

    /// Remove intent for this row's own track.
    #[must_use]
    pub fn remove_action(&self) -> TrackAction {
        TrackAction::Remove(self.id.clone())
    }

    /// Emphasis for the row.
    #[must_use]
    pub const fn tone(&self) -> RowTone {
        if self.active {
            RowTone::Inverted
        } else {
            RowTone::Plain
        }
    }
}

/// Project tracks into rows, preserving order and flagging the active one.
#[must_use]
pub fn track_rows(tracks: &[TrackSummary], active: Option<&TrackId>) -> Vec<TrackRow> {
    tracks
        .iter()
        .map(|track| TrackRow {
            id: track.id.clone(),
            label: track.name.clone(),
            active: active == Some(&track.id),
        })
        .collect()
}

/// Trim a proposed track name; blank names are rejected.
#[must_use]
pub fn normalize_track_name(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Current name of a track, used to seed the rename form.
#[must_use]
pub fn track_name(tracks: &[TrackSummary], id: &TrackId) -> Option<String> {
    tracks
        .iter()
        .find(|track| &track.id == id)
        .map(|track| track.name.clone())
}

/// Copy of `tracks` with one track renamed.
#[must_use]
pub fn rename_track(tracks: &[TrackSummary], id: &TrackId, name: &str) -> Vec<TrackSummary> {
    tracks
        .iter()
        .map(|track| {
            if &track.id == id {
                TrackSummary {
                    id: track.id.clone(),
                    name: name.to_string(),
                }
            } else {
                track.clone()
            }
        })
        .collect()
}

/// Copy of `tracks` without the given track.
#[must_use]
pub fn remove_track(tracks: &[TrackSummary], id: &TrackId) -> Vec<TrackSummary> {
    tracks
        .iter()
        .filter(|track| &track.id != id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracks() -> Vec<TrackSummary> {
        ["Systems", "Theory", "Security"]
            .iter()
            .enumerate()
            .map(|(idx, name)| TrackSummary {
                id: TrackId::new(format!("t-{idx}")),
                name: (*name).to_string(),
            })
            .collect()
    }

    #[test]
    fn one_row_per_track_in_order() {
        let rows = track_rows(&tracks(), None);
        assert_eq!(rows.len(), 3);
        let labels: Vec<&str> = rows.iter().map(|row| row.label.as_str()).collect();
        assert_eq!(labels, vec!["Systems", "Theory", "Security"]);
        assert!(rows.iter().all(|row| row.tone() == RowTone::Plain));
    }

    #[test]
    fn row_actions_target_their_own_track() {
        let rows = track_rows(&tracks(), None);
        for row in &rows {
            assert_eq!(row.edit_action(), TrackAction::Edit(row.id.clone()));
            assert_eq!(row.remove_action(), TrackAction::Remove(row.id.clone()));
        }
        assert_eq!(rows[1].remove_action().track_id(), &TrackId::new("t-1"));
    }

    #[test]
    fn only_active_row_is_inverted() {
        let active = TrackId::new("t-2");
        let rows = track_rows(&tracks(), Some(&active));
        let tones: Vec<RowTone> = rows.iter().map(TrackRow::tone).collect();
        assert_eq!(tones, vec![RowTone::Plain, RowTone::Plain, RowTone::Inverted]);
        assert_eq!(RowTone::Inverted.class(), "track-row-active");
    }

    #[test]
    fn empty_list_renders_no_rows() {
        assert!(track_rows(&[], Some(&TrackId::new("t-0"))).is_empty());
    }

    #[test]
    fn names_are_trimmed_and_blank_rejected() {
        assert_eq!(normalize_track_name("  AI  "), Some("AI".to_string()));
        assert_eq!(normalize_track_name("   "), None);
    }

    #[test]
    fn rename_and_remove_touch_only_target() {
        let list = tracks();
        let renamed = rename_track(&list, &TrackId::new("t-1"), "Formal Methods");
        assert_eq!(renamed[1].name, "Formal Methods");
        assert_eq!(renamed[0], list[0]);
        let removed = remove_track(&list, &TrackId::new("t-0"));
        assert_eq!(removed.len(), 2);
        assert_eq!(removed[0].id, TrackId::new("t-1"));
    }

    #[test]
    fn rename_form_is_seeded_from_current_name() {
        let list = tracks();
        assert_eq!(
            track_name(&list, &TrackId::new("t-2")).as_deref(),
            Some("Security")
        );
        assert_eq!(track_name(&list, &TrackId::new("missing")), None);
    }
}

#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Confhub conference API.
//!
//! The web UI decodes every response through these types so the wire contract
//! (camelCase field names, `result` envelopes, role spellings) lives in one place.
//! File requirement entries are deliberately opaque: the UI displays a couple of
//! well-known keys and hands everything else back to the server untouched.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// RFC9457-compatible problem document surfaced on validation/runtime errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemDetails {
    #[serde(rename = "type", default)]
    /// URI reference identifying the problem type.
    pub kind: String,
    /// Short, human-readable summary of the issue.
    #[serde(default)]
    pub title: String,
    /// HTTP status code associated with the error.
    #[serde(default)]
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    /// Detailed diagnostic message when available.
    pub detail: Option<String>,
}

/// Opaque identifier of a conference track.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(String);

impl TrackId {
    /// Wrap a raw identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Role the signed-in user holds within a conference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConferenceRole {
    /// Conference-wide chair.
    Chair,
    /// Chair of a single track.
    TrackChair,
    /// Program committee reviewer.
    Reviewer,
    /// Paper author.
    Author,
}

const LABEL_KEYS: [&str; 3] = ["name", "fileName", "title"];
const REQUIRED_KEY: &str = "isRequired";

/// A single camera-ready or copyright file rule.
///
/// The shape is owned by the server. The UI reads `name` (or `fileName` /
/// `title`) for display and `isRequired` for the toggle; all other keys
/// round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileRequirement(Value);

impl FileRequirement {
    /// Wrap a raw JSON entry.
    #[must_use]
    pub const fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// Create a fresh entry with a label and required flag.
    #[must_use]
    pub fn named(label: &str, required: bool) -> Self {
        let mut map = Map::new();
        map.insert(LABEL_KEYS[0].to_string(), Value::String(label.to_string()));
        map.insert(REQUIRED_KEY.to_string(), Value::Bool(required));
        Self(Value::Object(map))
    }

    /// Borrow the underlying JSON value.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Display label, if the entry carries one.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        LABEL_KEYS
            .iter()
            .find_map(|key| self.0.get(*key).and_then(Value::as_str))
    }

    /// Whether the entry is marked as required. Missing flags read as `false`.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.0
            .get(REQUIRED_KEY)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Return a copy with the label replaced, keeping whichever label key the
    /// entry already uses.
    #[must_use]
    pub fn with_label(&self, label: &str) -> Self {
        let mut next = self.0.clone();
        if let Value::Object(map) = &mut next {
            let key = LABEL_KEYS
                .iter()
                .find(|key| map.contains_key(**key))
                .copied()
                .unwrap_or(LABEL_KEYS[0]);
            map.insert(key.to_string(), Value::String(label.to_string()));
        }
        Self(next)
    }

    /// Return a copy with the required flag replaced.
    #[must_use]
    pub fn with_required(&self, required: bool) -> Self {
        let mut next = self.0.clone();
        if let Value::Object(map) = &mut next {
            map.insert(REQUIRED_KEY.to_string(), Value::Bool(required));
        }
        Self(next)
    }
}

/// Camera-ready configuration for one track.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraReadySettings {
    /// Files required for the camera-ready submission.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub camera_ready_file_settings: Vec<FileRequirement>,
    /// Copyright documents required alongside the submission.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub copy_right_file_settings: Vec<FileRequirement>,
}

/// Lists are never absent: a `null` list decodes as empty.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Envelope returned by `GET /api/tracks/{id}/camera-ready-settings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraReadySettingsResponse {
    /// Stored settings record.
    pub result: CameraReadySettings,
}

/// Track entry shown in track management and pickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSummary {
    /// Track identifier.
    pub id: TrackId,
    /// Display name.
    #[serde(alias = "text")]
    pub name: String,
}

/// Body for `PUT /api/tracks/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackUpdateRequest {
    /// New display name.
    pub name: String,
}

/// Per-conference context for the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConferenceSession {
    /// Role held in this conference.
    pub role: ConferenceRole,
    /// Track chaired by the user, for track chairs.
    #[serde(default)]
    pub track_id: Option<TrackId>,
    /// Tracks of the conference in display order.
    #[serde(default)]
    pub tracks: Vec<TrackSummary>,
}

/// Envelope returned by `GET /api/conferences/{id}/session`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConferenceSessionResponse {
    /// Session payload.
    pub result: ConferenceSession,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn camera_ready_settings_use_camel_case_wire_names() {
        let settings = CameraReadySettings {
            camera_ready_file_settings: vec![FileRequirement::named("Final paper", true)],
            copy_right_file_settings: Vec::new(),
        };
        let value = serde_json::to_value(&settings).expect("serialize settings");
        assert_eq!(
            value,
            json!({
                "cameraReadyFileSettings": [{ "name": "Final paper", "isRequired": true }],
                "copyRightFileSettings": []
            })
        );
    }

    #[test]
    fn missing_lists_deserialize_as_empty() {
        let response: CameraReadySettingsResponse =
            serde_json::from_value(json!({ "result": { "cameraReadyFileSettings": [] } }))
                .expect("decode response");
        assert!(response.result.camera_ready_file_settings.is_empty());
        assert!(response.result.copy_right_file_settings.is_empty());
    }

    #[test]
    fn null_lists_deserialize_as_empty() {
        let response: CameraReadySettingsResponse = serde_json::from_value(json!({
            "result": {
                "cameraReadyFileSettings": [{ "name": "Paper" }],
                "copyRightFileSettings": null
            }
        }))
        .expect("decode response");
        assert_eq!(response.result.camera_ready_file_settings.len(), 1);
        assert!(response.result.copy_right_file_settings.is_empty());
    }

    #[test]
    fn opaque_entries_round_trip_unknown_keys() {
        let raw = json!({
            "fileName": "Source archive",
            "maxSizeMb": 25,
            "extensions": ["zip", "tar.gz"],
            "isRequired": false
        });
        let entry: FileRequirement = serde_json::from_value(raw.clone()).expect("decode entry");
        assert_eq!(entry.label(), Some("Source archive"));
        assert!(!entry.is_required());
        assert_eq!(serde_json::to_value(&entry).expect("encode entry"), raw);
    }

    #[test]
    fn label_edits_keep_existing_label_key_and_other_fields() {
        let entry = FileRequirement::from_value(json!({ "title": "Copyright form", "pages": 2 }));
        let renamed = entry.with_label("Signed copyright form").with_required(true);
        assert_eq!(
            renamed.as_value(),
            &json!({ "title": "Signed copyright form", "pages": 2, "isRequired": true })
        );
    }

    #[test]
    fn non_object_entries_are_left_alone_by_builders() {
        let entry = FileRequirement::from_value(json!("legacy"));
        assert_eq!(entry.with_label("x").as_value(), &json!("legacy"));
        assert_eq!(entry.label(), None);
    }

    #[test]
    fn session_decodes_role_and_tracks() {
        let response: ConferenceSessionResponse = serde_json::from_value(json!({
            "result": {
                "role": "TRACK_CHAIR",
                "trackId": "t-2",
                "tracks": [{ "id": "t-1", "text": "Systems" }, { "id": "t-2", "name": "Theory" }]
            }
        }))
        .expect("decode session");
        let session = response.result;
        assert_eq!(session.role, ConferenceRole::TrackChair);
        assert_eq!(session.track_id, Some(TrackId::new("t-2")));
        assert_eq!(session.tracks[0].name, "Systems");
        assert_eq!(session.tracks[1].id.as_str(), "t-2");
    }

    #[test]
    fn problem_details_tolerate_sparse_bodies() {
        let problem: ProblemDetails =
            serde_json::from_value(json!({ "detail": "track not found" })).expect("decode");
        assert_eq!(problem.detail.as_deref(), Some("track not found"));
        assert_eq!(problem.status, 0);
    }
}

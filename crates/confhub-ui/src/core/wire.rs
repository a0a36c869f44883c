//! Request paths and response body decoding for the conference API.
//!
//! # Design
//! - Keep URL building and body parsing DOM-free so it is testable natively.
//! - The HTTP transport in `services::api` only moves bytes.

use crate::core::error::ApiError;
use confhub_api_models::{CameraReadySettings, ProblemDetails, TrackId};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Join a base URL and an absolute API path without doubling slashes.
#[must_use]
pub fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// `/api/tracks/{id}`.
#[must_use]
pub fn track_path(track: &TrackId) -> String {
    format!("/api/tracks/{}", urlencoding::encode(track.as_str()))
}

/// `/api/tracks/{id}/camera-ready-settings`.
#[must_use]
pub fn camera_ready_path(track: &TrackId) -> String {
    format!("{}/camera-ready-settings", track_path(track))
}

/// `/api/conferences/{id}/session`.
#[must_use]
pub fn session_path(conference_id: &str) -> String {
    format!(
        "/api/conferences/{}/session",
        urlencoding::encode(conference_id)
    )
}

/// `Authorization` header value for a configured access token.
#[must_use]
pub fn bearer(token: &str) -> Option<String> {
    let token = token.trim();
    (!token.is_empty()).then(|| format!("Bearer {token}"))
}

/// Whether a status code means "no stored record".
#[must_use]
pub const fn is_absent_status(status: u16) -> bool {
    matches!(status, 204 | 404)
}

const SETTINGS_KEYS: [&str; 2] = ["cameraReadyFileSettings", "copyRightFileSettings"];

/// Decode a camera-ready settings body.
///
/// An empty body, `null`, or `{"result": null}` means the track has no stored
/// record. Bodies without the `result` envelope are accepted as bare settings
/// only when they carry at least one of the two list keys.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the body is not a settings document.
pub fn decode_settings_body(body: &str) -> Result<Option<CameraReadySettings>, ApiError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    let value: Value = decode_json(body)?;
    let record = match value {
        Value::Null => return Ok(None),
        Value::Object(mut map) if map.contains_key("result") => {
            map.remove("result").unwrap_or(Value::Null)
        }
        Value::Object(map) if !SETTINGS_KEYS.iter().any(|key| map.contains_key(*key)) => {
            return Err(ApiError::Decode(
                "response is neither a settings envelope nor a settings record".to_string(),
            ));
        }
        other => other,
    };
    if record.is_null() {
        return Ok(None);
    }
    serde_json::from_value(record)
        .map(Some)
        .map_err(|err| ApiError::Decode(err.to_string()))
}

/// Decode any JSON body.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the body does not match `T`.
pub fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|err| ApiError::Decode(err.to_string()))
}

/// Map a non-success response to an error, reading a problem document if present.
#[must_use]
pub fn status_error(status: u16, body: &str) -> ApiError {
    ApiError::from_status(status, serde_json::from_str::<ProblemDetails>(body).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use confhub_api_models::FileRequirement;

    #[test]
    fn paths_encode_identifiers() {
        let track = TrackId::new("t 1/2");
        assert_eq!(track_path(&track), "/api/tracks/t%201%2F2");
        assert_eq!(
            camera_ready_path(&TrackId::new("t-1")),
            "/api/tracks/t-1/camera-ready-settings"
        );
        assert_eq!(session_path("c-9"), "/api/conferences/c-9/session");
        assert_eq!(
            join_url("http://localhost:7070/", "/api/tracks/t-1"),
            "http://localhost:7070/api/tracks/t-1"
        );
    }

    #[test]
    fn bearer_skips_blank_tokens() {
        assert_eq!(bearer("  "), None);
        assert_eq!(bearer(" abc ").as_deref(), Some("Bearer abc"));
    }

    #[test]
    fn absent_bodies_decode_to_none() {
        assert_eq!(decode_settings_body(""), Ok(None));
        assert_eq!(decode_settings_body("null"), Ok(None));
        assert_eq!(decode_settings_body(r#"{"result":null}"#), Ok(None));
        assert!(is_absent_status(204));
        assert!(is_absent_status(404));
        assert!(!is_absent_status(500));
    }

    #[test]
    fn enveloped_and_bare_records_decode() {
        let body = r#"{"result":{"cameraReadyFileSettings":[{"name":"Paper","isRequired":true}],"copyRightFileSettings":[]}}"#;
        let settings = decode_settings_body(body)
            .expect("decode")
            .expect("record present");
        assert_eq!(
            settings.camera_ready_file_settings,
            vec![FileRequirement::named("Paper", true)]
        );

        let bare = r#"{"cameraReadyFileSettings":[],"copyRightFileSettings":[{"name":"Form"}]}"#;
        let settings = decode_settings_body(bare).expect("decode").expect("record");
        assert_eq!(settings.copy_right_file_settings[0].label(), Some("Form"));
    }

    #[test]
    fn null_lists_in_a_record_decode_as_empty() {
        let body = r#"{"result":{"cameraReadyFileSettings":[{"name":"Paper"}],"copyRightFileSettings":null}}"#;
        let settings = decode_settings_body(body).expect("decode").expect("record");
        assert_eq!(settings.camera_ready_file_settings.len(), 1);
        assert!(settings.copy_right_file_settings.is_empty());
    }

    #[test]
    fn objects_without_settings_keys_are_rejected() {
        assert!(matches!(decode_settings_body("{}"), Err(ApiError::Decode(_))));
        assert!(matches!(
            decode_settings_body(r#"{"message":"ok"}"#),
            Err(ApiError::Decode(_))
        ));
        let partial = decode_settings_body(r#"{"copyRightFileSettings":[]}"#).expect("decode");
        assert_eq!(partial, Some(CameraReadySettings::default()));
    }

    #[test]
    fn malformed_bodies_are_decode_errors() {
        assert!(matches!(
            decode_settings_body("{not json"),
            Err(ApiError::Decode(_))
        ));
        assert!(matches!(
            decode_settings_body(r#"{"result":{"cameraReadyFileSettings":7}}"#),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn status_errors_carry_problem_detail() {
        let err = status_error(422, r#"{"title":"Invalid","status":422,"detail":"name missing"}"#);
        assert_eq!(
            err,
            ApiError::Status {
                status: 422,
                detail: Some("name missing".to_string())
            }
        );
        assert_eq!(
            status_error(500, "<html>"),
            ApiError::Status {
                status: 500,
                detail: None
            }
        );
    }
}

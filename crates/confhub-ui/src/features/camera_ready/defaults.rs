//! Built-in requirements used when a track has no saved settings.

use confhub_api_models::{CameraReadySettings, FileRequirement};
use serde_json::json;

/// Default camera-ready file rules.
#[must_use]
pub fn default_camera_ready_files() -> Vec<FileRequirement> {
    vec![
        FileRequirement::from_value(json!({
            "name": "Camera-ready paper",
            "fileFormats": ["pdf"],
            "maxSizeMb": 10,
            "isRequired": true
        })),
        FileRequirement::from_value(json!({
            "name": "Source files",
            "fileFormats": ["zip", "tex", "docx"],
            "maxSizeMb": 50,
            "isRequired": false
        })),
    ]
}

/// Default copyright file rules.
#[must_use]
pub fn default_copyright_files() -> Vec<FileRequirement> {
    vec![FileRequirement::from_value(json!({
        "name": "Signed copyright transfer form",
        "fileFormats": ["pdf"],
        "maxSizeMb": 5,
        "isRequired": true
    }))]
}

/// Both default lists as a settings record.
#[must_use]
pub fn default_settings() -> CameraReadySettings {
    CameraReadySettings {
        camera_ready_file_settings: default_camera_ready_files(),
        copy_right_file_settings: default_copyright_files(),
    }
}

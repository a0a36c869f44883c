//! Routing definitions for the Confhub UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/conferences/:conference_id/camera-ready")]
    CameraReady { conference_id: String },
    #[at("/conferences/:conference_id/tracks")]
    Tracks { conference_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Conference the route belongs to, if any.
    pub(crate) fn conference_id(&self) -> Option<&str> {
        match self {
            Self::CameraReady { conference_id } | Self::Tracks { conference_id } => {
                Some(conference_id.as_str())
            }
            Self::NotFound => None,
        }
    }
}

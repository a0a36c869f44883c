//! Error types shared by the API client and feature controllers.

use confhub_api_models::ProblemDetails;
use thiserror::Error;

/// Failure talking to the conference API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS, ...).
    #[error("request failed: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("server responded with status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Problem detail reported by the server, when present.
        detail: Option<String>,
    },
    /// The response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// The request was aborted by its owner.
    #[error("request cancelled")]
    Cancelled,
}

impl ApiError {
    /// Build a status error from an optional problem document.
    #[must_use]
    pub fn from_status(status: u16, problem: Option<ProblemDetails>) -> Self {
        Self::Status {
            status,
            detail: problem.and_then(|problem| problem.detail),
        }
    }

    /// Whether the failure is a cancellation rather than a real error.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use confhub_api_models::ProblemDetails;

    #[test]
    fn status_errors_keep_problem_detail() {
        let problem = ProblemDetails {
            kind: "about:blank".to_string(),
            title: "Not allowed".to_string(),
            status: 403,
            detail: Some("track chairs only".to_string()),
        };
        let err = ApiError::from_status(403, Some(problem));
        assert_eq!(
            err,
            ApiError::Status {
                status: 403,
                detail: Some("track chairs only".to_string())
            }
        );
        assert_eq!(err.to_string(), "server responded with status 403");
        assert!(!err.is_cancelled());
    }

    #[test]
    fn cancellation_is_distinguished() {
        assert!(ApiError::Cancelled.is_cancelled());
        assert!(!ApiError::Network("offline".to_string()).is_cancelled());
    }
}

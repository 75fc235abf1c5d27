use reqwest::StatusCode;
use std::fmt::{self, Display};
use thiserror::Error;

/// Which lookup in the chain produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Ip,
    Geolocation,
    Flyover,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Ip => "fetching IP",
            Stage::Geolocation => "fetching coordinates",
            Stage::Flyover => "fetching the flyover times",
        }
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("request failed when {stage}: {source}")]
    Transport {
        stage: Stage,
        #[source]
        source: reqwest::Error,
    },
    #[error("Status Code {status} when {stage}. Response: {body}")]
    Status { stage: Stage, status: StatusCode, body: String },
    #[error("unexpected response body when {stage}: {source}")]
    Decode {
        stage: Stage,
        #[source]
        source: serde_json::Error,
    },
    #[error("no {field} in the response when {stage}")]
    MissingField { stage: Stage, field: &'static str },
    #[error("rise time {0} is outside the representable date range")]
    InvalidTimestamp(i64),
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl LookupError {
    /// The stage that failed, if the error came from a lookup.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            LookupError::Transport { stage, .. }
            | LookupError::Status { stage, .. }
            | LookupError::Decode { stage, .. }
            | LookupError::MissingField { stage, .. } => Some(*stage),
            LookupError::InvalidTimestamp(_) | LookupError::Client(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_stage_status_and_body() {
        let err = LookupError::Status {
            stage: Stage::Geolocation,
            status: StatusCode::FORBIDDEN,
            body: "invalid api key".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Status Code 403 Forbidden when fetching coordinates. Response: invalid api key"
        );
        assert_eq!(err.stage(), Some(Stage::Geolocation));
    }

    #[test]
    fn timestamp_error_has_no_stage() {
        assert_eq!(LookupError::InvalidTimestamp(-1).stage(), None);
    }
}

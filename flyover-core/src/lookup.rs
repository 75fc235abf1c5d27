//! The three upstream lookups, each a single GET returning JSON.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{LookupError, Stage};

pub mod flyover;
pub mod geolocation;
pub mod ip;

pub use flyover::fetch_flyover_times;
pub use geolocation::fetch_coords_by_ip;
pub use ip::fetch_my_ip;

/// Sends `request`, rejects non-success statuses and decodes the body as `T`.
async fn get_json<T: DeserializeOwned>(
    stage: Stage,
    request: RequestBuilder,
) -> Result<T, LookupError> {
    let res = request.send().await.map_err(|source| LookupError::Transport { stage, source })?;

    let status = res.status();
    let body = res.text().await.map_err(|source| LookupError::Transport { stage, source })?;
    debug!(%status, bytes = body.len(), "Response received when {stage}");

    if !status.is_success() {
        return Err(LookupError::Status { stage, status, body: truncate_body(&body) });
    }

    serde_json::from_str(&body).map_err(|source| LookupError::Decode { stage, source })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_bodies_are_kept() {
        assert_eq!(truncate_body("Not Found"), "Not Found");
    }

    #[test]
    fn long_bodies_are_cut_on_a_char_boundary() {
        let body = "é".repeat(250);

        let truncated = truncate_body(&body);

        assert_eq!(truncated.chars().count(), 203);
        assert!(truncated.ends_with("é..."));
    }
}

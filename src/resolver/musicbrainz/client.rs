//! MusicBrainz HTTP client
//!
//! Handles communication with the MusicBrainz web service.
//! See: https://musicbrainz.org/doc/MusicBrainz_API
//!
//! IMPORTANT: MusicBrainz requires a User-Agent header and rate limits to 1 req/sec.

use std::time::Duration;

use super::dto;
use crate::resolver::DEFAULT_TIMEOUT;
use crate::resolver::domain::{ProviderError, ReleaseGroupId};

/// User agent string - MusicBrainz requires this
const USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/coverscout)"
);

/// MusicBrainz release-group search client
pub struct MusicBrainzClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl MusicBrainzClient {
    /// Create a new client with the default timeout
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a new client with a custom per-request timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: "https://musicbrainz.org/ws/2".to_string(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Search for the release-group matching an (artist, album) pair.
    ///
    /// Requires an exact-phrase artist match AND an exact-phrase release-group
    /// match, restricted to album-type releases. Only the first hit is taken.
    pub async fn find_release_group(
        &self,
        artist: &str,
        album: &str,
    ) -> Result<ReleaseGroupId, ProviderError> {
        let response = self.send_search_request(artist, album).await?;

        let hit = response
            .release_groups
            .into_iter()
            .next()
            .ok_or(ProviderError::NoMatches)?;

        tracing::debug!(
            id = %hit.id,
            title = hit.title.as_deref().unwrap_or(""),
            score = hit.score.unwrap_or(0),
            "MusicBrainz release-group match"
        );

        Ok(ReleaseGroupId::new(hit.id))
    }

    /// Send the HTTP request and parse the response
    async fn send_search_request(
        &self,
        artist: &str,
        album: &str,
    ) -> Result<dto::ReleaseGroupSearchResponse, ProviderError> {
        let query = format!(r#"artist:"{artist}" AND releasegroup:"{album}" AND type:album"#);
        let url = format!(
            "{}/release-group/?fmt=json&limit=1&query={}",
            self.base_url,
            urlencoding::encode(&query)
        );

        let response = self
            .http_client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ProviderError::NoMatches);
        }

        if !status.is_success() {
            // Try to parse error response
            if let Ok(error) = response.json::<dto::ApiError>().await {
                return Err(ProviderError::Network(error.error));
            }
            return Err(ProviderError::Network(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json::<dto::ReleaseGroupSearchResponse>()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))
    }
}

impl Default for MusicBrainzClient {
    fn default() -> Self {
        Self::new()
    }
}

//! iTunes Search HTTP client
//!
//! Last-resort artwork source: a free-text album search combining artist and
//! album into a single term. The API only hands out 100x100 artwork URLs, but
//! larger renditions live at the same path with a different size token, so we
//! rewrite the token instead of settling for the thumbnail.
//!
//! API: https://performance-partners.apple.com/search-api

use std::time::Duration;

use super::dto;
use crate::resolver::DEFAULT_TIMEOUT;
use crate::resolver::domain::ProviderError;

/// Size token the API embeds in artwork URLs
const SMALL_ARTWORK_TOKEN: &str = "100x100bb.jpg";
/// High-resolution token the same CDN serves
const LARGE_ARTWORK_TOKEN: &str = "512x512bb.jpg";

/// iTunes Search client
pub struct ItunesClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ItunesClient {
    /// Create a new client with the default timeout
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a new client with a custom per-request timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: "https://itunes.apple.com/search".to_string(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Search for album artwork, returning a high-resolution URL.
    ///
    /// Takes the first hit only and rewrites its artwork size token from the
    /// default low-resolution value to the 512px rendition.
    pub async fn search_artwork(
        &self,
        artist: &str,
        album: &str,
    ) -> Result<String, ProviderError> {
        let response = self.send_search_request(artist, album).await?;
        artwork_from_response(response)
    }

    /// Send the HTTP request and parse the response
    async fn send_search_request(
        &self,
        artist: &str,
        album: &str,
    ) -> Result<dto::SearchResponse, ProviderError> {
        let term = format!("{artist} {album}");

        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[("term", term.as_str()), ("entity", "album"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            return Err(ProviderError::Network(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json::<dto::SearchResponse>()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))
    }
}

impl Default for ItunesClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the first hit's artwork and rewrite it to high resolution
fn artwork_from_response(response: dto::SearchResponse) -> Result<String, ProviderError> {
    let artwork = response
        .results
        .into_iter()
        .next()
        .and_then(|album| album.artwork_url_100)
        .ok_or(ProviderError::NoMatches)?;

    Ok(upscale_artwork_url(&artwork))
}

/// Rewrite the embedded size token to the high-resolution rendition.
/// The token appears exactly once in URLs the API hands out.
fn upscale_artwork_url(url: &str) -> String {
    url.replace(SMALL_ARTWORK_TOKEN, LARGE_ARTWORK_TOKEN)
}

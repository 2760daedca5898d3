//! Cover Art Archive HTTP client
//!
//! Probes release-group front covers on the Cover Art Archive.
//! No API key required, but please respect their rate limits.
//!
//! API: https://coverartarchive.org
//!
//! We never download image bytes here - a HEAD request per size variant is
//! enough to learn whether the image exists, and the winning URL is handed
//! straight to whatever displays it.

use std::future::Future;
use std::time::Duration;

use crate::resolver::DEFAULT_TIMEOUT;
use crate::resolver::domain::{ProviderError, ReleaseGroupId};

/// Front-cover size variants, probed largest to smallest. The bare `front`
/// variant redirects to the original upload.
const SIZE_VARIANTS: [&str; 3] = ["front-500", "front-250", "front"];

/// Cover Art Archive client
pub struct CoverArtClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl CoverArtClient {
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
            base_url: "https://coverartarchive.org".to_string(),
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

    /// Find the largest available front cover for a release group.
    ///
    /// Probes the size variants in order and returns the first URL whose
    /// existence check succeeds; the remaining variants are never checked.
    pub async fn probe_front_cover(
        &self,
        id: &ReleaseGroupId,
    ) -> Result<String, ProviderError> {
        let candidates = self.candidate_urls(id);
        first_existing(candidates, |url| async move {
            self.exists(&url).await
        })
        .await
        .ok_or(ProviderError::NoMatches)
    }

    /// Per-variant probe URLs, largest size first
    fn candidate_urls(&self, id: &ReleaseGroupId) -> Vec<String> {
        SIZE_VARIANTS
            .iter()
            .map(|size| format!("{}/release-group/{}/{}", self.base_url, id, size))
            .collect()
    }

    /// Cheap existence check: HEAD request, success status only
    async fn exists(&self, url: &str) -> bool {
        match self.http_client.head(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!(url, error = %e, "cover art probe request failed");
                false
            }
        }
    }
}

impl Default for CoverArtClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Return the first candidate for which `check` succeeds, short-circuiting:
/// once a candidate passes, the rest are never checked.
async fn first_existing<C, Fut>(candidates: Vec<String>, check: C) -> Option<String>
where
    C: Fn(String) -> Fut,
    Fut: Future<Output = bool>,
{
    for candidate in candidates {
        if check(candidate.clone()).await {
            return Some(candidate);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_client_creation() {
        let client = CoverArtClient::new();
        assert_eq!(client.base_url, "https://coverartarchive.org");
    }

    #[test]
    fn test_candidate_urls_largest_first() {
        let client = CoverArtClient::with_base_url("https://caa.test");
        let id = ReleaseGroupId::new("abc-123");
        let urls = client.candidate_urls(&id);

        assert_eq!(
            urls,
            vec![
                "https://caa.test/release-group/abc-123/front-500",
                "https://caa.test/release-group/abc-123/front-250",
                "https://caa.test/release-group/abc-123/front",
            ]
        );
    }

    #[tokio::test]
    async fn test_first_existing_stops_at_first_success() {
        let checked = RefCell::new(Vec::new());
        let candidates = vec![
            "large".to_string(),
            "medium".to_string(),
            "small".to_string(),
        ];

        // Large fails, medium succeeds; small must never be checked.
        let result = first_existing(candidates, |url| {
            checked.borrow_mut().push(url.clone());
            async move { url == "medium" }
        })
        .await;

        assert_eq!(result.as_deref(), Some("medium"));
        assert_eq!(*checked.borrow(), vec!["large", "medium"]);
    }

    #[tokio::test]
    async fn test_first_existing_all_fail() {
        let checked = RefCell::new(0usize);
        let candidates = vec!["a".to_string(), "b".to_string(), "c".to_string()];

        let result = first_existing(candidates, |_| {
            *checked.borrow_mut() += 1;
            async { false }
        })
        .await;

        assert!(result.is_none());
        assert_eq!(*checked.borrow(), 3);
    }

    #[tokio::test]
    async fn test_first_existing_takes_first_when_all_succeed() {
        let candidates = vec!["first".to_string(), "second".to_string()];
        let result = first_existing(candidates, |_| async { true }).await;
        assert_eq!(result.as_deref(), Some("first"));
    }
}

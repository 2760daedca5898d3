//! Spotify album-link resolution
//!
//! Finds a canonical `open.spotify.com/album/...` URL for a release group by
//! scanning its MusicBrainz URL relations, then asks Spotify's public oEmbed
//! endpoint for a representative thumbnail of that exact album.
//!
//! A canonical link without an image is not an acceptable partial success
//! here: if the oEmbed request fails or carries no thumbnail, the whole
//! operation yields nothing and the cascade moves on.

use std::time::Duration;

use super::dto;
use crate::resolver::DEFAULT_TIMEOUT;
use crate::resolver::domain::{AlbumLink, ProviderError, ReleaseGroupId};

/// User agent string - the MusicBrainz side of this stage requires one
const USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/coverscout)"
);

/// Marker identifying a canonical Spotify album URL among the relations
const ALBUM_URL_MARKER: &str = "open.spotify.com/album/";

/// Spotify link client
pub struct SpotifyLinkClient {
    http_client: reqwest::Client,
    musicbrainz_base_url: String,
    oembed_base_url: String,
}

impl SpotifyLinkClient {
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
            musicbrainz_base_url: "https://musicbrainz.org/ws/2".to_string(),
            oembed_base_url: "https://open.spotify.com/oembed".to_string(),
        }
    }

    /// Create a client for testing with custom base URLs
    #[cfg(test)]
    pub fn with_base_urls(
        musicbrainz_base_url: impl Into<String>,
        oembed_base_url: impl Into<String>,
    ) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            musicbrainz_base_url: musicbrainz_base_url.into(),
            oembed_base_url: oembed_base_url.into(),
        }
    }

    /// Resolve the canonical Spotify album link and its thumbnail for a
    /// release group. Both parts are required.
    pub async fn resolve_album_link(
        &self,
        id: &ReleaseGroupId,
    ) -> Result<AlbumLink, ProviderError> {
        let relations = self.fetch_url_relations(id).await?;

        let album_url = first_album_url(&relations).ok_or(ProviderError::NoMatches)?;

        let thumbnail = self.fetch_oembed_thumbnail(&album_url).await?;

        Ok(AlbumLink {
            url: album_url,
            thumbnail,
        })
    }

    /// Fetch the URL relations attached to a release group
    async fn fetch_url_relations(
        &self,
        id: &ReleaseGroupId,
    ) -> Result<dto::RelationsResponse, ProviderError> {
        let url = format!(
            "{}/release-group/{}?inc=url-rels&fmt=json",
            self.musicbrainz_base_url, id
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
            return Err(ProviderError::Network(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json::<dto::RelationsResponse>()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))
    }

    /// Ask the oEmbed endpoint for the thumbnail of an exact album URL
    async fn fetch_oembed_thumbnail(&self, album_url: &str) -> Result<String, ProviderError> {
        let url = format!(
            "{}?url={}",
            self.oembed_base_url,
            urlencoding::encode(album_url)
        );

        let response = self
            .http_client
            .get(&url)
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

        let oembed = response
            .json::<dto::OEmbedResponse>()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        oembed.thumbnail_url.ok_or(ProviderError::NoMatches)
    }
}

impl Default for SpotifyLinkClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Scan the relation list for the first canonical album URL
fn first_album_url(relations: &dto::RelationsResponse) -> Option<String> {
    relations
        .relations
        .iter()
        .filter_map(|rel| rel.url.as_ref())
        .find(|url| url.resource.contains(ALBUM_URL_MARKER))
        .map(|url| url.resource.clone())
}

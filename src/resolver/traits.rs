//! Trait definitions for the cascade's provider stages.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the real client implementations, while tests
//! can substitute mock implementations to script which stages succeed
//! and to assert which stages were consulted.

use async_trait::async_trait;

use super::coverart::CoverArtClient;
use super::domain::{AlbumLink, ProviderError, ReleaseGroupId};
use super::itunes::ItunesClient;
use super::musicbrainz::MusicBrainzClient;
use super::spotify::SpotifyLinkClient;

/// Trait for the release-group identifier lookup.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait ReleaseGroupSearch: Send + Sync {
    /// Resolve an (artist, album) pair to a release-group ID.
    async fn find_release_group(
        &self,
        artist: &str,
        album: &str,
    ) -> Result<ReleaseGroupId, ProviderError>;
}

/// Trait for the front-cover existence probe.
#[async_trait]
pub trait ArtworkProbe: Send + Sync {
    /// Return the URL of the largest available front cover.
    async fn probe_front_cover(&self, id: &ReleaseGroupId) -> Result<String, ProviderError>;
}

/// Trait for the relation-based canonical link resolution.
#[async_trait]
pub trait AlbumLinkResolver: Send + Sync {
    /// Resolve a canonical album link plus its thumbnail.
    async fn resolve_album_link(&self, id: &ReleaseGroupId) -> Result<AlbumLink, ProviderError>;
}

/// Trait for the marketplace album search fallback.
#[async_trait]
pub trait AlbumSearch: Send + Sync {
    /// Return a high-resolution artwork URL for the first search hit.
    async fn search_artwork(&self, artist: &str, album: &str) -> Result<String, ProviderError>;
}

// Implement traits for real clients

#[async_trait]
impl ReleaseGroupSearch for MusicBrainzClient {
    async fn find_release_group(
        &self,
        artist: &str,
        album: &str,
    ) -> Result<ReleaseGroupId, ProviderError> {
        self.find_release_group(artist, album).await
    }
}

#[async_trait]
impl ArtworkProbe for CoverArtClient {
    async fn probe_front_cover(&self, id: &ReleaseGroupId) -> Result<String, ProviderError> {
        self.probe_front_cover(id).await
    }
}

#[async_trait]
impl AlbumLinkResolver for SpotifyLinkClient {
    async fn resolve_album_link(&self, id: &ReleaseGroupId) -> Result<AlbumLink, ProviderError> {
        self.resolve_album_link(id).await
    }
}

#[async_trait]
impl AlbumSearch for ItunesClient {
    async fn search_artwork(&self, artist: &str, album: &str) -> Result<String, ProviderError> {
        self.search_artwork(artist, album).await
    }
}

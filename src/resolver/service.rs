//! Cover resolver - orchestrates the provider cascade
//!
//! This is the high-level API for resolving an (artist, album) pair:
//! 1. Look up the MusicBrainz release-group ID
//! 2. Probe the Cover Art Archive for a front cover
//! 3. Failing that, resolve a canonical Spotify link + thumbnail via URL relations
//! 4. Failing all of the above, fall back to an iTunes album search
//! 5. Degrade to a deterministic placeholder image
//!
//! Stages run strictly in order with no parallel fan-out: the services are
//! rate-sensitive public APIs, and a later, cheaper stage must never win a
//! race against an earlier, preferred one. The cascade never fails - every
//! call produces a fully populated [`ResolvedCover`].

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::resolver::{
    coverart::CoverArtClient,
    domain::{CoverSource, ResolvedCover},
    itunes::ItunesClient,
    links,
    musicbrainz::MusicBrainzClient,
    spotify::SpotifyLinkClient,
    traits::{AlbumLinkResolver, AlbumSearch, ArtworkProbe, ReleaseGroupSearch},
};

/// Configuration for the cover resolver
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Per-request timeout applied to every outbound call
    pub request_timeout: Duration,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// Service resolving (artist, album) pairs into cover art and listen links
pub struct CoverResolver {
    release_groups: Arc<dyn ReleaseGroupSearch>,
    artwork: Arc<dyn ArtworkProbe>,
    album_links: Arc<dyn AlbumLinkResolver>,
    marketplace: Arc<dyn AlbumSearch>,
    generation: AtomicU64,
}

impl CoverResolver {
    /// Create a resolver backed by the real provider clients
    pub fn new(config: &ResolverConfig) -> Self {
        Self::with_providers(
            Arc::new(MusicBrainzClient::with_timeout(config.request_timeout)),
            Arc::new(CoverArtClient::with_timeout(config.request_timeout)),
            Arc::new(SpotifyLinkClient::with_timeout(config.request_timeout)),
            Arc::new(ItunesClient::with_timeout(config.request_timeout)),
        )
    }

    /// Create a resolver with injected provider implementations.
    ///
    /// This is how tests script the cascade; callers can also use it to wrap
    /// providers with their own instrumentation.
    pub fn with_providers(
        release_groups: Arc<dyn ReleaseGroupSearch>,
        artwork: Arc<dyn ArtworkProbe>,
        album_links: Arc<dyn AlbumLinkResolver>,
        marketplace: Arc<dyn AlbumSearch>,
    ) -> Self {
        Self {
            release_groups,
            artwork,
            album_links,
            marketplace,
            generation: AtomicU64::new(0),
        }
    }

    /// Resolve a cover image, attribution caption, and listen link.
    ///
    /// Never fails: when every provider stage comes up empty the result
    /// degrades to the placeholder image and the generic Spotify search link.
    /// Concurrent calls are independent; compare the result's `generation`
    /// against [`latest_generation`](Self::latest_generation) to discard a
    /// result that was overtaken by a newer request.
    pub async fn resolve(&self, artist: &str, album: &str) -> ResolvedCover {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let search_url = links::spotify_search_url(artist, album);

        match self.release_groups.find_release_group(artist, album).await {
            Ok(id) => {
                match self.artwork.probe_front_cover(&id).await {
                    Ok(cover_url) => {
                        // CAA hit: the relation resolver is never consulted
                        return ResolvedCover {
                            cover_url,
                            source: CoverSource::CoverArtArchive,
                            spotify_url: search_url,
                            generation,
                        };
                    }
                    Err(e) => {
                        tracing::debug!(release_group = %id, error = %e, "cover art probe came up empty");
                    }
                }

                match self.album_links.resolve_album_link(&id).await {
                    Ok(link) => {
                        // Canonical album link wins over the generic search link
                        return ResolvedCover {
                            cover_url: link.thumbnail,
                            source: CoverSource::Spotify,
                            spotify_url: link.url,
                            generation,
                        };
                    }
                    Err(e) => {
                        tracing::debug!(release_group = %id, error = %e, "no usable album relation");
                    }
                }
            }
            Err(e) => {
                tracing::debug!(artist, album, error = %e, "release-group lookup came up empty");
            }
        }

        match self.marketplace.search_artwork(artist, album).await {
            Ok(cover_url) => ResolvedCover {
                cover_url,
                source: CoverSource::Itunes,
                spotify_url: search_url,
                generation,
            },
            Err(e) => {
                tracing::warn!(artist, album, error = %e, "all providers failed, using placeholder");
                ResolvedCover {
                    cover_url: links::placeholder_url(artist, album),
                    source: CoverSource::Placeholder,
                    spotify_url: search_url,
                    generation,
                }
            }
        }
    }

    /// Single-shot marketplace artwork lookup.
    ///
    /// Recovery action for when a previously chosen cover fails to load:
    /// re-queries the iTunes fallback directly, bypassing the cascade.
    pub async fn fallback_artwork(&self, artist: &str, album: &str) -> Option<String> {
        match self.marketplace.search_artwork(artist, album).await {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::debug!(artist, album, error = %e, "fallback artwork lookup failed");
                None
            }
        }
    }

    /// Generation of the most recently started `resolve` call
    pub fn latest_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Whether a result is from the most recently started `resolve` call.
    /// Stale results should be discarded rather than overwrite fresher ones.
    pub fn is_current(&self, cover: &ResolvedCover) -> bool {
        cover.generation == self.latest_generation()
    }
}

impl Default for CoverResolver {
    fn default() -> Self {
        Self::new(&ResolverConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::domain::ProviderError;
    use crate::resolver::traits::mocks::{
        MockAlbumLinks, MockArtwork, MockMarketplace, MockReleaseGroups,
    };

    const ARTIST: &str = "Portishead";
    const ALBUM: &str = "Dummy";

    struct Cascade {
        release_groups: Arc<MockReleaseGroups>,
        artwork: Arc<MockArtwork>,
        album_links: Arc<MockAlbumLinks>,
        marketplace: Arc<MockMarketplace>,
    }

    impl Cascade {
        fn resolver(&self) -> CoverResolver {
            CoverResolver::with_providers(
                self.release_groups.clone(),
                self.artwork.clone(),
                self.album_links.clone(),
                self.marketplace.clone(),
            )
        }
    }

    fn cascade(
        release_groups: MockReleaseGroups,
        artwork: MockArtwork,
        album_links: MockAlbumLinks,
        marketplace: MockMarketplace,
    ) -> Cascade {
        Cascade {
            release_groups: Arc::new(release_groups),
            artwork: Arc::new(artwork),
            album_links: Arc::new(album_links),
            marketplace: Arc::new(marketplace),
        }
    }

    fn network_down() -> ProviderError {
        ProviderError::Network("connection refused".to_string())
    }

    #[tokio::test]
    async fn test_cover_art_archive_wins_and_skips_link_resolver() {
        let mocks = cascade(
            MockReleaseGroups::found("rg-1"),
            MockArtwork::found("https://caa.test/release-group/rg-1/front-500"),
            MockAlbumLinks::found("https://open.spotify.com/album/x", "https://i.scdn.co/x"),
            MockMarketplace::found("https://mzstatic.test/512x512bb.jpg"),
        );

        let result = mocks.resolver().resolve(ARTIST, ALBUM).await;

        assert_eq!(result.source, CoverSource::CoverArtArchive);
        assert_eq!(result.caption(), "Cover via Cover Art Archive");
        assert_eq!(
            result.cover_url,
            "https://caa.test/release-group/rg-1/front-500"
        );
        // Generic search link, exactly as the pure builder produces it
        assert_eq!(result.spotify_url, links::spotify_search_url(ARTIST, ALBUM));
        // A CAA hit bypasses the relation resolver and the marketplace entirely
        assert_eq!(mocks.album_links.call_count(), 0);
        assert_eq!(mocks.marketplace.call_count(), 0);
    }

    #[tokio::test]
    async fn test_spotify_link_wins_when_probe_fails() {
        let mocks = cascade(
            MockReleaseGroups::found("rg-1"),
            MockArtwork::failing(ProviderError::NoMatches),
            MockAlbumLinks::found(
                "https://open.spotify.com/album/3539EbNgIdEDGBKkUf4wno",
                "https://i.scdn.co/image/thumb",
            ),
            MockMarketplace::found("https://mzstatic.test/512x512bb.jpg"),
        );

        let result = mocks.resolver().resolve(ARTIST, ALBUM).await;

        assert_eq!(result.source, CoverSource::Spotify);
        assert_eq!(result.caption(), "Cover via Spotify");
        assert_eq!(result.cover_url, "https://i.scdn.co/image/thumb");
        // Canonical album link overrides the generic search link
        assert_eq!(
            result.spotify_url,
            "https://open.spotify.com/album/3539EbNgIdEDGBKkUf4wno"
        );
        assert_eq!(mocks.artwork.call_count(), 1);
        assert_eq!(mocks.marketplace.call_count(), 0);
    }

    #[tokio::test]
    async fn test_itunes_fallback_when_no_release_group() {
        let mocks = cascade(
            MockReleaseGroups::failing(ProviderError::NoMatches),
            MockArtwork::found("https://caa.test/never-reached"),
            MockAlbumLinks::found("https://open.spotify.com/album/x", "https://i.scdn.co/x"),
            MockMarketplace::found("https://is1-ssl.mzstatic.com/thumb/512x512bb.jpg"),
        );

        let result = mocks.resolver().resolve(ARTIST, ALBUM).await;

        assert_eq!(result.source, CoverSource::Itunes);
        assert_eq!(result.caption(), "Cover via iTunes");
        assert!(result.cover_url.ends_with("512x512bb.jpg"));
        assert_eq!(result.spotify_url, links::spotify_search_url(ARTIST, ALBUM));
        // Without an ID, neither ID-keyed stage can run
        assert_eq!(mocks.artwork.call_count(), 0);
        assert_eq!(mocks.album_links.call_count(), 0);
        assert_eq!(mocks.marketplace.call_count(), 1);
    }

    #[tokio::test]
    async fn test_itunes_fallback_when_both_substages_fail() {
        let mocks = cascade(
            MockReleaseGroups::found("rg-1"),
            MockArtwork::failing(network_down()),
            MockAlbumLinks::failing(ProviderError::NoMatches),
            MockMarketplace::found("https://is1-ssl.mzstatic.com/thumb/512x512bb.jpg"),
        );

        let result = mocks.resolver().resolve(ARTIST, ALBUM).await;

        assert_eq!(result.source, CoverSource::Itunes);
        assert_eq!(mocks.artwork.call_count(), 1);
        assert_eq!(mocks.album_links.call_count(), 1);
        assert_eq!(mocks.marketplace.call_count(), 1);
    }

    #[tokio::test]
    async fn test_placeholder_when_every_stage_fails() {
        let mocks = cascade(
            MockReleaseGroups::failing(network_down()),
            MockArtwork::failing(network_down()),
            MockAlbumLinks::failing(network_down()),
            MockMarketplace::failing(ProviderError::Parse("unexpected shape".to_string())),
        );

        let result = mocks.resolver().resolve(ARTIST, ALBUM).await;

        assert_eq!(result.source, CoverSource::Placeholder);
        assert_eq!(result.caption(), "Placeholder");
        assert_eq!(result.cover_url, links::placeholder_url(ARTIST, ALBUM));
        // Percent-encoded artist and album joined by a newline
        assert!(result.cover_url.contains("Portishead%0ADummy"));
        assert_eq!(result.spotify_url, links::spotify_search_url(ARTIST, ALBUM));
    }

    #[tokio::test]
    async fn test_every_result_is_fully_populated() {
        let mocks = cascade(
            MockReleaseGroups::failing(ProviderError::NoMatches),
            MockArtwork::failing(ProviderError::NoMatches),
            MockAlbumLinks::failing(ProviderError::NoMatches),
            MockMarketplace::failing(ProviderError::NoMatches),
        );

        let result = mocks.resolver().resolve("", "").await;

        assert!(!result.cover_url.is_empty());
        assert!(!result.caption().is_empty());
        assert!(!result.spotify_url.is_empty());
    }

    #[tokio::test]
    async fn test_generation_marks_overtaken_results_stale() {
        let mocks = cascade(
            MockReleaseGroups::failing(ProviderError::NoMatches),
            MockArtwork::failing(ProviderError::NoMatches),
            MockAlbumLinks::failing(ProviderError::NoMatches),
            MockMarketplace::found("https://mzstatic.test/512x512bb.jpg"),
        );
        let resolver = mocks.resolver();

        let first = resolver.resolve(ARTIST, ALBUM).await;
        assert!(resolver.is_current(&first));

        let second = resolver.resolve("Massive Attack", "Mezzanine").await;
        assert!(resolver.is_current(&second));
        assert!(!resolver.is_current(&first));
        assert!(first.generation < second.generation);
        assert_eq!(resolver.latest_generation(), second.generation);
    }

    #[tokio::test]
    async fn test_fallback_artwork_bypasses_cascade() {
        let mocks = cascade(
            MockReleaseGroups::found("rg-1"),
            MockArtwork::found("https://caa.test/front-500"),
            MockAlbumLinks::found("https://open.spotify.com/album/x", "https://i.scdn.co/x"),
            MockMarketplace::found("https://mzstatic.test/512x512bb.jpg"),
        );
        let resolver = mocks.resolver();

        let artwork = resolver.fallback_artwork(ARTIST, ALBUM).await;

        assert_eq!(artwork.as_deref(), Some("https://mzstatic.test/512x512bb.jpg"));
        // Only the marketplace stage runs
        assert_eq!(mocks.release_groups.call_count(), 0);
        assert_eq!(mocks.artwork.call_count(), 0);
        assert_eq!(mocks.album_links.call_count(), 0);
        assert_eq!(mocks.marketplace.call_count(), 1);
    }

    #[tokio::test]
    async fn test_fallback_artwork_absorbs_failure() {
        let mocks = cascade(
            MockReleaseGroups::found("rg-1"),
            MockArtwork::found("https://caa.test/front-500"),
            MockAlbumLinks::found("https://open.spotify.com/album/x", "https://i.scdn.co/x"),
            MockMarketplace::failing(network_down()),
        );

        assert!(mocks.resolver().fallback_artwork(ARTIST, ALBUM).await.is_none());
    }

    #[test]
    fn test_default_config() {
        let config = ResolverConfig::default();
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }
}

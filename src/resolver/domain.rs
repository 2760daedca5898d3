//! Internal domain models for cover resolution.
//!
//! These types are OUR types - they don't change when external APIs change.
//! Provider modules convert their wire DTOs into these before anything else
//! sees them.

use std::fmt;

/// Opaque MusicBrainz release-group identifier.
///
/// Obtained from the release-group search and only ever passed back to
/// services that key on it. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseGroupId(String);

impl ReleaseGroupId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReleaseGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A canonical Spotify album link together with its representative thumbnail.
///
/// Both fields are required: a link without an image is not a usable result
/// for the cascade stage that produces this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumLink {
    /// Canonical `open.spotify.com/album/...` URL
    pub url: String,
    /// Thumbnail image URL from the oEmbed metadata
    pub thumbnail: String,
}

/// Which service the chosen cover image came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverSource {
    /// Cover Art Archive front-cover probe
    CoverArtArchive,
    /// Spotify oEmbed thumbnail via a MusicBrainz URL relation
    Spotify,
    /// iTunes Search artwork (size token rewritten)
    Itunes,
    /// Deterministic placeholder image
    Placeholder,
}

impl CoverSource {
    /// Human-readable attribution caption shown next to the cover.
    pub fn caption(&self) -> &'static str {
        match self {
            CoverSource::CoverArtArchive => "Cover via Cover Art Archive",
            CoverSource::Spotify => "Cover via Spotify",
            CoverSource::Itunes => "Cover via iTunes",
            CoverSource::Placeholder => "Placeholder",
        }
    }
}

/// Final output of a resolution: every field is always populated.
///
/// The cascade never returns a partial result - when every provider fails the
/// cover degrades to the placeholder image and the link to the generic Spotify
/// search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCover {
    /// Cover image URL (provider result or placeholder)
    pub cover_url: String,
    /// Where the image came from
    pub source: CoverSource,
    /// Listen/buy link: a canonical album URL when the Spotify stage won,
    /// otherwise the generic Spotify search link
    pub spotify_url: String,
    /// Generation of the resolver call that produced this result.
    /// Compare against [`CoverResolver::latest_generation`] to discard
    /// results overtaken by a newer request.
    ///
    /// [`CoverResolver::latest_generation`]: crate::resolver::CoverResolver::latest_generation
    pub generation: u64,
}

impl ResolvedCover {
    /// Attribution caption for the chosen source.
    pub fn caption(&self) -> &'static str {
        self.source.caption()
    }
}

/// Errors that can occur inside a provider.
///
/// These never cross the orchestrator boundary as errors - any of them just
/// means "this stage produced no result" and the cascade moves on.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    /// Request could not complete
    #[error("Network error: {0}")]
    Network(String),

    /// Well-formed response lacking the expected entry or field
    #[error("No matches found")]
    NoMatches,

    /// Response shape was not what the API documents
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captions() {
        assert_eq!(
            CoverSource::CoverArtArchive.caption(),
            "Cover via Cover Art Archive"
        );
        assert_eq!(CoverSource::Spotify.caption(), "Cover via Spotify");
        assert_eq!(CoverSource::Itunes.caption(), "Cover via iTunes");
        assert_eq!(CoverSource::Placeholder.caption(), "Placeholder");
    }

    #[test]
    fn test_resolved_cover_caption_delegates_to_source() {
        let cover = ResolvedCover {
            cover_url: "https://example.com/cover.jpg".to_string(),
            source: CoverSource::Itunes,
            spotify_url: "https://open.spotify.com/search/x".to_string(),
            generation: 1,
        };
        assert_eq!(cover.caption(), "Cover via iTunes");
    }

    #[test]
    fn test_release_group_id_display() {
        let id = ReleaseGroupId::new("0b7f0d56-3094-3f6b-9c1d-cf9dd19a9f8f");
        assert_eq!(id.to_string(), "0b7f0d56-3094-3f6b-9c1d-cf9dd19a9f8f");
        assert_eq!(id.as_str(), "0b7f0d56-3094-3f6b-9c1d-cf9dd19a9f8f");
    }
}

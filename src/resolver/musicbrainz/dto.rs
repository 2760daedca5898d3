//! MusicBrainz API Data Transfer Objects
//!
//! These types match EXACTLY what the MusicBrainz API returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the musicbrainz module - convert to domain types.
//!
//! API Reference: https://musicbrainz.org/doc/MusicBrainz_API/Search
//!
//! We use the /release-group search endpoint to resolve an (artist, album)
//! pair to a release-group MBID.

use serde::{Deserialize, Serialize};

/// Release-group search response
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReleaseGroupSearchResponse {
    /// Matching release groups, best match first
    #[serde(default)]
    pub release_groups: Vec<ReleaseGroupHit>,
}

/// A single release-group search hit
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReleaseGroupHit {
    /// MusicBrainz release-group ID
    pub id: String,
    /// Release-group title
    pub title: Option<String>,
    /// Search relevance score (0-100)
    pub score: Option<i32>,
}

/// Error response from MusicBrainz API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub error: String,
    pub help: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================

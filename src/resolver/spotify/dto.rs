//! Wire shapes consumed by the Spotify link stage.
//!
//! These types match EXACTLY what the upstream endpoints return.
//! DO NOT add fields that aren't in the API responses.
//! DO NOT use these types outside the spotify module - convert to domain types.
//!
//! Two endpoints are involved: the MusicBrainz release-group lookup with
//! `inc=url-rels` (typed URL relations), and Spotify's public oEmbed endpoint
//! (https://developer.spotify.com/documentation/embeds).

use serde::{Deserialize, Serialize};

/// Release-group lookup response carrying URL relations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RelationsResponse {
    /// URL relations attached to the release group
    #[serde(default)]
    pub relations: Vec<Relation>,
}

/// A single typed relation entry
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Relation {
    /// Relation type (e.g. "free streaming", "purchase for download")
    #[serde(rename = "type")]
    pub relation_type: Option<String>,
    /// Target URL, present for url-rels
    pub url: Option<RelationUrl>,
}

/// Relation target
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RelationUrl {
    /// The external URL this relation points at
    pub resource: String,
}

/// Spotify oEmbed response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OEmbedResponse {
    /// Representative thumbnail for the embedded content
    pub thumbnail_url: Option<String>,
    /// Title of the embedded content
    pub title: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real APIs return.
// ============================================================================

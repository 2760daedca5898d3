//! iTunes Search API Data Transfer Objects
//!
//! These types match EXACTLY what the iTunes Search API returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the itunes module - convert to domain types.
//!
//! API Reference: https://performance-partners.apple.com/search-api

use serde::{Deserialize, Serialize};

/// Search response wrapper
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Number of results returned
    pub result_count: Option<u32>,
    /// Matching collections
    #[serde(default)]
    pub results: Vec<AlbumResult>,
}

/// A single album (collection) hit
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumResult {
    /// 100x100 artwork URL; larger sizes are reachable by rewriting the
    /// embedded size token
    pub artwork_url_100: Option<String>,
    /// Album title
    pub collection_name: Option<String>,
    /// Artist name
    pub artist_name: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_search_response() {
        let json = r#"{
            "resultCount": 1,
            "results": [{
                "wrapperType": "collection",
                "collectionType": "Album",
                "artistName": "Portishead",
                "collectionName": "Dummy",
                "artworkUrl100": "https://is1-ssl.mzstatic.com/image/thumb/Music/v4/ab/cd/ef/source/100x100bb.jpg",
                "trackCount": 11
            }]
        }"#;

        let response: SearchResponse =
            serde_json::from_str(json).expect("Should parse search response");

        assert_eq!(response.result_count, Some(1));
        assert_eq!(response.results.len(), 1);

        let album = &response.results[0];
        assert_eq!(album.artist_name.as_deref(), Some("Portishead"));
        assert_eq!(album.collection_name.as_deref(), Some("Dummy"));
        assert!(
            album
                .artwork_url_100
                .as_deref()
                .unwrap()
                .ends_with("100x100bb.jpg")
        );
    }

    #[test]
    fn test_parse_empty_search_response() {
        let json = r#"{"resultCount": 0, "results": []}"#;

        let response: SearchResponse =
            serde_json::from_str(json).expect("Should parse empty response");

        assert!(response.results.is_empty());
    }

    #[test]
    fn test_parse_result_without_artwork() {
        let json = r#"{
            "resultCount": 1,
            "results": [{"collectionName": "Obscure Album"}]
        }"#;

        let response: SearchResponse =
            serde_json::from_str(json).expect("Should tolerate missing artwork field");

        assert!(response.results[0].artwork_url_100.is_none());
    }
}

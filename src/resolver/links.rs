//! Pure link builders.
//!
//! No I/O, deterministic for identical inputs, always succeed. These supply
//! the provisional display values before the cascade completes and the
//! default listen link whenever no provider produces a more specific one.

/// YouTube Music search filter restricting results to the "Albums" category.
/// The value is an opaque, already percent-encoded protobuf parameter.
const YTM_ALBUMS_FILTER: &str = "EgWKAQIYAWoKEAUQChADEAQQBQ%3D%3D";

/// Placeholder image service; the text parameter renders onto a 512x512 tile.
const PLACEHOLDER_BASE: &str = "https://placehold.co/512x512?text=";

/// Spotify search URL for an (artist, album) pair.
pub fn spotify_search_url(artist: &str, album: &str) -> String {
    format!(
        "https://open.spotify.com/search/{}",
        urlencoding::encode(&format!("{artist} {album}"))
    )
}

/// YouTube Music search URL, constrained to album results.
pub fn youtube_music_search_url(artist: &str, album: &str) -> String {
    format!(
        "https://music.youtube.com/search?q={}&sp={}",
        urlencoding::encode(&format!("{artist} {album}")),
        YTM_ALBUMS_FILTER
    )
}

/// Deterministic placeholder cover showing the artist and album as text,
/// newline-separated so they render on two lines.
pub fn placeholder_url(artist: &str, album: &str) -> String {
    format!(
        "{}{}",
        PLACEHOLDER_BASE,
        urlencoding::encode(&format!("{artist}\n{album}"))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_spotify_search_url_encodes_pair() {
        let url = spotify_search_url("Portishead", "Dummy");
        assert_eq!(url, "https://open.spotify.com/search/Portishead%20Dummy");
    }

    #[test]
    fn test_youtube_music_url_carries_albums_filter() {
        let url = youtube_music_search_url("Boards of Canada", "Geogaddi");
        assert!(url.starts_with("https://music.youtube.com/search?q=Boards%20of%20Canada%20Geogaddi"));
        assert!(url.ends_with("&sp=EgWKAQIYAWoKEAUQChADEAQQBQ%3D%3D"));
    }

    #[test]
    fn test_placeholder_url_joins_with_encoded_newline() {
        let url = placeholder_url("Portishead", "Dummy");
        assert_eq!(
            url,
            "https://placehold.co/512x512?text=Portishead%0ADummy"
        );
    }

    #[test]
    fn test_special_characters_are_percent_encoded() {
        let url = spotify_search_url("AC/DC", "Back in Black");
        assert!(!url["https://open.spotify.com/search/".len()..].contains('/'));
        assert!(url.contains("AC%2FDC"));
    }

    proptest! {
        /// Identical inputs always produce identical output strings.
        #[test]
        fn prop_builders_are_deterministic(artist in ".*", album in ".*") {
            prop_assert_eq!(
                spotify_search_url(&artist, &album),
                spotify_search_url(&artist, &album)
            );
            prop_assert_eq!(
                youtube_music_search_url(&artist, &album),
                youtube_music_search_url(&artist, &album)
            );
            prop_assert_eq!(
                placeholder_url(&artist, &album),
                placeholder_url(&artist, &album)
            );
        }

        /// Encoded output never contains raw whitespace.
        #[test]
        fn prop_no_raw_whitespace(artist in ".*", album in ".*") {
            prop_assert!(!placeholder_url(&artist, &album).contains(char::is_whitespace));
            prop_assert!(!spotify_search_url(&artist, &album).contains(char::is_whitespace));
        }
    }
}

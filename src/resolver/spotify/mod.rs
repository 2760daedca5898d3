//! Spotify album-link integration
//!
//! Cross-references MusicBrainz URL relations to find a canonical Spotify
//! album link, then fetches its thumbnail through the public oEmbed endpoint.
//! No API key required on either side.

pub mod dto;
mod client;

pub use client::SpotifyLinkClient;

//! MusicBrainz API integration
//!
//! Resolves an (artist, album) pair to a release-group MBID via the search
//! endpoint. The MBID keys every later stage of the cascade.
//!
//! API docs: https://musicbrainz.org/doc/MusicBrainz_API

pub mod dto;
mod client;

pub use client::MusicBrainzClient;

//! Cover Art Archive integration
//!
//! Existence-probes front covers on coverartarchive.org using MusicBrainz
//! release-group IDs. No API key required.

mod client;

pub use client::CoverArtClient;

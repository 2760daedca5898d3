//! Cover resolution - turns an (artist, album) pair into cover art, an
//! attribution caption, and a listen link via public catalog services.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types that represent our results
//! - **API DTOs** (`musicbrainz/dto.rs`, `spotify/dto.rs`, `itunes/dto.rs`) - Exact API response shapes
//! - **Clients** - One HTTP client per upstream service
//! - **Links** (`links.rs`) - Pure URL builders, no I/O
//! - **Traits** (`traits.rs`) - Injection seams so the cascade is testable
//! - **Service** (`service.rs`) - The fallback cascade itself
//!
//! The cascade is strictly ordered and short-circuits on first success:
//! MusicBrainz + Cover Art Archive, then Spotify via MusicBrainz URL
//! relations, then an iTunes search, then a deterministic placeholder. Any
//! subset of the upstream services may be down, wrong, or weirdly shaped -
//! the resolver still produces a usable, fully populated result.
//!
//! # Usage
//!
//! ```ignore
//! use coverscout::resolver::{CoverResolver, ResolverConfig};
//!
//! let resolver = CoverResolver::new(&ResolverConfig::default());
//! let cover = resolver.resolve("Portishead", "Dummy").await;
//! println!("{} ({})", cover.cover_url, cover.caption());
//! ```

use std::time::Duration;

pub mod domain;
pub mod links;
pub mod musicbrainz;
pub mod coverart;
pub mod spotify;
pub mod itunes;
pub mod traits;
pub mod service;

pub use domain::{AlbumLink, CoverSource, ProviderError, ReleaseGroupId, ResolvedCover};
pub use service::{CoverResolver, ResolverConfig};

/// Default per-request timeout for every provider client. None of the
/// upstream services are trusted to respond promptly.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

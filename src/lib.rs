//! coverscout - best-effort album cover resolution.
//!
//! Resolves a human-readable (artist, album) pair into a cover image URL, an
//! attribution caption, and a canonical listen link by querying a fixed
//! sequence of unauthenticated public catalog services, degrading gracefully
//! as each one fails. The pure link builders in [`resolver::links`] give
//! callers provisional display values before the cascade completes.

pub mod config;
pub mod resolver;

pub use resolver::{CoverResolver, CoverSource, ResolvedCover, ResolverConfig};

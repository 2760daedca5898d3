//! iTunes Search integration
//!
//! Generic album search used as the last-resort image source, and standalone
//! as a recovery action when a previously chosen cover fails to load.

pub mod dto;
mod client;

pub use client::ItunesClient;

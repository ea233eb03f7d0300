//! MusicBrainz API integration
//!
//! Searches releases by free text. No API key is needed, but every request
//! carries a descriptive User-Agent.
//!
//! API docs: https://musicbrainz.org/doc/MusicBrainz_API

pub mod dto;
mod adapter;
mod client;

pub use adapter::{to_match, to_matches};
pub use client::{DEFAULT_BASE_URL, MusicBrainzClient, user_agent};

//! Release lookup - guesses the album behind a folder and fetches its metadata.
//!
//! # Architecture
//!
//! - **Domain models** (`domain.rs`) - the match we tag files with
//! - **Query** (`query.rs`) - folder name → search text
//! - **API DTOs** (`musicbrainz/dto.rs`) - exact MusicBrainz response shapes
//! - **Adapter** - converts DTOs to domain models
//! - **Client** - HTTP client for the MusicBrainz search endpoint
//! - **Traits** (`traits.rs`) - seam for injecting a mock search in tests

pub mod domain;
pub mod musicbrainz;
pub mod query;
pub mod traits;

pub use domain::{LookupError, ReleaseMatch, year_from_date};
pub use musicbrainz::MusicBrainzClient;
pub use query::SearchQuery;
pub use traits::ReleaseSearchApi;

//! Trait definitions for the release search collaborator.
//!
//! Production code uses [`MusicBrainzClient`](super::MusicBrainzClient), while
//! tests substitute the mock in [`mocks`].

use async_trait::async_trait;

use super::domain::{LookupError, ReleaseMatch};
use super::query::SearchQuery;

/// Trait for free-text release search.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait ReleaseSearchApi: Send + Sync {
    /// Search releases matching `query`, returning at most `limit` candidates
    /// ordered best first.
    async fn search_releases(
        &self,
        query: &SearchQuery,
        limit: u32,
    ) -> Result<Vec<ReleaseMatch>, LookupError>;
}

#[async_trait]
impl ReleaseSearchApi for super::musicbrainz::MusicBrainzClient {
    async fn search_releases(
        &self,
        query: &SearchQuery,
        limit: u32,
    ) -> Result<Vec<ReleaseMatch>, LookupError> {
        self.search_releases(query, limit).await
    }
}

//! Internal domain models for release lookup.
//!
//! These types are OUR types - they don't change when the MusicBrainz API
//! changes. Search responses get converted into these types via the adapter.

/// A release candidate returned by a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseMatch {
    /// MusicBrainz release ID
    pub release_id: String,
    /// Name of the first credited artist
    pub artist: String,
    /// Release title
    pub album: String,
    /// Leading year of the release date, empty if unknown
    pub year: String,
    /// Search relevance score (0-100)
    pub score: u8,
}

impl ReleaseMatch {
    /// Whether this candidate reaches the given minimum score.
    ///
    /// `None` accepts every candidate.
    pub fn meets_score(&self, min_score: Option<u8>) -> bool {
        min_score.is_none_or(|min| self.score >= min)
    }
}

/// Errors that can occur during a release search
#[derive(Debug, Clone, thiserror::Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API request failed: {0}")]
    Api(String),

    #[error("HTTP {status}: {reason}")]
    Http { status: u16, reason: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Rate limited - try again later")]
    RateLimited,

    #[error("Service unavailable")]
    ServiceUnavailable,

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

/// Extract the year from a release date (`YYYY`, `YYYY-MM` or `YYYY-MM-DD`).
///
/// Returns an empty string when the leading token is missing or not numeric.
pub fn year_from_date(date: &str) -> String {
    let head = date.split('-').next().unwrap_or_default().trim();
    if !head.is_empty() && head.chars().all(|c| c.is_ascii_digit()) {
        head.to_string()
    } else {
        String::new()
    }
}

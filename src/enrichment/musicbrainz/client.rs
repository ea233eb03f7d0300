//! MusicBrainz HTTP client
//!
//! Handles communication with the MusicBrainz release search.
//! See: https://musicbrainz.org/doc/MusicBrainz_API/Search
//!
//! IMPORTANT: MusicBrainz requires a meaningful User-Agent header.
//! Requests without one may be throttled or rejected.

use tracing::debug;

use super::{adapter, dto};
use crate::config::MusicBrainzConfig;
use crate::enrichment::domain::{LookupError, ReleaseMatch};
use crate::enrichment::query::SearchQuery;

/// Public MusicBrainz web service root
pub const DEFAULT_BASE_URL: &str = "https://musicbrainz.org/ws/2";

/// Build the User-Agent string, e.g. `fix-my-music/0.1.0 ( you@example.com )`
pub fn user_agent(contact: &str) -> String {
    format!(
        "{}/{} ( {} )",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        contact
    )
}

/// MusicBrainz API client
pub struct MusicBrainzClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl MusicBrainzClient {
    /// Create a client from configuration
    pub fn new(config: &MusicBrainzConfig) -> Result<Self, LookupError> {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(user_agent(&config.contact))
            .build()
            .map_err(|e| LookupError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Search releases matching `query`, best match first
    pub async fn search_releases(
        &self,
        query: &SearchQuery,
        limit: u32,
    ) -> Result<Vec<ReleaseMatch>, LookupError> {
        let response = self.send_search_request(query, limit).await?;
        adapter::to_matches(response)
    }

    /// Send the HTTP request and parse the response
    async fn send_search_request(
        &self,
        query: &SearchQuery,
        limit: u32,
    ) -> Result<dto::ReleaseSearchResponse, LookupError> {
        let url = format!("{}/release", self.base_url);
        let limit = limit.to_string();

        debug!("MusicBrainz API request: {}?query={}&limit={}", url, query, limit);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("query", query.as_str()),
                ("limit", limit.as_str()),
                ("fmt", "json"),
            ])
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LookupError::RateLimited);
        }

        if status == reqwest::StatusCode::SERVICE_UNAVAILABLE {
            return Err(LookupError::ServiceUnavailable);
        }

        if !status.is_success() {
            // Try to parse error response
            if let Ok(error) = response.json::<dto::ApiError>().await {
                return Err(LookupError::Api(error.error));
            }
            return Err(LookupError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        response
            .json::<dto::ReleaseSearchResponse>()
            .await
            .map_err(|e| LookupError::Parse(e.to_string()))
    }
}

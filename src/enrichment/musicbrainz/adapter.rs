//! Adapter layer: Convert MusicBrainz DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.

use tracing::debug;

use super::dto;
use crate::enrichment::domain::{LookupError, ReleaseMatch, year_from_date};

/// Convert a search response into release matches, preserving order
///
/// Only the top hit must be well-formed; malformed releases after it are
/// dropped rather than failing the lookup.
pub fn to_matches(response: dto::ReleaseSearchResponse) -> Result<Vec<ReleaseMatch>, LookupError> {
    let mut releases = response.releases.into_iter();
    let Some(first) = releases.next() else {
        return Ok(Vec::new());
    };

    let mut matches = vec![to_match(first)?];
    matches.extend(releases.filter_map(|release| match to_match(release) {
        Ok(matched) => Some(matched),
        Err(e) => {
            debug!("Ignoring search hit: {}", e);
            None
        }
    }));
    Ok(matches)
}

/// Convert a single search hit
pub fn to_match(release: dto::Release) -> Result<ReleaseMatch, LookupError> {
    let artist = release
        .artist_credit
        .first()
        .map(|credit| credit.artist.name.clone())
        .ok_or_else(|| {
            LookupError::InvalidResponse(format!("release {} has no artist credit", release.id))
        })?;

    let year = release.date.as_deref().map(year_from_date).unwrap_or_default();

    Ok(ReleaseMatch {
        release_id: release.id,
        artist,
        album: release.title,
        year,
        score: release.score,
    })
}

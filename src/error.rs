//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`, while the
//! binary entry point uses `anyhow` for convenient error propagation.
//!
//! # Design
//!
//! - [`Error`]: the early-exit conditions of the folder workflow
//! - Module-specific errors ([`LookupError`], [`MetadataError`]) for detailed handling
//!
//! Per-file tagging problems never become an [`Error`]; they are recorded as
//! [`crate::tagger::FileOutcome`] values instead.
//!
//! [`LookupError`]: crate::enrichment::LookupError
//! [`MetadataError`]: crate::metadata::MetadataError

use std::path::PathBuf;

use crate::enrichment::SearchQuery;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Conditions that abort the processing of a folder.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The path does not exist or is not a directory
    #[error("'{}' is not a valid folder", .0.display())]
    InvalidFolder(PathBuf),

    /// Reading the directory listing failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The folder holds no file with a supported extension
    #[error("No supported audio files found in '{0}'")]
    NoAudioFiles(String),

    /// The MusicBrainz search itself failed
    #[error("MusicBrainz search failed: {0}")]
    Lookup(#[from] crate::enrichment::LookupError),

    /// The search succeeded but produced no usable release
    #[error("No matches found on MusicBrainz for '{0}'")]
    NoMatch(SearchQuery),
}

impl Error {
    /// Create an invalid folder error.
    pub fn invalid_folder(path: impl Into<PathBuf>) -> Self {
        Self::InvalidFolder(path.into())
    }
}

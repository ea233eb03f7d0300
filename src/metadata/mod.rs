//! Audio file tag writing.
//!
//! Uses the lofty crate for format-independent metadata access.
//! Supports MP3 (ID3v2), FLAC, OGG Vorbis, M4A, WAV and ADTS AAC.
//!
//! # Features
//! - Open a file as a generic tag container, or learn that it is unsupported
//! - Apply a fixed [`TagSet`] (artist, album, date) and save in place

use lofty::config::WriteOptions;
use lofty::file::TaggedFileExt;
use lofty::probe::Probe;
use lofty::tag::{Accessor, ItemKey, Tag, TagExt};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::enrichment::ReleaseMatch;

/// The fields written to every file of an album
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    pub artist: Option<String>,
    pub album: Option<String>,
    /// Only set when a year could be derived
    pub year: Option<String>,
}

impl TagSet {
    /// Tags for a matched release; an empty year leaves the date unset.
    pub fn from_match(release: &ReleaseMatch) -> Self {
        Self {
            artist: Some(release.artist.clone()),
            album: Some(release.album.clone()),
            year: Some(release.year.clone()).filter(|y| !y.is_empty()),
        }
    }

    /// Write every present field into `container`. Returns the number of fields set.
    pub fn apply_to<C: TagContainer>(&self, container: &mut C) -> usize {
        let mut applied = 0;
        if let Some(ref artist) = self.artist {
            container.set_artist(artist);
            applied += 1;
        }
        if let Some(ref album) = self.album {
            container.set_album(album);
            applied += 1;
        }
        if let Some(ref year) = self.year {
            container.set_date(year);
            applied += 1;
        }
        applied
    }
}

/// Result of opening a file through a [`TagBackend`]
#[derive(Debug)]
pub enum Opened<C> {
    /// The file was parsed and its tags can be edited
    Container(C),
    /// The file could not be read as a supported audio format
    Unsupported { reason: String },
}

/// Opens audio files as editable tag containers.
pub trait TagBackend {
    type Container: TagContainer;

    /// Open `path`. Any failure to read or parse the file is reported as
    /// [`Opened::Unsupported`].
    fn open(&self, path: &Path) -> Opened<Self::Container>;
}

/// An opened file's embedded tags.
///
/// Setters only touch the in-memory tag; nothing reaches disk until
/// [`save`](TagContainer::save).
pub trait TagContainer {
    fn set_artist(&mut self, artist: &str);
    fn set_album(&mut self, album: &str);
    fn set_date(&mut self, date: &str);

    /// Persist the changes back into the file and release it.
    fn save(self) -> Result<(), MetadataError>;
}

/// Errors from reading or writing tags
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("Failed to read tags from {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("Failed to write tags to {path}: {message}")]
    Write { path: PathBuf, message: String },
}

impl MetadataError {
    pub fn read(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Read {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn write(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Write {
            path: path.into(),
            message: message.into(),
        }
    }
}

// ============================================================================
// lofty implementation
// ============================================================================

/// [`TagBackend`] backed by lofty
#[derive(Debug, Clone, Copy, Default)]
pub struct LoftyBackend;

/// A file's primary tag, detached from the file until saved
pub struct LoftyContainer {
    path: PathBuf,
    tag: Tag,
}

// lofty's `Tag` has no Debug impl
impl fmt::Debug for LoftyContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoftyContainer")
            .field("path", &self.path)
            .field("tag_type", &self.tag.tag_type())
            .finish_non_exhaustive()
    }
}

impl TagBackend for LoftyBackend {
    type Container = LoftyContainer;

    fn open(&self, path: &Path) -> Opened<LoftyContainer> {
        match read_primary_tag(path) {
            Ok(tag) => Opened::Container(LoftyContainer {
                path: path.to_path_buf(),
                tag,
            }),
            Err(e) => Opened::Unsupported {
                reason: e.to_string(),
            },
        }
    }
}

impl TagContainer for LoftyContainer {
    fn set_artist(&mut self, artist: &str) {
        self.tag.set_artist(artist.to_string());
    }

    fn set_album(&mut self, album: &str) {
        self.tag.set_album(album.to_string());
    }

    fn set_date(&mut self, date: &str) {
        self.tag.insert_text(ItemKey::RecordingDate, date.to_string());
    }

    fn save(self) -> Result<(), MetadataError> {
        self.tag
            .save_to_path(&self.path, WriteOptions::default())
            .map_err(|e| MetadataError::write(&self.path, e.to_string()))
    }
}

/// Detect the file type by content and take its primary tag, or a fresh empty one
/// of the format's preferred type if the file has none yet.
fn read_primary_tag(path: &Path) -> Result<Tag, MetadataError> {
    let mut tagged_file = Probe::open(path)
        .and_then(|opened| opened.guess_file_type().map_err(Into::into))
        .and_then(|detected| detected.read())
        .map_err(|e| MetadataError::read(path, e.to_string()))?;

    let tag_type = tagged_file.primary_tag_type();
    Ok(tagged_file
        .remove(tag_type)
        .unwrap_or_else(|| Tag::new(tag_type)))
}

/// Read artist, album and date back from the file's primary tag
#[cfg(test)]
pub fn read_tags(path: &Path) -> Result<TagSet, MetadataError> {
    let tag = read_primary_tag(path)?;
    Ok(TagSet {
        artist: tag.artist().map(|s| s.to_string()),
        album: tag.album().map(|s| s.to_string()),
        year: tag.get_string(ItemKey::RecordingDate).map(String::from),
    })
}

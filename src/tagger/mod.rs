//! Folder tagging workflow.
//!
//! Guesses the album from a folder name, looks it up once on MusicBrainz and
//! writes artist, album and date into every supported audio file:
//!
//! ```text
//! validate folder → collect files → build query → search → first match → tag files
//! ```
//!
//! Four conditions abort the folder: an invalid path, no audio files, a
//! failed search and no match. Problems with individual files are recorded
//! per file and never change the overall result.

use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::enrichment::{ReleaseMatch, ReleaseSearchApi, SearchQuery};
use crate::error::{Error, Result};
use crate::metadata::{Opened, TagBackend, TagContainer, TagSet};
use crate::scanner;

/// Only the top search hit is ever used
pub const SEARCH_LIMIT: u32 = 1;

/// Options for a single folder run
#[derive(Debug, Clone, Copy, Default)]
pub struct TagOptions {
    /// Look up and report, but do not touch any file
    pub dry_run: bool,
    /// Reject the top hit when its search score is lower
    pub min_score: Option<u8>,
}

/// What happened to one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Tagged,
    SkippedUnsupported(String),
    WriteFailed(String),
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

/// Per-file results of a tagging pass
#[derive(Debug, Clone, Default)]
pub struct TagSummary {
    pub files: Vec<FileReport>,
}

impl TagSummary {
    pub fn tagged(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Tagged))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::SkippedUnsupported(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::WriteFailed(_)))
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.files.iter().filter(|f| pred(&f.outcome)).count()
    }
}

/// Successful end states of a folder run
#[derive(Debug, Clone)]
pub enum FolderReport {
    /// Dry run: the match that would have been written
    Previewed {
        release: ReleaseMatch,
        files: Vec<PathBuf>,
    },
    /// Tags were applied (possibly with per-file failures)
    Tagged {
        release: ReleaseMatch,
        summary: TagSummary,
    },
}

impl FolderReport {
    pub fn release(&self) -> &ReleaseMatch {
        match self {
            Self::Previewed { release, .. } | Self::Tagged { release, .. } => release,
        }
    }
}

/// Run the workflow for `folder` and reduce it to a success flag.
///
/// Messages for the user are printed along the way; nothing is returned
/// besides the flag.
pub async fn tag_folder<S, B>(folder: &Path, options: TagOptions, search: &S, backend: &B) -> bool
where
    S: ReleaseSearchApi + ?Sized,
    B: TagBackend,
{
    let report = match run_folder(folder, options, search, backend).await {
        Ok(report) => report,
        Err(e) => {
            error!(folder = %folder.display(), "{}", e);
            eprintln!("✗ {}", e);
            return false;
        }
    };

    debug!(release_id = %report.release().release_id, "Finished {:?}", folder);
    match report {
        FolderReport::Previewed { files, .. } => {
            println!("💡 Dry run mode: no tags will be written to {} file(s).", files.len());
            true
        }
        FolderReport::Tagged { summary, .. } => {
            println!(
                "\nDone: {} tagged, {} skipped, {} failed.",
                summary.tagged(),
                summary.skipped(),
                summary.failed()
            );
            true
        }
    }
}

/// Run the workflow for `folder`, returning the report or the early exit that
/// stopped it.
pub async fn run_folder<S, B>(
    folder: &Path,
    options: TagOptions,
    search: &S,
    backend: &B,
) -> Result<FolderReport>
where
    S: ReleaseSearchApi + ?Sized,
    B: TagBackend,
{
    let files = scanner::collect_audio_files(folder)?;
    if files.is_empty() {
        let name = folder
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| folder.display().to_string());
        return Err(Error::NoAudioFiles(name));
    }
    debug!("Found {} audio file(s) in {:?}", files.len(), folder);

    let query = SearchQuery::from_folder(folder);
    println!("🔍 Searching MusicBrainz for: '{}'", query);

    let release = find_release(&query, options.min_score, search).await?;
    println!(
        "✓ Match found: {} – {} ({})",
        release.artist, release.album, release.year
    );
    info!(
        release_id = %release.release_id,
        score = release.score,
        "Matched '{}' to {} - {}",
        query,
        release.artist,
        release.album
    );

    if options.dry_run {
        return Ok(FolderReport::Previewed { release, files });
    }

    let tags = TagSet::from_match(&release);
    let summary = TagSummary {
        files: files
            .into_iter()
            .map(|path| {
                let outcome = tag_file(backend, &path, &tags);
                FileReport { path, outcome }
            })
            .collect(),
    };

    Ok(FolderReport::Tagged { release, summary })
}

/// Issue the single search and pick the first candidate.
async fn find_release<S>(
    query: &SearchQuery,
    min_score: Option<u8>,
    search: &S,
) -> Result<ReleaseMatch>
where
    S: ReleaseSearchApi + ?Sized,
{
    let candidates = search.search_releases(query, SEARCH_LIMIT).await?;

    let Some(release) = candidates.into_iter().next() else {
        return Err(Error::NoMatch(query.clone()));
    };

    if !release.meets_score(min_score) {
        warn!(
            "Top match {} - {} scored {}, below the minimum of {}",
            release.artist,
            release.album,
            release.score,
            min_score.unwrap_or_default()
        );
        return Err(Error::NoMatch(query.clone()));
    }

    Ok(release)
}

/// Open, tag and save one file. The container is dropped before returning.
pub fn tag_file<B: TagBackend>(backend: &B, path: &Path, tags: &TagSet) -> FileOutcome {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let mut container = match backend.open(path) {
        Opened::Container(container) => container,
        Opened::Unsupported { reason } => {
            warn!("Skipping {:?}: {}", path, reason);
            println!("⚠️  Unsupported or unreadable file: {}", name);
            return FileOutcome::SkippedUnsupported(reason);
        }
    };

    tags.apply_to(&mut container);
    match container.save() {
        Ok(()) => {
            println!("✔️  Tagged: {}", name);
            FileOutcome::Tagged
        }
        Err(e) => {
            warn!("{}", e);
            println!("⚠️  Failed to tag {}: {}", name, e);
            FileOutcome::WriteFailed(e.to_string())
        }
    }
}

//! Audio file discovery inside a single album folder.
//!
//! Only direct entries are considered; subfolders are never traversed.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Extensions recognised as audio, compared case-insensitively
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["mp3", "flac", "wav", "ogg", "m4a", "aac"];

/// Check if a path has a supported audio extension
pub fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

/// Collect the supported audio files directly inside `folder`, sorted by name.
///
/// Fails with [`Error::InvalidFolder`] if `folder` is missing or not a
/// directory. An empty result is not an error here.
pub fn collect_audio_files(folder: &Path) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(Error::invalid_folder(folder));
    }

    let mut files: Vec<PathBuf> = std::fs::read_dir(folder)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        // follows symlinks, so linked tracks count as files
        .filter(|p| p.is_file() && is_audio_file(p))
        .collect();

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_is_audio_file() {
        for name in [
            "a.mp3", "a.flac", "a.wav", "a.ogg", "a.m4a", "a.aac", "B.MP3", "c.FlAc",
        ] {
            assert!(is_audio_file(Path::new(name)), "{} should be audio", name);
        }
        for name in ["cover.jpg", "notes.txt", "a.opus", "a.wma", "mp3", "a.mp3.bak"] {
            assert!(!is_audio_file(Path::new(name)), "{} should not be audio", name);
        }
    }

    #[test]
    fn test_collect_audio_files() {
        let dir = tempdir().unwrap();
        let root = dir.path();

        File::create(root.join("02 - second.mp3")).unwrap();
        File::create(root.join("01 - first.flac")).unwrap();
        File::create(root.join("UPPERCASE.OGG")).unwrap();
        File::create(root.join("notes.txt")).unwrap();
        File::create(root.join("cover.png")).unwrap();

        // Subfolders are not traversed
        let subdir = root.join("Disc 2");
        std::fs::create_dir(&subdir).unwrap();
        File::create(subdir.join("track.wav")).unwrap();

        let files = collect_audio_files(root).unwrap();

        let names: Vec<String> = files
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(String::from))
            .collect();
        assert_eq!(names, vec!["01 - first.flac", "02 - second.mp3", "UPPERCASE.OGG"]);
    }

    #[test]
    fn test_directory_named_like_audio_is_skipped() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("bonus.mp3")).unwrap();

        assert!(collect_audio_files(dir.path()).unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_track_is_collected() {
        let dir = tempdir().unwrap();
        let store = dir.path().join("store");
        let album = dir.path().join("Album");
        std::fs::create_dir(&store).unwrap();
        std::fs::create_dir(&album).unwrap();
        File::create(store.join("real.mp3")).unwrap();
        std::os::unix::fs::symlink(store.join("real.mp3"), album.join("01.mp3")).unwrap();
        // dangling links are not files
        std::os::unix::fs::symlink(store.join("gone.mp3"), album.join("02.mp3")).unwrap();

        let files = collect_audio_files(&album).unwrap();

        assert_eq!(files, vec![album.join("01.mp3")]);
    }

    #[test]
    fn test_missing_folder_is_invalid() {
        let dir = tempdir().unwrap();
        let result = collect_audio_files(&dir.path().join("does-not-exist"));
        assert!(matches!(result, Err(Error::InvalidFolder(_))));
    }

    #[test]
    fn test_file_is_not_a_folder() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("song.mp3");
        File::create(&file).unwrap();

        let result = collect_audio_files(&file);
        assert!(matches!(result, Err(Error::InvalidFolder(_))));
    }
}

//! Test utilities and fixtures for fix-my-music tests.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::album_folder;
//!
//! let (dir, folder) = album_folder("Some_Album-1999", &["01.mp3", "cover.jpg"]);
//! // folder is dir/Some_Album-1999 with the listed (empty) files
//! ```

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::enrichment::ReleaseMatch;

/// Creates a temporary album folder named `name` containing empty files.
///
/// Keep the returned `TempDir` alive for the duration of your test.
pub fn album_folder(name: &str, files: &[&str]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let folder = dir.path().join(name);
    std::fs::create_dir(&folder).expect("Failed to create album folder");
    for file in files {
        std::fs::File::create(folder.join(file)).expect("Failed to create file");
    }
    (dir, folder)
}

/// Creates a release match with a perfect score.
pub fn mock_release(artist: &str, album: &str, year: &str) -> ReleaseMatch {
    ReleaseMatch {
        release_id: "mock-release-id".to_string(),
        artist: artist.to_string(),
        album: album.to_string(),
        year: year.to_string(),
        score: 100,
    }
}

/// Writes a short silent 16-bit mono PCM WAV file to `path`.
pub fn write_wav(path: &Path) {
    const SAMPLE_RATE: u32 = 8000;
    let data = vec![0u8; 1600];

    let mut bytes = Vec::with_capacity(44 + data.len());
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data.len() as u32).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
    bytes.extend_from_slice(&1u16.to_le_bytes()); // channels
    bytes.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    bytes.extend_from_slice(&(SAMPLE_RATE * 2).to_le_bytes()); // byte rate
    bytes.extend_from_slice(&2u16.to_le_bytes()); // block align
    bytes.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&(data.len() as u32).to_le_bytes());
    bytes.extend_from_slice(&data);

    std::fs::write(path, bytes).expect("Failed to write WAV file");
}

/// Writes ten silent MPEG-1 Layer III frames (128 kbps, 44.1 kHz) to `path`.
pub fn write_mp3(path: &Path) {
    // sync + MPEG-1 Layer III no CRC, 128 kbps / 44.1 kHz, joint stereo
    const HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x64];
    const FRAME_LEN: usize = 417;

    let mut bytes = Vec::with_capacity(FRAME_LEN * 10);
    for _ in 0..10 {
        bytes.extend_from_slice(&HEADER);
        bytes.resize(bytes.len() + FRAME_LEN - HEADER.len(), 0);
    }

    std::fs::write(path, bytes).expect("Failed to write MP3 file");
}

/// Writes a FLAC stream holding only a STREAMINFO block (16-bit stereo, 44.1 kHz).
pub fn write_flac(path: &Path) {
    let mut bytes = Vec::with_capacity(4 + 4 + 34);
    bytes.extend_from_slice(b"fLaC");
    // last-block flag + type 0 (STREAMINFO), 34 byte body
    bytes.extend_from_slice(&[0x80, 0x00, 0x00, 0x22]);
    bytes.extend_from_slice(&4096u16.to_be_bytes()); // min block size
    bytes.extend_from_slice(&4096u16.to_be_bytes()); // max block size
    bytes.extend_from_slice(&[0; 3]); // min frame size (unknown)
    bytes.extend_from_slice(&[0; 3]); // max frame size (unknown)
    // sample rate (20 bits) | channels - 1 (3) | bits per sample - 1 (5) | total samples (36)
    let packed: u64 = (44_100u64 << 44) | (1 << 41) | (15 << 36);
    bytes.extend_from_slice(&packed.to_be_bytes());
    bytes.extend_from_slice(&[0; 16]); // MD5 of audio (unset)

    std::fs::write(path, bytes).expect("Failed to write FLAC file");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_album_folder_creates_files() {
        let (_dir, folder) = album_folder("Test_Album", &["a.mp3", "b.txt"]);
        assert!(folder.is_dir());
        assert!(folder.join("a.mp3").is_file());
        assert!(folder.join("b.txt").is_file());
    }

    #[test]
    fn test_write_wav_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("silence.wav");
        write_wav(&path);

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(bytes.len(), 44 + 1600);
    }

    #[test]
    fn test_write_flac_streaminfo() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("silence.flac");
        write_flac(&path);

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..4], b"fLaC");
        assert_eq!(bytes.len(), 4 + 4 + 34);
        // 44100 Hz in the top 20 bits of the packed field
        assert_eq!(&bytes[18..21], &[0x0A, 0xC4, 0x42]);
    }
}

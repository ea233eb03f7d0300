//! Command-line interface for fix-my-music.
//!
//! Parses arguments, resolves configuration, wires the real MusicBrainz
//! client and lofty backend into the tagging workflow and reports whether
//! the folder was handled.

use clap::Parser;
use std::path::PathBuf;
use tokio::runtime::Builder;

use crate::config::{self, Config};
use crate::enrichment::MusicBrainzClient;
use crate::metadata::LoftyBackend;
use crate::tagger::{self, TagOptions};

/// Automatically tag audio files in a folder using MusicBrainz.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the folder with audio files
    pub folder: PathBuf,

    /// Preview only, do not write tags
    #[arg(long)]
    pub dry_run: bool,

    /// Config file (default: the OS config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Reject the top MusicBrainz hit if its score (0-100) is lower
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_score: Option<u8>,

    /// Show debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    pub fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load(),
        };
        if self.min_score.is_some() {
            config.tagging.min_score = self.min_score;
        }
        Ok(config)
    }
}

/// Run the tagging workflow for the parsed arguments.
///
/// Returns `Ok(false)` when the folder could not be tagged; `Err` is reserved
/// for setup failures such as an unreadable config file.
pub fn run(cli: &Cli) -> anyhow::Result<bool> {
    let config = cli.resolve_config()?;
    let client = MusicBrainzClient::new(&config.musicbrainz)?;
    let options = TagOptions {
        dry_run: cli.dry_run,
        min_score: config.tagging.min_score,
    };

    let rt = Builder::new_current_thread().enable_all().build()?;
    Ok(rt.block_on(tagger::tag_folder(
        &cli.folder,
        options,
        &client,
        &LoftyBackend,
    )))
}

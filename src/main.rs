//! Fix My Music - tags an album folder using MusicBrainz.
//!
//! Guesses the album from the folder name, looks it up on MusicBrainz and
//! writes artist, album and year into every supported audio file in the
//! folder. Exits with status 1 when the folder could not be tagged.

pub mod cli;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod metadata;
pub mod scanner;
pub mod tagger;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<ExitCode> {
    let args = cli::Cli::parse();

    // Initialize logging
    let level = if args.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();

    if cli::run(&args)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

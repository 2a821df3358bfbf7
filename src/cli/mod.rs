//! CLI module for the swiftnote application
//!
//! This module handles the command-line interface for interacting with the
//! note store.

use std::path::PathBuf;

use clap::Parser;

use crate::Commands;

mod app;

pub use app::App;

/// Main CLI application arguments and command structure
#[derive(Parser)]
#[clap(
    author,
    version,
    about = "SwiftNote, a local note-taking application"
)]
pub struct Cli {
    /// Path to the configuration file
    #[clap(short = 'c', long, value_parser)]
    pub config: Option<PathBuf>,

    /// Path to the notes storage file
    #[clap(long, value_parser)]
    pub notes_file: Option<PathBuf>,

    /// Verbose output mode
    #[clap(short, long)]
    pub verbose: bool,

    /// Subcommands for the swiftnote application
    #[clap(subcommand)]
    pub command: Commands,
}

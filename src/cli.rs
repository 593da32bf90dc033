use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Stamp - asset fingerprinting and manifest tool
#[derive(Parser, Debug)]
#[command(name = "stamp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fingerprint assets and write the manifest
    Run {
        /// Source directory containing original assets
        #[arg(short, long, default_value = "assets")]
        source: PathBuf,

        /// Output directory for fingerprinted files and the manifest
        #[arg(short, long, default_value = "dist")]
        out: PathBuf,

        /// Manifest path, relative to the output directory
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Merge with a previously persisted manifest
        #[arg(long)]
        merge: bool,

        /// Dry run - show what would be done
        #[arg(long)]
        dry_run: bool,
    },

    /// Resolve a logical path against an existing manifest
    Resolve {
        /// Logical asset path (e.g. "css/app.css")
        logical_path: String,

        /// Manifest file to read
        #[arg(long, default_value = "dist/manifest.json")]
        manifest: PathBuf,
    },
}

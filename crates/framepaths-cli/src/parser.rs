//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Inspect and create the directories an application stores its data in.
#[derive(Parser)]
#[command(name = "framepaths")]
#[command(about = "Resolve and create platform application directories")]
#[command(version)]
pub struct Cli {
    /// Use this base directory instead of one next to the executable
    #[arg(long = "base-dir", global = true, env = "FRAMEPATHS_BASE_DIR")]
    pub base_dir: Option<PathBuf>,

    /// Directory name created next to the executable
    #[arg(long = "app-name", global = true, env = "FRAMEPATHS_APP_NAME")]
    pub app_name: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

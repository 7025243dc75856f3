//! Available subcommands.

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Show the resolved directory for every role
    Paths {
        /// Print JSON instead of `key = value` lines
        #[arg(long)]
        json: bool,
        /// Also verify that every directory is writable
        #[arg(long)]
        check: bool,
    },

    /// Create every missing segment of the given paths
    Ensure {
        /// Paths to ensure
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Show the portable encoding of a path
    Encode {
        /// Path to encode
        path: PathBuf,
    },
}

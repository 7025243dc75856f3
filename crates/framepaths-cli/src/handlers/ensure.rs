//! Ensure command handler.

use std::io::Write;
use std::path::PathBuf;

use framepaths_core::ensure_path_exists;

use crate::error::CliError;

/// Ensure each path in turn, stopping at the first failure.
pub fn execute(targets: &[PathBuf], out: &mut dyn Write) -> Result<(), CliError> {
    for target in targets {
        ensure_path_exists(target)?;
        writeln!(out, "{}", target.display())?;
    }
    Ok(())
}

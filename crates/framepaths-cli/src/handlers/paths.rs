//! Paths command handler.
//!
//! Displays all resolved paths for diagnostics and debugging.

use std::io::Write;

use framepaths_core::AppPaths;
use framepaths_core::paths::verify_writable;
use tracing::debug;

use crate::error::CliError;

/// Execute the paths command.
///
/// Resolves (and creates) every role directory, then prints them as
/// `key = value` lines or JSON. With `check`, each directory must also
/// accept a test file. Resources are skipped there since they are read-only.
pub fn execute(
    paths: &AppPaths,
    json: bool,
    check: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let resolved = paths.resolve_all()?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&resolved)?)?;
    } else {
        writeln!(out, "{resolved}")?;
    }

    if check {
        for (role, dir) in resolved.data_roles() {
            debug!(role = %role, path = %dir.display(), "checking writability");
            verify_writable(dir)?;
        }
        writeln!(out, "all data directories are writable")?;
    }

    Ok(())
}

//! Location of the running executable.
//!
//! Everything else in this module is anchored on the directory returned here.

use std::env;
use std::path::PathBuf;

use tracing::debug;

/// Directory containing the currently running executable.
///
/// `current_exe` does the per-OS introspection (module file name on Windows,
/// `/proc/self/exe` on Linux and FreeBSD, `_NSGetExecutablePath` on macOS).
/// When that fails, the current working directory is used instead, and `.`
/// when even that is unavailable. This never fails.
pub fn executable_dir() -> PathBuf {
    match env::current_exe() {
        Ok(exe) => {
            if let Some(parent) = exe.parent() {
                return parent.to_path_buf();
            }
            debug!(exe = %exe.display(), "executable path has no parent");
        }
        Err(e) => debug!(error = %e, "cannot determine executable path"),
    }

    env::current_dir().unwrap_or_else(|e| {
        debug!(error = %e, "cannot determine current directory, using '.'");
        PathBuf::from(".")
    })
}

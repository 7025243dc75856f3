//! Detection of packaged-application resource directories.
//!
//! Each probe returns a candidate only when it exists on disk, so callers can
//! chain them with `or_else` and fall back to the executable directory.

use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Set by the AppImage runtime to the path of the running image.
pub const APPIMAGE_ENV: &str = "APPIMAGE";

/// Set by the AppImage runtime to the mount point of the image contents.
pub const APPDIR_ENV: &str = "APPDIR";

/// Shared data directory inside a Flatpak sandbox.
pub const FLATPAK_SHARE_DIR: &str = "/app/share";

/// `$APPDIR/usr/share` when running inside an AppImage.
///
/// Requires `APPIMAGE` to be set. An unset `APPDIR` skips the candidate.
pub fn appimage_resource_dir() -> Option<PathBuf> {
    env::var_os(APPIMAGE_ENV)?;

    let Some(appdir) = env::var_os(APPDIR_ENV) else {
        debug!("APPIMAGE is set but APPDIR is not");
        return None;
    };

    existing(PathBuf::from(appdir).join("usr").join("share"))
}

/// The Flatpak share directory, if `root` exists.
pub fn flatpak_resource_dir(root: &Path) -> Option<PathBuf> {
    existing(root.to_path_buf())
}

/// `Contents/Resources` of the `.app` bundle the executable lives in.
///
/// Expects the usual `Name.app/Contents/MacOS/<exe>` layout.
pub fn bundle_resource_dir(exe_dir: &Path) -> Option<PathBuf> {
    if exe_dir.file_name()? != "MacOS" {
        return None;
    }
    let contents = exe_dir.parent()?;
    if contents.file_name()? != "Contents" {
        return None;
    }
    let bundle = contents.parent()?;
    if bundle.extension()? != "app" {
        return None;
    }

    existing(contents.join("Resources"))
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    match path.try_exists() {
        Ok(true) => Some(path),
        Ok(false) => None,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "cannot probe resource candidate");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::test_utils::{ENV_LOCK, EnvVarGuard};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn appimage_dir_requires_marker() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("usr/share")).unwrap();

        let _marker = EnvVarGuard::unset(APPIMAGE_ENV);
        let _appdir = EnvVarGuard::set(APPDIR_ENV, temp.path().to_string_lossy().as_ref());

        assert_eq!(appimage_resource_dir(), None);
    }

    #[test]
    fn appimage_dir_found_when_share_exists() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = tempdir().unwrap();
        let share = temp.path().join("usr").join("share");
        fs::create_dir_all(&share).unwrap();

        let _marker = EnvVarGuard::set(APPIMAGE_ENV, "/tmp/Parrot.AppImage");
        let _appdir = EnvVarGuard::set(APPDIR_ENV, temp.path().to_string_lossy().as_ref());

        assert_eq!(appimage_resource_dir(), Some(share));
    }

    #[test]
    fn appimage_dir_skipped_without_share() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = tempdir().unwrap();

        let _marker = EnvVarGuard::set(APPIMAGE_ENV, "/tmp/Parrot.AppImage");
        let _appdir = EnvVarGuard::set(APPDIR_ENV, temp.path().to_string_lossy().as_ref());

        assert_eq!(appimage_resource_dir(), None);
    }

    #[test]
    fn appimage_dir_skipped_without_appdir() {
        let _guard = ENV_LOCK.lock().unwrap();
        let _marker = EnvVarGuard::set(APPIMAGE_ENV, "/tmp/Parrot.AppImage");
        let _appdir = EnvVarGuard::unset(APPDIR_ENV);

        assert_eq!(appimage_resource_dir(), None);
    }

    #[test]
    fn flatpak_dir_only_when_present() {
        let temp = tempdir().unwrap();
        assert_eq!(
            flatpak_resource_dir(temp.path()),
            Some(temp.path().to_path_buf())
        );
        assert_eq!(flatpak_resource_dir(&temp.path().join("missing")), None);
    }

    #[test]
    fn bundle_resources_detected_from_layout() {
        let temp = tempdir().unwrap();
        let contents = temp.path().join("Parrot.app").join("Contents");
        fs::create_dir_all(contents.join("MacOS")).unwrap();
        fs::create_dir_all(contents.join("Resources")).unwrap();

        assert_eq!(
            bundle_resource_dir(&contents.join("MacOS")),
            Some(contents.join("Resources"))
        );
    }

    #[test]
    fn bundle_resources_ignored_outside_bundle() {
        let temp = tempdir().unwrap();
        let exe_dir = temp.path().join("bin");
        fs::create_dir_all(&exe_dir).unwrap();
        assert_eq!(bundle_resource_dir(&exe_dir), None);

        let not_app = temp.path().join("Parrot").join("Contents").join("MacOS");
        fs::create_dir_all(&not_app).unwrap();
        fs::create_dir_all(temp.path().join("Parrot/Contents/Resources")).unwrap();
        assert_eq!(bundle_resource_dir(&not_app), None);
    }
}

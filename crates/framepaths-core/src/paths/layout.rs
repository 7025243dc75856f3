//! The application directory layout.
//!
//! [`AppPaths`] ties a [`PathConfig`] to a [`Platform`] and computes the base
//! directory once. The free functions at the bottom operate on a process-wide
//! instance built from the environment on first use.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing::{debug, warn};

use super::config::PathConfig;
use super::ensure::ensure_path_exists;
use super::error::PathError;
use super::platform::{Platform, Role, current_platform};

/// Resolved base directory plus the platform rules for each role.
#[derive(Debug)]
pub struct AppPaths {
    platform: Box<dyn Platform>,
    exe_dir: PathBuf,
    base_dir: PathBuf,
}

impl AppPaths {
    /// Resolve the layout for the current target.
    pub fn new(config: PathConfig) -> Self {
        let platform = current_platform(&config.host_roots);
        Self::with_platform(config, platform)
    }

    /// Resolve the layout with an explicit platform strategy.
    ///
    /// The base directory is created here on a best-effort basis. Failure is
    /// only logged, since every role resolver ensures its own path again.
    pub fn with_platform(config: PathConfig, platform: Box<dyn Platform>) -> Self {
        let exe_dir = platform.executable_dir();
        let base_dir = config
            .base_dir
            .clone()
            .unwrap_or_else(|| platform.base_dir(&exe_dir, &config.app_name));

        debug!(
            platform = platform.name(),
            exe_dir = %exe_dir.display(),
            base_dir = %base_dir.display(),
            "resolved application base directory"
        );

        if let Err(e) = ensure_path_exists(&base_dir) {
            warn!(path = %base_dir.display(), error = %e, "could not create base directory");
        }

        Self {
            platform,
            exe_dir,
            base_dir,
        }
    }

    pub fn platform(&self) -> &dyn Platform {
        self.platform.as_ref()
    }

    pub fn executable_dir(&self) -> &Path {
        &self.exe_dir
    }

    /// Root under which all application data is namespaced.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Directory for `role`, without touching the disk.
    pub fn role_dir(&self, role: Role) -> PathBuf {
        self.platform.role_dir(role, &self.base_dir, &self.exe_dir)
    }

    /// Directory for `role`, created if missing.
    ///
    /// Segment creation failures inside the walk are only logged, so the
    /// result is checked once more here. A path that is still missing, or is
    /// a regular file, is an error. An unreadable path is presumed present,
    /// the same way the walk treats it.
    pub fn role_path(&self, role: Role) -> Result<PathBuf, PathError> {
        let path = self.role_dir(role);
        ensure_path_exists(&path)?;

        match fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => Ok(path),
            Ok(_) => Err(PathError::NotADirectory(path)),
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                debug!(path = %path.display(), "no access to role directory, assuming it exists");
                Ok(path)
            }
            Err(e) => Err(PathError::EnsureFailed { path, source: e }),
        }
    }

    pub fn roaming_data_path(&self) -> Result<PathBuf, PathError> {
        self.role_path(Role::Roaming)
    }

    /// `AppData/Local`, the fallback for data that fits no other role.
    pub fn local_data_path(&self) -> Result<PathBuf, PathError> {
        self.role_path(Role::LocalData)
    }

    pub fn personal_data_path(&self) -> Result<PathBuf, PathError> {
        self.role_path(Role::Personal)
    }

    pub fn cache_path(&self) -> Result<PathBuf, PathError> {
        self.role_path(Role::Cache)
    }

    pub fn app_resources_path(&self) -> Result<PathBuf, PathError> {
        self.role_path(Role::AppResources)
    }
}

static DEFAULT_PATHS: OnceLock<AppPaths> = OnceLock::new();

/// Process-wide layout, built from [`PathConfig::from_env`] on first use.
///
/// Concurrent first calls are safe; all callers see the same instance.
pub fn default_paths() -> &'static AppPaths {
    DEFAULT_PATHS.get_or_init(|| AppPaths::new(PathConfig::from_env()))
}

/// Install `paths` as the process-wide layout.
///
/// Must run before anything calls [`default_paths`]. Returns the rejected
/// value if the layout was already initialized.
pub fn init_default_paths(paths: AppPaths) -> Result<(), AppPaths> {
    DEFAULT_PATHS.set(paths)
}

/// Base directory of the process-wide layout.
pub fn base_directory() -> PathBuf {
    default_paths().base_dir().to_path_buf()
}

/// Roaming configuration directory, created if missing.
pub fn roaming_data_path() -> Result<PathBuf, PathError> {
    default_paths().roaming_data_path()
}

/// Local application data directory, created if missing.
pub fn local_data_path() -> Result<PathBuf, PathError> {
    default_paths().local_data_path()
}

/// Personal documents directory, created if missing.
pub fn personal_data_path() -> Result<PathBuf, PathError> {
    default_paths().personal_data_path()
}

/// Cache directory, created if missing.
pub fn cache_path() -> Result<PathBuf, PathError> {
    default_paths().cache_path()
}

/// Bundled resources directory.
pub fn app_resources_path() -> Result<PathBuf, PathError> {
    default_paths().app_resources_path()
}

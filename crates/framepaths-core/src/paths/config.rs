//! Configuration for path resolution.
//!
//! A [`PathConfig`] is built once at startup, either explicitly or from the
//! environment, and handed to [`AppPaths`](super::AppPaths). Nothing reads the
//! environment again after that.

use std::env;
use std::path::PathBuf;

/// Name of the directory created next to the executable for application data.
pub const DEFAULT_APP_NAME: &str = "TeknoParrot";

/// Environment variable that overrides the base directory.
pub const BASE_DIR_ENV: &str = "FRAMEPATHS_BASE_DIR";

/// Environment variable that overrides the application directory name.
pub const APP_NAME_ENV: &str = "FRAMEPATHS_APP_NAME";

/// Storage roots handed over by a mobile hosting runtime.
///
/// On Android the Java side owns the only writable locations
/// (`Context.getFilesDir()` and `Context.getCacheDir()`), so they have to be
/// passed in. Values are stored as given, without validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostRoots {
    /// App-private files directory; becomes the base directory when set.
    pub files_dir: Option<PathBuf>,
    /// App-private cache directory; used for the cache role when set.
    pub cache_dir: Option<PathBuf>,
}

impl HostRoots {
    /// Record the host's files directory.
    pub fn set_files_dir_path(&mut self, files_dir: &str) {
        self.files_dir = Some(PathBuf::from(files_dir));
    }

    /// Record the host's cache directory.
    pub fn set_cache_dir_path(&mut self, cache_dir: &str) {
        self.cache_dir = Some(PathBuf::from(cache_dir));
    }

    /// Whether any root has been injected.
    pub fn is_empty(&self) -> bool {
        self.files_dir.is_none() && self.cache_dir.is_none()
    }
}

/// Inputs for resolving the application layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathConfig {
    /// Directory name appended to the executable directory.
    pub app_name: String,
    /// Explicit base directory, bypassing the executable-relative default.
    pub base_dir: Option<PathBuf>,
    /// Roots supplied by a mobile host.
    pub host_roots: HostRoots,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            base_dir: None,
            host_roots: HostRoots::default(),
        }
    }
}

impl PathConfig {
    /// Build a configuration from `FRAMEPATHS_BASE_DIR` and `FRAMEPATHS_APP_NAME`.
    ///
    /// Unset or blank variables leave the defaults in place.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(name) = non_empty_var(APP_NAME_ENV) {
            config.app_name = name;
        }
        if let Some(base) = non_empty_var(BASE_DIR_ENV) {
            config.base_dir = Some(PathBuf::from(base));
        }

        config
    }

    /// Use a different application directory name.
    #[must_use]
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    /// Use an explicit base directory.
    #[must_use]
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    /// Attach roots supplied by a mobile host.
    #[must_use]
    pub fn with_host_roots(mut self, host_roots: HostRoots) -> Self {
        self.host_roots = host_roots;
        self
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

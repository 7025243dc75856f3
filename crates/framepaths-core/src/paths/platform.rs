//! Per-platform directory layouts.
//!
//! Each supported platform family is a [`Platform`] strategy. All strategies
//! are compiled on every target so their tables can be tested anywhere;
//! [`current_platform`] picks the one matching the build target.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use super::config::HostRoots;
use super::container::{
    FLATPAK_SHARE_DIR, appimage_resource_dir, bundle_resource_dir, flatpak_resource_dir,
};
use super::executable::executable_dir;

/// Semantic storage category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Settings that would roam with a user profile.
    Roaming,
    /// Machine-local application data; the catch-all role.
    LocalData,
    /// User-visible documents and saves.
    Personal,
    /// Disposable cached data.
    Cache,
    /// Read-only assets shipped with the application.
    AppResources,
}

impl Role {
    /// Every role, in display order.
    pub const ALL: [Self; 5] = [
        Self::Roaming,
        Self::LocalData,
        Self::Personal,
        Self::Cache,
        Self::AppResources,
    ];

    /// Stable lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Roaming => "roaming",
            Self::LocalData => "local",
            Self::Personal => "personal",
            Self::Cache => "cache",
            Self::AppResources => "resources",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directory layout of one platform family.
///
/// Role methods are pure: they compute a path and never touch the disk,
/// except resource detection, which probes for packaged-app directories.
pub trait Platform: fmt::Debug + Send + Sync {
    /// Short identifier, e.g. `"unix"`.
    fn name(&self) -> &'static str;

    /// Directory containing the running executable.
    fn executable_dir(&self) -> PathBuf {
        executable_dir()
    }

    /// Root for all application state when no explicit override is configured.
    fn base_dir(&self, exe_dir: &Path, app_name: &str) -> PathBuf {
        exe_dir.join(app_name)
    }

    fn roaming_dir(&self, base: &Path) -> PathBuf {
        base.join("AppData").join("Roaming")
    }

    fn local_data_dir(&self, base: &Path) -> PathBuf {
        local_app_data(base)
    }

    fn personal_dir(&self, base: &Path) -> PathBuf {
        base.join("Documents")
    }

    fn cache_dir(&self, base: &Path) -> PathBuf {
        base.join("Cache")
    }

    fn resource_dir(&self, base: &Path, exe_dir: &Path) -> PathBuf;

    /// Dispatch on [`Role`].
    fn role_dir(&self, role: Role, base: &Path, exe_dir: &Path) -> PathBuf {
        match role {
            Role::Roaming => self.roaming_dir(base),
            Role::LocalData => self.local_data_dir(base),
            Role::Personal => self.personal_dir(base),
            Role::Cache => self.cache_dir(base),
            Role::AppResources => self.resource_dir(base, exe_dir),
        }
    }
}

fn local_app_data(base: &Path) -> PathBuf {
    base.join("AppData").join("Local")
}

/// Store (UWP) applications.
///
/// The sandbox only grants the local app data folder, so every data role
/// collapses onto `AppData/Local`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SandboxedApp;

impl Platform for SandboxedApp {
    fn name(&self) -> &'static str {
        "windows-store"
    }

    fn roaming_dir(&self, base: &Path) -> PathBuf {
        local_app_data(base)
    }

    fn personal_dir(&self, base: &Path) -> PathBuf {
        local_app_data(base)
    }

    fn cache_dir(&self, base: &Path) -> PathBuf {
        local_app_data(base)
    }

    fn resource_dir(&self, _base: &Path, exe_dir: &Path) -> PathBuf {
        exe_dir.to_path_buf()
    }
}

/// Classic Win32 desktop applications.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsDesktop;

impl Platform for WindowsDesktop {
    fn name(&self) -> &'static str {
        "windows"
    }

    fn cache_dir(&self, base: &Path) -> PathBuf {
        local_app_data(base).join("Cache")
    }

    fn resource_dir(&self, _base: &Path, exe_dir: &Path) -> PathBuf {
        exe_dir.to_path_buf()
    }
}

/// macOS, preferring the resources of an enclosing `.app` bundle.
#[derive(Debug, Clone, Copy, Default)]
pub struct MacOs;

impl Platform for MacOs {
    fn name(&self) -> &'static str {
        "macos"
    }

    fn resource_dir(&self, _base: &Path, exe_dir: &Path) -> PathBuf {
        bundle_resource_dir(exe_dir).unwrap_or_else(|| exe_dir.to_path_buf())
    }
}

/// Linux, FreeBSD and other Unix-like desktops.
///
/// Resources come from an AppImage, then a Flatpak sandbox, then the
/// executable directory.
#[derive(Debug, Clone)]
pub struct UnixDesktop {
    flatpak_share: PathBuf,
}

impl UnixDesktop {
    pub fn new() -> Self {
        Self {
            flatpak_share: PathBuf::from(FLATPAK_SHARE_DIR),
        }
    }

    /// Probe a different Flatpak share directory.
    #[must_use]
    pub fn with_flatpak_share(mut self, flatpak_share: impl Into<PathBuf>) -> Self {
        self.flatpak_share = flatpak_share.into();
        self
    }
}

impl Default for UnixDesktop {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for UnixDesktop {
    fn name(&self) -> &'static str {
        "unix"
    }

    fn resource_dir(&self, _base: &Path, exe_dir: &Path) -> PathBuf {
        if let Some(dir) = appimage_resource_dir() {
            debug!(path = %dir.display(), "using AppImage resources");
            return dir;
        }
        if let Some(dir) = flatpak_resource_dir(&self.flatpak_share) {
            debug!(path = %dir.display(), "using Flatpak resources");
            return dir;
        }
        exe_dir.to_path_buf()
    }
}

/// Android and similar hosts that own the writable storage roots.
///
/// Without injected [`HostRoots`] this falls back to the executable-relative
/// scheme, which the OS will usually refuse to write to.
#[derive(Debug, Clone, Default)]
pub struct Mobile {
    host: HostRoots,
}

impl Mobile {
    pub fn new(host: HostRoots) -> Self {
        Self { host }
    }
}

impl Platform for Mobile {
    fn name(&self) -> &'static str {
        "android"
    }

    fn base_dir(&self, exe_dir: &Path, app_name: &str) -> PathBuf {
        self.host
            .files_dir
            .clone()
            .unwrap_or_else(|| exe_dir.join(app_name))
    }

    fn cache_dir(&self, base: &Path) -> PathBuf {
        self.host
            .cache_dir
            .clone()
            .unwrap_or_else(|| base.join("Cache"))
    }

    /// Resources live in the APK, so the base directory is the closest thing.
    fn resource_dir(&self, base: &Path, _exe_dir: &Path) -> PathBuf {
        base.to_path_buf()
    }
}

/// The layout for the target this crate was built for.
///
/// `host_roots` only matters on mobile targets.
pub fn current_platform(host_roots: &HostRoots) -> Box<dyn Platform> {
    let platform = select_platform(host_roots);
    debug!(platform = platform.name(), "selected platform layout");
    platform
}

#[cfg(all(windows, target_vendor = "uwp"))]
fn select_platform(_host_roots: &HostRoots) -> Box<dyn Platform> {
    Box::new(SandboxedApp)
}

#[cfg(all(windows, not(target_vendor = "uwp")))]
fn select_platform(_host_roots: &HostRoots) -> Box<dyn Platform> {
    Box::new(WindowsDesktop)
}

#[cfg(target_os = "macos")]
fn select_platform(_host_roots: &HostRoots) -> Box<dyn Platform> {
    Box::new(MacOs)
}

#[cfg(target_os = "android")]
fn select_platform(host_roots: &HostRoots) -> Box<dyn Platform> {
    Box::new(Mobile::new(host_roots.clone()))
}

#[cfg(not(any(windows, target_os = "macos", target_os = "android")))]
fn select_platform(_host_roots: &HostRoots) -> Box<dyn Platform> {
    Box::new(UnixDesktop::new())
}

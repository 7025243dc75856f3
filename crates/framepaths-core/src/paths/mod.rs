//! Application directory resolution.
//!
//! This module maps storage roles onto directories under a single base
//! directory that sits next to the executable:
//! - Roaming configuration
//! - Machine-local data
//! - Personal documents
//! - Cache
//! - Bundled application resources
//!
//! # Design
//!
//! - One [`Platform`] strategy per OS family, selected at build time
//! - [`AppPaths`] owns the base directory; the free functions use a
//!   process-wide instance initialized once through `OnceLock`
//! - Every role resolver returns a directory that exists, or a [`PathError`]

mod config;
mod container;
mod ensure;
mod error;
mod executable;
mod layout;
mod native;
mod platform;
mod resolver;

#[cfg(test)]
mod test_utils;

// Re-export public API

// Error type
pub use error::PathError;

// Configuration
pub use config::{APP_NAME_ENV, BASE_DIR_ENV, DEFAULT_APP_NAME, HostRoots, PathConfig};

// Executable location
pub use executable::executable_dir;

// Platform strategies and packaged-app detection
pub use container::{APPDIR_ENV, APPIMAGE_ENV, FLATPAK_SHARE_DIR};
pub use platform::{
    MacOs, Mobile, Platform, Role, SandboxedApp, UnixDesktop, WindowsDesktop, current_platform,
};

// Layout and role resolvers
pub use layout::{
    AppPaths, app_resources_path, base_directory, cache_path, default_paths, init_default_paths,
    local_data_path, personal_data_path, roaming_data_path,
};

// Directory operations
pub use ensure::{
    DirectoryProbe, StdFilesystem, ensure_path_exists, ensure_path_exists_with, verify_writable,
};

// Native path <-> portable string
pub use native::{native_string_from_path, path_from_native_string};

// Snapshot for diagnostics
pub use resolver::ResolvedPaths;

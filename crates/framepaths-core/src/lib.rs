//! Platform-aware application directories.
//!
//! Resolves roaming, personal, cache and resource directories under one
//! application-owned base directory, and converts paths to and from a
//! portable byte string.
#![deny(unused_crate_dependencies)]

pub mod paths;

// Re-export path utilities
pub use paths::{
    AppPaths, HostRoots, PathConfig, PathError, Platform, ResolvedPaths, Role,
    app_resources_path, base_directory, cache_path, ensure_path_exists, executable_dir,
    local_data_path, native_string_from_path, path_from_native_string, personal_data_path,
    roaming_data_path,
};

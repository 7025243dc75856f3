//! Snapshot of every resolved path.
//!
//! Captures the whole layout in one struct so it can be compared in tests
//! and printed by `framepaths paths`.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use super::{AppPaths, PathError, Role, default_paths};

/// All resolved paths captured in a single struct.
///
/// Every directory in here existed when the snapshot was taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPaths {
    /// Name of the platform layout in use
    pub platform: String,
    /// Directory containing the running executable
    pub executable_dir: PathBuf,
    /// Root directory for application data
    pub base_dir: PathBuf,
    /// Roaming configuration directory
    pub roaming: PathBuf,
    /// Machine-local data directory
    pub local: PathBuf,
    /// Personal documents directory
    pub personal: PathBuf,
    /// Cache directory
    pub cache: PathBuf,
    /// Bundled resources directory
    pub resources: PathBuf,
}

impl ResolvedPaths {
    /// Resolve all paths of the process-wide layout.
    pub fn resolve() -> Result<Self, PathError> {
        default_paths().resolve_all()
    }
}

impl AppPaths {
    /// Resolve (and create) every role directory in one go.
    pub fn resolve_all(&self) -> Result<ResolvedPaths, PathError> {
        Ok(ResolvedPaths {
            platform: self.platform().name().to_string(),
            executable_dir: self.executable_dir().to_path_buf(),
            base_dir: self.base_dir().to_path_buf(),
            roaming: self.roaming_data_path()?,
            local: self.local_data_path()?,
            personal: self.personal_data_path()?,
            cache: self.cache_path()?,
            resources: self.app_resources_path()?,
        })
    }
}

impl ResolvedPaths {
    /// Role directories in display order.
    pub fn roles(&self) -> [(Role, &PathBuf); 5] {
        [
            (Role::Roaming, &self.roaming),
            (Role::LocalData, &self.local),
            (Role::Personal, &self.personal),
            (Role::Cache, &self.cache),
            (Role::AppResources, &self.resources),
        ]
    }

    /// Role directories the application writes to.
    pub fn data_roles(&self) -> impl Iterator<Item = (Role, &PathBuf)> {
        self.roles()
            .into_iter()
            .filter(|(role, _)| *role != Role::AppResources)
    }
}

impl fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "platform = {}", self.platform)?;
        writeln!(f, "executable_dir = {}", self.executable_dir.display())?;
        writeln!(f, "base_dir = {}", self.base_dir.display())?;
        writeln!(f, "roaming = {}", self.roaming.display())?;
        writeln!(f, "local = {}", self.local.display())?;
        writeln!(f, "personal = {}", self.personal.display())?;
        writeln!(f, "cache = {}", self.cache.display())?;
        write!(f, "resources = {}", self.resources.display())
    }
}

//! CLI bootstrap - the composition root.
//!
//! Turns the parsed arguments into a [`PathConfig`] and installs the
//! resulting layout as the process-wide default before any handler runs.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use framepaths_core::paths::{AppPaths, PathConfig, default_paths, init_default_paths};

use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Explicit base directory.
    pub base_dir: Option<PathBuf>,
    /// Application directory name.
    pub app_name: Option<String>,
}

impl CliConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            base_dir: cli.base_dir.clone(),
            app_name: cli.app_name.clone(),
        }
    }

    /// Environment defaults with command-line values layered on top.
    pub fn path_config(&self) -> PathConfig {
        let mut config = PathConfig::from_env();
        if let Some(name) = &self.app_name {
            config = config.with_app_name(name.clone());
        }
        if let Some(base) = &self.base_dir {
            config = config.with_base_dir(base.clone());
        }
        config
    }
}

/// Build the layout and make it the process-wide default.
pub fn bootstrap(config: &CliConfig) -> Result<&'static AppPaths> {
    let paths = AppPaths::new(config.path_config());
    init_default_paths(paths).map_err(|_| anyhow!("path layout was already initialized"))?;
    Ok(default_paths())
}

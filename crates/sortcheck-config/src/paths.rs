//! Path utilities and XDG directory discovery

use crate::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// XDG-compliant paths for sortcheck
pub struct Paths {
    project_dirs: Option<ProjectDirs>,
}

impl Paths {
    /// Create a new Paths instance with XDG discovery
    pub fn new() -> Self {
        Self {
            project_dirs: ProjectDirs::from("org", "sortcheck", "sortcheck"),
        }
    }

    /// Get user config directory (~/.config/sortcheck/)
    pub fn user_config_dir(&self) -> Result<PathBuf, ConfigError> {
        self.project_dirs
            .as_ref()
            .map(|p| p.config_dir().to_path_buf())
            .ok_or_else(|| {
                ConfigError::XdgError("Failed to determine user config directory".to_string())
            })
    }

    /// Get user config file path (~/.config/sortcheck/config.toml)
    pub fn user_config_file(&self) -> Result<PathBuf, ConfigError> {
        Ok(self.user_config_dir()?.join("config.toml"))
    }

    /// Get project config file path (sortcheck.toml)
    pub fn project_config_file(project_dir: impl AsRef<Path>) -> PathBuf {
        project_dir.as_ref().join("sortcheck.toml")
    }

    /// Get local config file path (sortcheck.local.toml, gitignored)
    pub fn local_config_file(project_dir: impl AsRef<Path>) -> PathBuf {
        project_dir.as_ref().join("sortcheck.local.toml")
    }

    /// Check if a project has its own config (sortcheck.toml)
    pub fn has_project_config(project_dir: impl AsRef<Path>) -> bool {
        Self::project_config_file(project_dir).exists()
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new()
    }
}

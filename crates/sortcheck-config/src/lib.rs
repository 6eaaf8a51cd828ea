//! Configuration management for sortcheck
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. CLI arguments (highest precedence, applied by the caller)
//! 2. Environment variables (SORTCHECK_* prefix)
//! 3. sortcheck.local.toml (gitignored, local overrides)
//! 4. sortcheck.toml (git-tracked, project config)
//! 5. ~/.config/sortcheck/config.toml (user defaults)
//! 6. Built-in defaults (lowest precedence)
//!
//! Configuration only shapes how runs are scheduled and reported. The data
//! being sorted is always generated, never configured.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use sortcheck_types::{SizeVariant, SortAlgorithm};
use std::path::Path;

mod error;
mod loader;
mod paths;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use paths::Paths;

/// Main sortcheck configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortcheckConfig {
    pub run: RunConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Variants `sortcheck all` runs, in order.
    pub variants: Vec<SizeVariant>,
    pub algorithm: AlgorithmSetting,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            variants: SizeVariant::ALL.to_vec(),
            algorithm: AlgorithmSetting::VariantDefault,
        }
    }
}

/// Which sort to use for calibrated variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmSetting {
    /// Each variant keeps its own default sort.
    #[default]
    VariantDefault,
    Adjacent,
    Anchored,
}

impl AlgorithmSetting {
    /// Resolves the setting for one variant.
    pub fn resolve(self, variant: SizeVariant) -> SortAlgorithm {
        match self {
            AlgorithmSetting::VariantDefault => variant.default_algorithm(),
            AlgorithmSetting::Adjacent => SortAlgorithm::AdjacentExchange,
            AlgorithmSetting::Anchored => SortAlgorithm::AnchoredExchange,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// The outcome line, as external harnesses expect it.
    #[default]
    Text,
    /// One JSON report per run.
    Json,
}

impl SortcheckConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        ConfigLoader::new().load()
    }

    /// Load configuration from specific project directory
    pub fn load_from_dir(project_dir: impl AsRef<Path>) -> Result<Self> {
        ConfigLoader::new().with_project_dir(project_dir).load()
    }

    /// Rejects settings no run could satisfy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.run.variants.is_empty() {
            return Err(ConfigError::ValidationError(
                "run.variants must name at least one variant".to_string(),
            ));
        }
        Ok(())
    }

    /// Renders the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::SerializeError)
    }
}

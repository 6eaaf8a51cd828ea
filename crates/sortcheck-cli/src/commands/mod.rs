//! CLI command implementations.

use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use sortcheck_config::{OutputFormat, SortcheckConfig};

use crate::style;

pub mod config;
pub mod run;
pub mod version;

/// Whether every run in a command verified.
///
/// Only the process exit status is derived from this; the outcome itself
/// stays in the reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Passed,
    Failed,
}

impl RunStatus {
    pub fn exit_code(self) -> ExitCode {
        match self {
            RunStatus::Passed => ExitCode::SUCCESS,
            RunStatus::Failed => ExitCode::from(1),
        }
    }
}

/// Effective configuration after applying CLI overrides.
pub struct Settings {
    pub config: SortcheckConfig,
}

impl Settings {
    pub fn load(
        config_dir: Option<&Path>,
        format: Option<OutputFormat>,
        no_color: bool,
    ) -> Result<Self> {
        let mut config = load_config(config_dir).context("Failed to load configuration")?;

        if let Some(format) = format {
            config.output.format = format;
        }

        let color = color_allowed(config.output.color, no_color);
        config.output.color = color;
        style::set_no_color(!color);

        Ok(Self { config })
    }

    pub fn format(&self) -> OutputFormat {
        self.config.output.format
    }
}

/// True only when config, flags and environment all allow color on a terminal stdout.
pub fn color_allowed(configured: bool, no_color: bool) -> bool {
    configured
        && !no_color
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stdout().is_terminal()
}

/// Loads from `config_dir`, or from the current directory when absent.
pub(crate) fn load_config(config_dir: Option<&Path>) -> Result<SortcheckConfig> {
    match config_dir {
        Some(dir) => SortcheckConfig::load_from_dir(dir),
        None => SortcheckConfig::load(),
    }
}

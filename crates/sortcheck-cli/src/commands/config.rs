//! Configuration commands.

use std::path::Path;

use anyhow::{Context, Result};
use sortcheck_config::Paths;

use super::{RunStatus, load_config};
use crate::style::{self, colors::SemanticStyle};

/// Prints the effective configuration as TOML.
///
/// CLI overrides are not applied; this is what the files and environment
/// produce on their own.
pub fn show(config_dir: Option<&Path>) -> Result<RunStatus> {
    let config = load_config(config_dir).context("Failed to load configuration")?;

    print!("{}", config.to_toml()?);
    Ok(RunStatus::Passed)
}

/// Loads every configuration source and reports whether the result is usable.
pub fn validate(config_dir: Option<&Path>) -> Result<RunStatus> {
    let dir = config_dir.map_or_else(|| ".".to_string(), |d| d.display().to_string());
    println!("{}", format!("Validating configuration in {dir}").header());

    let project_dir = config_dir.unwrap_or_else(|| Path::new("."));
    let source = if Paths::has_project_config(project_dir) {
        Paths::project_config_file(project_dir).display().to_string()
    } else {
        "built-in defaults".to_string()
    };
    style::print_labeled("Project config", &source);

    let config = load_config(config_dir).context("Configuration validation failed")?;

    let variants: Vec<String> = config.run.variants.iter().map(ToString::to_string).collect();
    style::print_labeled("Variants", &variants.join(", "));
    style::print_success("Configuration is valid");
    Ok(RunStatus::Passed)
}

//! Configuration loader with multi-source merging

use crate::{ConfigError, Paths, SortcheckConfig};
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader with builder pattern
pub struct ConfigLoader {
    project_dir: PathBuf,
    env_prefix: String,
    include_user_config: bool,
}

impl ConfigLoader {
    /// Create a new config loader with default project directory (current dir)
    pub fn new() -> Self {
        Self {
            project_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            env_prefix: "SORTCHECK".to_string(),
            include_user_config: true,
        }
    }

    /// Set the project directory
    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.project_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the environment variable prefix (default: "SORTCHECK")
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Skip ~/.config/sortcheck/config.toml (keeps tests hermetic)
    pub fn without_user_config(mut self) -> Self {
        self.include_user_config = false;
        self
    }

    /// Load configuration from all sources with proper precedence
    pub fn load(self) -> Result<SortcheckConfig> {
        if !self.project_dir.is_dir() {
            return Err(ConfigError::MissingDirectory(self.project_dir).into());
        }

        let mut builder = config::Config::builder();

        // 1. Start with built-in defaults
        let defaults = SortcheckConfig::default();
        builder = builder.add_source(config::Config::try_from(&defaults)?);

        // 2. User config (~/.config/sortcheck/config.toml)
        if self.include_user_config {
            let paths = Paths::new();
            if let Ok(user_config_file) = paths.user_config_file() {
                if user_config_file.exists() {
                    builder = builder.add_source(
                        config::File::from(user_config_file)
                            .required(false)
                            .format(config::FileFormat::Toml),
                    );
                }
            }
        }

        // 3. Project config (sortcheck.toml)
        let project_config_file = Paths::project_config_file(&self.project_dir);
        if project_config_file.exists() {
            builder = builder.add_source(
                config::File::from(project_config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // 4. Local config (sortcheck.local.toml, gitignored)
        let local_config_file = Paths::local_config_file(&self.project_dir);
        if local_config_file.exists() {
            builder = builder.add_source(
                config::File::from(local_config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // 5. Environment variables (SORTCHECK_*)
        builder = builder.add_source(
            config::Environment::with_prefix(&self.env_prefix)
                .separator("_")
                .list_separator(",")
                .with_list_parse_key("run.variants")
                .try_parsing(true),
        );

        // Build and deserialize
        let config = builder.build().context("Failed to build configuration")?;

        let sortcheck_config: SortcheckConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        sortcheck_config.validate()?;

        Ok(sortcheck_config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AlgorithmSetting, OutputFormat};
    use sortcheck_types::SizeVariant;
    use std::fs;
    use tempfile::tempdir;

    fn loader(dir: &Path) -> ConfigLoader {
        ConfigLoader::new()
            .with_project_dir(dir)
            .with_env_prefix("SORTCHECK_LOADER_TEST")
            .without_user_config()
    }

    #[test]
    fn test_load_defaults() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config = loader(temp_dir.path()).load().expect("Failed to load config");

        assert_eq!(config, SortcheckConfig::default());
    }

    #[test]
    fn test_load_project_config() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        let config_content = r#"
[run]
variants = ["large", "small"]
algorithm = "anchored"

[output]
format = "json"
color = false
"#;
        fs::write(project_dir.join("sortcheck.toml"), config_content)
            .expect("Failed to write config");

        let config = loader(project_dir).load().expect("Failed to load config");

        assert_eq!(
            config.run.variants,
            vec![SizeVariant::Large, SizeVariant::Small]
        );
        assert_eq!(config.run.algorithm, AlgorithmSetting::Anchored);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.color);
    }

    #[test]
    fn test_local_overrides() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(
            project_dir.join("sortcheck.toml"),
            r#"
[output]
format = "json"
"#,
        )
        .expect("Failed to write project config");

        fs::write(
            project_dir.join("sortcheck.local.toml"),
            r#"
[output]
format = "text"
"#,
        )
        .expect("Failed to write local config");

        let config = loader(project_dir).load().expect("Failed to load config");

        // Local config should override project config
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        fs::write(
            temp_dir.path().join("sortcheck.toml"),
            "[run]\nvariants = [\"huge\"]\n",
        )
        .expect("Failed to write config");

        assert!(loader(temp_dir.path()).load().is_err());
    }

    #[test]
    fn test_empty_variant_list_is_rejected() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        fs::write(
            temp_dir.path().join("sortcheck.toml"),
            "[run]\nvariants = []\n",
        )
        .expect("Failed to write config");

        let err = loader(temp_dir.path()).load().unwrap_err();
        assert!(err.to_string().contains("at least one variant"));
    }

    #[test]
    fn test_missing_project_dir_is_rejected() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let missing = temp_dir.path().join("nope");

        let err = loader(&missing).load().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::MissingDirectory(_))
        ));
    }
}

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::view::MapOptions;
use crate::workflows::ProgressPolicy;

pub const CONFIG_FILE_STEM: &str = "zoo-journey";
pub const RC_FILE: &str = ".zoo-journey-rc";
pub const ENV_PREFIX: &str = "ZOO_JOURNEY";

/// Main configuration structure for zoo-journey
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ZooJourneyConfig {
    /// Logging settings
    pub observability: ObservabilityConfig,
    /// Where the starting workflow comes from and how progress is counted
    pub workflow: WorkflowConfig,
    /// Map rendering settings
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level used when RUST_LOG is not set
    pub log_level: String,
    /// Emit JSON log lines instead of compact text
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            json_logs: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// JSON document to start from instead of the built-in journey (read only)
    pub source: Option<PathBuf>,
    /// Which completed entries count toward progress
    pub progress_policy: ProgressPolicy,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show step descriptions under each node
    pub show_descriptions: bool,
    /// Show state notes under each node
    pub show_notes: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_descriptions: true,
            show_notes: true,
        }
    }
}

impl DisplayConfig {
    pub fn map_options(&self) -> MapOptions {
        MapOptions {
            show_descriptions: self.show_descriptions,
            show_notes: self.show_notes,
        }
    }
}

impl ZooJourneyConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration files (zoo-journey.toml, .zoo-journey-rc, then `explicit`)
    /// 3. Environment variables (ZOO_JOURNEY_<SECTION>__<KEY>)
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if Path::new(&format!("{CONFIG_FILE_STEM}.toml")).exists() {
            builder = builder.add_source(File::with_name(CONFIG_FILE_STEM));
        }

        if Path::new(RC_FILE).exists() {
            builder = builder.add_source(File::new(RC_FILE, config::FileFormat::Toml));
        }

        if let Some(path) = explicit {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to read configuration")?;
        let zoo_config: ZooJourneyConfig = config
            .try_deserialize()
            .context("Failed to parse configuration")?;

        Ok(zoo_config)
    }

    /// Effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Load .env file if it exists.
    ///
    /// Runs before logging is set up, so the caller reports the outcome:
    /// `Ok(true)` when a file was applied.
    pub fn load_env_file() -> Result<bool> {
        if !Path::new(".env").exists() {
            return Ok(false);
        }
        dotenvy::dotenv().context("Failed to load .env file")?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ZooJourneyConfig::default();
        assert_eq!(config.observability.log_level, "warn");
        assert_eq!(config.workflow.progress_policy, ProgressPolicy::KnownStepsOnly);
        assert!(config.workflow.source.is_none());
        assert_eq!(config.display.map_options(), MapOptions::default());
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(
            &path,
            "[workflow]\nprogress_policy = \"all_entries\"\n\n[display]\nshow_notes = false\n",
        )
        .unwrap();

        let config = ZooJourneyConfig::load(Some(&path)).unwrap();
        assert_eq!(config.workflow.progress_policy, ProgressPolicy::AllEntries);
        assert!(!config.display.show_notes);
        assert!(config.display.show_descriptions);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = ZooJourneyConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_save_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("saved.toml");
        let mut config = ZooJourneyConfig::default();
        config.observability.json_logs = true;
        config.workflow.source = Some(PathBuf::from("journey.json"));

        config.save_to_file(&path).unwrap();
        let loaded = ZooJourneyConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_to_toml_lists_every_section() {
        let text = ZooJourneyConfig::default().to_toml().unwrap();
        assert!(text.contains("[observability]"));
        assert!(text.contains("log_level = \"warn\""));
        assert!(text.contains("progress_policy = \"known_steps_only\""));
        assert!(text.contains("[display]"));
        assert!(!text.contains("source"));
    }
}

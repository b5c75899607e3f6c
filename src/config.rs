use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ARCHIVE_PATH, DEFAULT_BUCKET, DEFAULT_REPORTS_DIR, PLACEHOLDER_REPORT_COUNT,
};

/// Run configuration for a single upload run.
///
/// Every field has a default, so a partial YAML file (or none at all)
/// yields a usable configuration.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RunConfig {
    /// Bucket that receives the archive; must be globally unique
    #[serde(default = "default_bucket")]
    pub bucket: String,

    /// Directory scanned for report files
    #[serde(default = "default_reports_dir")]
    pub reports_dir: PathBuf,

    /// Destination path of the ZIP archive
    #[serde(default = "default_archive_path")]
    pub archive_path: PathBuf,

    /// AWS region for S3 calls; falls back to the client default
    #[serde(default)]
    pub region: Option<String>,

    /// AWS profile for S3 credentials
    #[serde(default)]
    pub profile: Option<String>,

    /// How many placeholder reports to seed into an empty directory
    #[serde(default = "default_report_count")]
    pub report_count: usize,
}

fn default_bucket() -> String {
    DEFAULT_BUCKET.to_string()
}

fn default_reports_dir() -> PathBuf {
    PathBuf::from(DEFAULT_REPORTS_DIR)
}

fn default_archive_path() -> PathBuf {
    PathBuf::from(DEFAULT_ARCHIVE_PATH)
}

fn default_report_count() -> usize {
    PLACEHOLDER_REPORT_COUNT
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            bucket: default_bucket(),
            reports_dir: default_reports_dir(),
            archive_path: default_archive_path(),
            region: None,
            profile: None,
            report_count: default_report_count(),
        }
    }
}

impl RunConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: RunConfig =
            serde_yaml::from_str(&content).context("Failed to parse YAML config")?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save_to_yaml_file(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self).context("Failed to serialize config to YAML")?;

        fs::write(path, yaml)
            .context(format!("Failed to write config to {}", path.display()))?;

        info!("Saved configuration to {}", path.display());
        Ok(())
    }
}

/// Load the configuration from the given path, or fall back to defaults
/// when no path was supplied.
pub fn load_or_default(path: Option<&Path>) -> Result<RunConfig> {
    match path {
        Some(p) => RunConfig::from_yaml_file(p),
        None => {
            debug!("No configuration file given, using defaults");
            Ok(RunConfig::default())
        }
    }
}

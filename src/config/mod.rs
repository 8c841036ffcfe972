//! Configuration handling for scaffold-check.
//!
//! Configuration is optional. When no `scaffold-check.toml` is found the
//! built-in defaults apply: every section runs, environment checks fail the
//! run, and the report is plain text.

use crate::checks::catalog::{self, CatalogPolicy};
use crate::checks::rules::Severity;
use crate::core::check::Section;
use crate::core::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "scaffold-check.toml";

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Severity policy.
    pub policy: PolicyConfig,
    /// Report output settings.
    pub output: OutputConfig,
    /// Section selection.
    pub sections: SectionsConfig,
}

impl Config {
    /// Loads the configuration that applies to `root`, or defaults if none
    /// is found.
    pub fn load_for(root: &Path) -> Result<Self> {
        match Self::find_config_file(root) {
            Ok(path) => Self::load_from(&path),
            Err(Error::ConfigNotFound { .. }) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::ConfigNotFound {
                    path: path.to_path_buf(),
                })
            },
            Err(e) => return Err(Error::io("read config", e)),
        };

        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::config_parse_with_source("Failed to parse TOML", e))?;

        config.validate()?;

        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Finds the configuration file by searching up the directory tree from
    /// `start`.
    pub fn find_config_file(start: &Path) -> Result<PathBuf> {
        let mut current = start;
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.is_file() {
                return Ok(config_path);
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        Err(Error::ConfigNotFound {
            path: start.join(CONFIG_FILE_NAME),
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        for id in &self.sections.skip {
            if !catalog::is_section(id) {
                return Err(Error::ConfigInvalid {
                    field: "sections.skip".to_string(),
                    message: format!(
                        "Unknown section: {id}. Expected one of: {}",
                        catalog::SECTION_IDS.join(", ")
                    ),
                });
            }
        }

        Ok(())
    }

    /// Returns the policy used to build the catalog.
    #[must_use]
    pub fn catalog_policy(&self) -> CatalogPolicy {
        CatalogPolicy {
            environment: self.policy.environment,
        }
    }

    /// Builds the sections to run, in catalog order, leaving out skipped ones.
    #[must_use]
    pub fn sections(&self) -> Vec<Section> {
        catalog::sections(self.catalog_policy())
            .into_iter()
            .filter(|section| !self.sections.skip.iter().any(|id| id == section.id()))
            .collect()
    }
}

/// Severity policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Severity of checks that depend on the local environment (installed
    /// dependencies, generated icons).
    pub environment: Severity,
}

/// Report output settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format.
    pub format: OutputFormat,
}

/// Report format.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text with level markers.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Section selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionsConfig {
    /// Section identifiers to leave out of the run.
    pub skip: Vec<String>,
}

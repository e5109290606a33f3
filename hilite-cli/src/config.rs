//! Configuration module for the hilite CLI.
//!
//! This module handles loading, saving, and resolving configuration
//! settings: where output goes, which vocabulary to classify words with,
//! and how the markup is rendered.

use dirs::{config_dir, home_dir};
use num_cpus::get as get_num_cpus;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use hilite_html::RenderOptions;
use hilite_lex::{presets, Vocabulary};

use crate::error::{HiliteError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "hilite.toml";

/// Preset name that selects an empty vocabulary.
pub const NO_PRESET: &str = "none";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Directory that highlighted files are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Number of files highlighted in parallel.
    #[serde(default = "default_jobs")]
    pub jobs: usize,

    /// Keyword and type-name configuration.
    #[serde(default)]
    pub vocabulary: VocabularyConfig,

    /// Markup options.
    #[serde(default)]
    pub render: RenderOptions,
}

/// Vocabulary configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VocabularyConfig {
    /// Built-in vocabulary to start from, or `"none"`.
    #[serde(default = "default_preset")]
    pub preset: String,

    /// Extra keywords merged into the preset.
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Extra type names merged into the preset.
    #[serde(default)]
    pub type_names: Vec<String>,
}

fn default_output_dir() -> String {
    "highlighted".to_string()
}

fn default_jobs() -> usize {
    get_num_cpus()
}

fn default_preset() -> String {
    "default".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            jobs: default_jobs(),
            vocabulary: VocabularyConfig::default(),
            render: RenderOptions::default(),
        }
    }
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            preset: default_preset(),
            keywords: Vec::new(),
            type_names: Vec::new(),
        }
    }
}

impl VocabularyConfig {
    /// Builds the vocabulary described by this configuration.
    ///
    /// # Returns
    /// * `Result<Vocabulary>` - The preset merged with the extra words, or a
    ///   configuration error for an unknown preset name
    pub fn resolve(&self) -> Result<Vocabulary> {
        let base = if self.preset == NO_PRESET {
            Vocabulary::new()
        } else {
            presets::preset(&self.preset).ok_or_else(|| {
                HiliteError::Config(format!(
                    "unknown vocabulary preset `{}` (expected one of: {}, {})",
                    self.preset,
                    presets::PRESET_NAMES.join(", "),
                    NO_PRESET
                ))
            })?
        };

        Ok(base
            .with_keywords(self.keywords.iter().cloned())
            .with_type_names(self.type_names.iter().cloned()))
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/hilite/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Result<Config>` - The loaded configuration or an error
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(HiliteError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            HiliteError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            HiliteError::Config(format!("Failed to serialize configuration: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Builds the configured vocabulary.
    pub fn vocabulary(&self) -> Result<Vocabulary> {
        self.vocabulary.resolve()
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("hilite").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("hilite").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

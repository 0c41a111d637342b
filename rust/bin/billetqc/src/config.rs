//! Client-side configuration.
//!
//! Reads/writes `~/.billetqc/config.toml`.

use std::path::{Path, PathBuf};

use billetqc::{SiteConfig, DEFAULT_INSPECTOR, DEFAULT_WORKSHEET};
use serde::{Deserialize, Serialize};

/// Client configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClientConfig {
    /// Path to the redb record store (default: ~/.billetqc/records.redb).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub store_path: String,

    /// Worksheet the production log lives in.
    #[serde(default = "default_worksheet")]
    pub worksheet: String,

    /// Directory labels are written to (default: current directory).
    #[serde(default = "default_label_dir")]
    pub label_dir: String,

    /// Inspector recorded when a batch file names none.
    #[serde(default = "default_inspector")]
    pub inspector: String,

    /// Optional YAML site config; the built-in plant lists are used otherwise.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub site_config: String,
}

fn default_worksheet() -> String {
    DEFAULT_WORKSHEET.to_string()
}

fn default_inspector() -> String {
    DEFAULT_INSPECTOR.to_string()
}

fn default_label_dir() -> String {
    ".".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            store_path: String::new(),
            worksheet: default_worksheet(),
            label_dir: default_label_dir(),
            inspector: default_inspector(),
            site_config: String::new(),
        }
    }
}

impl ClientConfig {
    /// Default config file path: ~/.billetqc/config.toml.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }

    /// Load config from disk, or return default if file doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: ClientConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Resolved store path.
    pub fn store_path(&self) -> PathBuf {
        if self.store_path.is_empty() {
            dirs_path().join("records.redb")
        } else {
            PathBuf::from(&self.store_path)
        }
    }

    pub fn label_dir(&self) -> PathBuf {
        PathBuf::from(&self.label_dir)
    }

    /// Site config from `site-config`, or the built-in default.
    pub fn site(&self) -> anyhow::Result<SiteConfig> {
        if self.site_config.is_empty() {
            return Ok(SiteConfig::default());
        }
        let text = std::fs::read_to_string(&self.site_config)?;
        Ok(SiteConfig::from_yaml(&text)?)
    }
}

/// Return the billetqc config directory (~/.billetqc).
fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".billetqc")
}

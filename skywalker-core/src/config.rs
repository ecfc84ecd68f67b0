//! Configuration types for the skywalker dashboard

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::i18n::Language;

/// Generative model provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API key; `${VAR}` values are expanded from the environment
    #[serde(default)]
    pub api_key: Option<String>,
    /// Model used for quick structured calls (feeds, header audits)
    #[serde(default = "default_flash_model")]
    pub flash_model: String,
    /// Model used for deep analysis (domain scans, deep dives, chat)
    #[serde(default = "default_pro_model")]
    pub pro_model: String,
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_flash_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_pro_model() -> String {
    "gemini-3-pro-preview".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            flash_model: default_flash_model(),
            pro_model: default_pro_model(),
            base_url: None,
        }
    }
}

/// Local storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".skywalker")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    /// Fallback UI language used before a preference has been stored
    #[serde(default)]
    pub default_language: Language,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> crate::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from default locations with cascade:
    /// 1. ./skywalker.toml (local override)
    /// 2. ~/.skywalker/config.toml (global defaults)
    /// 3. Built-in defaults
    pub fn load_default() -> Self {
        if let Ok(config) = Self::from_file("skywalker.toml") {
            return config;
        }

        if let Some(home) = dirs::home_dir() {
            let global_path = home.join(".skywalker").join("config.toml");
            if let Ok(config) = Self::from_file(&global_path) {
                return config;
            }
        }

        Self::default()
    }

    /// Expand environment variables in the API key field
    pub fn expand_env_vars(&mut self) {
        if let Some(ref key) = self.provider.api_key {
            if key.starts_with("${") && key.ends_with('}') {
                let var_name = &key[2..key.len() - 1];
                if let Ok(value) = std::env::var(var_name) {
                    self.provider.api_key = Some(value);
                }
            }
        }
    }

    /// Path to the preference database
    pub fn db_path(&self) -> PathBuf {
        self.storage.data_dir.join("skywalker.db")
    }
}

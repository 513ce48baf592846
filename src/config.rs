//! Configuration handling for the TUI

use crate::completion::CompletionSettings;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Environment variable overriding the model
pub const MODEL_ENV: &str = "RESALE_TUI_MODEL";
/// Environment variable overriding the API base URL
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EstimatorConfig {
    /// API key for the completion service
    pub api_key: Option<String>,
    /// Model identifier
    pub model: Option<String>,
    /// API base URL, e.g. `https://api.openai.com/v1`
    pub api_base_url: Option<String>,
    /// Maximum reply length in tokens
    pub max_tokens: Option<u32>,
    /// Sampling temperature
    pub temperature: Option<f32>,
}

impl EstimatorConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "resale", "resale-tui")
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file
    pub fn log_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let config = match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };
        Ok(config.with_env_overrides(|name| std::env::var(name).ok()))
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: EstimatorConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    /// Overlay non-empty environment values on top of the file values
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        if let Some(key) = lookup(API_KEY_ENV) {
            self.api_key = Some(key);
        }
        if let Some(model) = lookup(MODEL_ENV) {
            self.model = Some(model);
        }
        if let Some(url) = lookup(BASE_URL_ENV) {
            self.api_base_url = Some(url);
        }
        self
    }

    /// Resolve into concrete request settings, filling in defaults
    pub fn completion_settings(&self) -> CompletionSettings {
        let defaults = CompletionSettings::default();
        CompletionSettings {
            api_key: self.api_key.clone(),
            model: self.model.clone().unwrap_or(defaults.model),
            api_base_url: self.api_base_url.clone().unwrap_or(defaults.api_base_url),
            max_tokens: self.max_tokens.unwrap_or(defaults.max_tokens),
            temperature: self.temperature.unwrap_or(defaults.temperature),
        }
    }
}

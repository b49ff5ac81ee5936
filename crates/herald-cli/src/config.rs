//! Configuration file management for herald.
//!
//! Provides a TOML-based config file at `~/.config/herald/config.toml` and a
//! resolution chain for the model credential: env var > config file > absent.
//! An absent credential is not an error; the service runs in fallback-only
//! mode.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use herald_core::model::{
    DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, ModelConfig,
};

/// Env var holding the model credential. Takes precedence over the file.
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigFile {
    pub model: ModelSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ModelSection {
    /// Model credential. Leave unset to run in fallback-only mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl ConfigFile {
    /// Starter config written by `herald init`: defaults spelled out, no key.
    pub fn starter() -> Self {
        Self {
            model: ModelSection {
                api_key: None,
                model: Some(DEFAULT_MODEL.to_owned()),
                base_url: Some(DEFAULT_BASE_URL.to_owned()),
                max_tokens: Some(DEFAULT_MAX_TOKENS),
                timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
            },
        }
    }
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the herald config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/herald` or `~/.config/herald`.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("herald");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("herald")
}

/// Return the path to the herald config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse the config file. Returns an error if it does not exist.
pub fn load_config() -> Result<ConfigFile> {
    let path = config_path();
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents).context("failed to parse config file")?;
    Ok(config)
}

/// Serialize and write the config file, creating parent dirs as needed.
/// Sets file permissions to 0600 on Unix since the file may hold a key.
pub fn save_config(config: &ConfigFile) -> Result<()> {
    let path = config_path();
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(&path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(&path, perms)
            .with_context(|| format!("failed to set permissions on {}", path.display()))?;
    }

    Ok(())
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Fully resolved configuration, ready for use.
///
/// `model_config` is `None` when no credential was found anywhere; that is
/// the expected degraded mode, not an error.
#[derive(Debug)]
pub struct HeraldConfig {
    pub model_config: Option<ModelConfig>,
}

impl HeraldConfig {
    /// Resolve configuration using the chain: env var > config file > absent.
    pub fn resolve() -> Result<Self> {
        let section = load_config().map(|c| c.model).unwrap_or_default();

        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| section.api_key.clone().filter(|k| !k.trim().is_empty()));

        let model_config = api_key.map(|api_key| ModelConfig {
            api_key,
            model: section.model.clone().unwrap_or_else(|| DEFAULT_MODEL.to_owned()),
            base_url: section
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            max_tokens: section.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            timeout_secs: section.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        });

        Ok(Self { model_config })
    }
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------

//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.kindersmart/config.toml`. If missing on first run, a
//! commented-out default is generated so parents can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::content::ContentDelays;
use crate::core::types::CategoryType;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct KinderConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub content: ContentConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_category: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ContentConfig {
    pub math_delay_ms: Option<u64>,
    pub science_delay_ms: Option<u64>,
    pub story_delay_ms: Option<u64>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub start_category: Option<CategoryType>,
    pub delays: ContentDelays,
}

/// Values taken from the command line. `None`/`false` = not specified.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub category: Option<CategoryType>,
    pub instant: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.kindersmart/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".kindersmart").join("config.toml"))
}

/// Load config from `~/.kindersmart/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `KinderConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<KinderConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(KinderConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<KinderConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(KinderConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: KinderConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# KinderSmart Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_category = "READING"    # Or KINDERSMART_START_CATEGORY, or --category

# [content]
# Artificial delay before generated content appears.
# KINDERSMART_INSTANT=1 or --instant sets all of them to zero.
# math_delay_ms = 300
# science_delay_ms = 400
# story_delay_ms = 300
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &KinderConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading the environment through `env`.
pub fn resolve_with_env(
    config: &KinderConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Start category: CLI → env → config → none. A bad value falls through.
    let start_category = cli
        .category
        .or_else(|| {
            env("KINDERSMART_START_CATEGORY")
                .and_then(|name| parse_start_category("KINDERSMART_START_CATEGORY", &name))
        })
        .or_else(|| {
            config
                .general
                .start_category
                .as_deref()
                .and_then(|name| parse_start_category("config file", name))
        });

    // Delays: CLI/env instant switch wins over per-operation config
    let instant = cli.instant
        || env("KINDERSMART_INSTANT").is_some_and(|v| matches!(v.trim(), "1" | "true" | "yes"));

    let delays = if instant {
        ContentDelays::none()
    } else {
        let defaults = ContentDelays::default();
        ContentDelays {
            math: config
                .content
                .math_delay_ms
                .map_or(defaults.math, Duration::from_millis),
            science: config
                .content
                .science_delay_ms
                .map_or(defaults.science, Duration::from_millis),
            story: config
                .content
                .story_delay_ms
                .map_or(defaults.story, Duration::from_millis),
        }
    };

    ResolvedConfig {
        start_category,
        delays,
    }
}

fn parse_start_category(source: &str, name: &str) -> Option<CategoryType> {
    match name.parse::<CategoryType>() {
        Ok(category) => Some(category),
        Err(e) => {
            warn!("Ignoring start category from {}: {}", source, e);
            None
        }
    }
}

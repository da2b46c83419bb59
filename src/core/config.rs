//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.muse/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MuseConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Generation backend name. Only "noop" exists today.
    pub backend: Option<String>,
    /// Override the detected platform identity (feeds the keyboard-inset
    /// table). Mostly useful for testing the table.
    pub platform: Option<String>,
    /// Explicit keyboard inset in rows; wins over the platform table.
    pub keyboard_inset_rows: Option<u16>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BACKEND: &str = "noop";

// ============================================================================
// Resolved Config (concrete values, no Options except true overrides)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub backend: String,
    pub platform: String,
    /// None = fall back to the platform table.
    pub keyboard_inset_rows: Option<u16>,
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

/// Returns the path to `~/.muse/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".muse").join("config.toml"))
}

/// Load config from `~/.muse/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MuseConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<MuseConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MuseConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(MuseConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: MuseConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Muse Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# backend = "noop"              # Generation backend ("noop" is the only one today)
# platform = "macos"            # Override detected platform for the keyboard inset table
# keyboard_inset_rows = 1       # Explicit inset; wins over the platform table
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_backend` is from the `--backend` flag (None = not specified).
pub fn resolve(config: &MuseConfig, cli_backend: Option<&str>) -> ResolvedConfig {
    // Backend: CLI → env → config → default
    let backend = cli_backend
        .map(|s| s.to_string())
        .or_else(|| std::env::var("MUSE_BACKEND").ok())
        .or_else(|| config.general.backend.clone())
        .unwrap_or_else(|| DEFAULT_BACKEND.to_string());

    // Platform: env → config → detected
    let platform = std::env::var("MUSE_PLATFORM")
        .ok()
        .or_else(|| config.general.platform.clone())
        .unwrap_or_else(|| crate::core::platform::current_platform().to_string());

    ResolvedConfig {
        backend,
        platform,
        keyboard_inset_rows: config.general.keyboard_inset_rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = MuseConfig::default();
        assert!(config.general.backend.is_none());
        assert!(config.general.platform.is_none());
        assert!(config.general.keyboard_inset_rows.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = MuseConfig::default();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.backend, DEFAULT_BACKEND);
        assert_eq!(
            resolved.platform,
            crate::core::platform::current_platform()
        );
        assert!(resolved.keyboard_inset_rows.is_none());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = MuseConfig {
            general: GeneralConfig {
                backend: Some("noop".to_string()),
                platform: Some("macos".to_string()),
                keyboard_inset_rows: Some(2),
            },
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.backend, "noop");
        assert_eq!(resolved.platform, "macos");
        assert_eq!(resolved.keyboard_inset_rows, Some(2));
    }

    #[test]
    fn test_resolve_cli_backend_wins() {
        let config = MuseConfig {
            general: GeneralConfig {
                backend: Some("from-file".to_string()),
                ..Default::default()
            },
        };
        let resolved = resolve(&config, Some("noop"));
        assert_eq!(resolved.backend, "noop");
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[general]
platform = "windows"
"#;
        let config: MuseConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.platform.as_deref(), Some("windows"));
        assert!(config.general.backend.is_none());
        assert!(config.general.keyboard_inset_rows.is_none());
    }

    #[test]
    fn test_full_toml_parses() {
        let toml_str = r#"
[general]
backend = "noop"
platform = "macos"
keyboard_inset_rows = 1
"#;
        let config: MuseConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.backend.as_deref(), Some("noop"));
        assert_eq!(config.general.keyboard_inset_rows, Some(1));
    }

    #[test]
    fn test_empty_toml_parses() {
        let config: MuseConfig = toml::from_str("").unwrap();
        assert!(config.general.backend.is_none());
    }
}

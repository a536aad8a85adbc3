//! `strutil` CLI configuration
//!
//! The library helpers never read configuration; this only feeds defaults to
//! the command-line front end.
//!
//! ```toml
//! [paths]
//! separator = "/"
//!
//! [decode]
//! strict = false
//!
//! [output]
//! color = true
//! ```
//!
//! Lookup order: an explicit path (must exist), then `$STRUTIL_CONFIG`, then
//! `<config_dir>/strutil/config.toml`. Missing optional files mean defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "STRUTIL_CONFIG";

/// Resolved configuration with every default applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Separator used by `parent` and `last` when `-s` is not given
    pub separator: char,
    /// Make `decode` strict by default
    pub strict_decode: bool,
    /// Color status lines on stderr
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: '/',
            strict_decode: false,
            color: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConfigToml {
    paths: Option<PathsToml>,
    decode: Option<DecodeToml>,
    output: Option<OutputToml>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct PathsToml {
    separator: Option<char>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct DecodeToml {
    strict: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct OutputToml {
    color: Option<bool>,
}

impl ConfigToml {
    fn resolve(self) -> Config {
        let mut config = Config::default();
        if let Some(separator) = self.paths.and_then(|p| p.separator) {
            config.separator = separator;
        }
        if let Some(strict) = self.decode.and_then(|d| d.strict) {
            config.strict_decode = strict;
        }
        if let Some(color) = self.output.and_then(|o| o.color) {
            config.color = color;
        }
        config
    }
}

impl Config {
    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let parsed: ConfigToml = toml::from_str(content).context("Invalid strutil config")?;
        Ok(parsed.resolve())
    }

    /// Read and parse a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load from `explicit`, `$STRUTIL_CONFIG` or the default location
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_with(
            explicit,
            std::env::var_os(CONFIG_ENV).map(PathBuf::from),
            default_config_path(),
        )
    }

    /// Lookup with the environment and default path supplied by the caller.
    ///
    /// `explicit` and `from_env` must name existing files; `default_path` is
    /// only read when it exists.
    pub fn load_with(
        explicit: Option<&Path>,
        from_env: Option<PathBuf>,
        default_path: Option<PathBuf>,
    ) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if let Some(path) = from_env.filter(|p| !p.as_os_str().is_empty()) {
            return Self::from_file(&path);
        }

        match default_path {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// `<config_dir>/strutil/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("strutil").join("config.toml"))
}

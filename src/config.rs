//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/navtree/navtree.toml`
//! 3. Local config: `<dir>/.navtree.toml`
//! 4. Environment variables: `NAVTREE_*` prefix, `__` between nested keys

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, Map};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::HomeRules;

/// Raw home rules for intermediate parsing (every field optional).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawHomeRules {
    pub limit: Option<usize>,
    pub marker: Option<String>,
    pub fallback_limit: Option<usize>,
}

/// Raw settings for intermediate parsing.
///
/// `None` means "not specified in this layer, inherit from below".
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub source: Option<PathBuf>,
    pub pretty: Option<bool>,
    pub home: RawHomeRules,
}

/// Unified configuration for navtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    /// Default category listing (JSON file, `-` for stdin)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
    /// Pretty-print JSON output
    pub pretty: bool,
    /// Home section promotion thresholds
    pub home: HomeRules,
}

/// Get the XDG config directory for navtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "navtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("navtree.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".navtree.toml")
}

/// Expand `~`, `$VAR` and `${VAR}` in a path string.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(raw.as_ref())
        .map(|s| PathBuf::from(s.into_owned()))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn parse_marker(marker: &str) -> Result<char, ApplicationError> {
    let mut chars = marker.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ApplicationError::Config {
            message: format!("home.marker must be a single character, got {:?}", marker),
        }),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Overlay one layer: scalars present in `overlay` replace the current value.
    pub fn merge_with(&self, overlay: &RawSettings) -> Result<Self, ApplicationError> {
        let marker = match overlay.home.marker.as_deref() {
            Some(m) => parse_marker(m)?,
            None => self.home.marker,
        };

        Ok(Self {
            source: overlay.source.clone().or_else(|| self.source.clone()),
            pretty: overlay.pretty.unwrap_or(self.pretty),
            home: HomeRules {
                limit: overlay.home.limit.unwrap_or(self.home.limit),
                marker,
                fallback_limit: overlay
                    .home
                    .fallback_limit
                    .unwrap_or(self.home.fallback_limit),
            },
        })
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.navtree.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_layers(global_config_path().as_deref(), local_dir)
    }

    /// Load settings from an explicit global file and optional local directory.
    ///
    /// Missing files are skipped; unreadable or invalid files are errors.
    pub fn load_layers(
        global_path: Option<&Path>,
        local_dir: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        Self::load_layers_with_env(global_path, local_dir, None)
    }

    /// Like [`Settings::load_layers`], but reads `NAVTREE_*` overrides from
    /// `env` instead of the process environment when given.
    pub fn load_layers_with_env(
        global_path: Option<&Path>,
        local_dir: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global) = global_path {
            if global.exists() {
                current = current.merge_with(&load_raw_settings(global)?)?;
            }
        }

        if let Some(dir) = local_dir {
            let local = local_config_path(dir);
            if local.exists() {
                current = current.merge_with(&load_raw_settings(&local)?)?;
            }
        }

        current = Self::apply_env_overrides(current, env)?;

        current.source = current.source.as_deref().map(expand_path);
        Ok(current)
    }

    /// Apply NAVTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(
        settings: Self,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("NAVTREE")
                    .prefix_separator("_")
                    .separator("__")
                    .source(env),
            )
            .build()
            .map_err(config_err)?;

        let mut overlay = RawSettings::default();
        if let Ok(val) = config.get_string("source") {
            overlay.source = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_bool("pretty") {
            overlay.pretty = Some(val);
        }
        if let Ok(val) = config.get::<usize>("home.limit") {
            overlay.home.limit = Some(val);
        }
        if let Ok(val) = config.get_string("home.marker") {
            overlay.home.marker = Some(val);
        }
        if let Ok(val) = config.get::<usize>("home.fallback_limit") {
            overlay.home.fallback_limit = Some(val);
        }

        settings.merge_with(&overlay)
    }

    /// Render settings as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}

//! # Filekit Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates filekit's configuration. Values
//! come from three layers, highest precedence first:
//!
//! 1. Project-specific `.filekit.toml` in the current directory or an ancestor
//! 2. User-specific `<config dir>/filekit/config.toml`
//! 3. Default values defined in the code
//!
//! Each file is parsed into a [`ConfigLayer`] whose keys are all optional. A
//! key set in a higher layer wins even when it sets a switch back to `false`;
//! keys no layer sets take their defaults.
//!
//! Command-line flags override whatever the configuration provides.
//!
//! ## Examples
//!
//! ```no_run
//! let cfg = filekit::core::config::load_config()?;
//! let style = cfg.path_style();
//! assert_eq!(style.ensure_trailing_separator("C:\\data"), "C:\\data\\");
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
use crate::common::fs::encoding::TextEncoding;
use crate::common::fs::paths::{PathStyle, DEFAULT_SEPARATOR};
use crate::core::error::{FilekitError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// The resolved configuration every command reads from.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Config {
    pub paths: PathsConfig,
    pub text: TextConfig,
    pub copy: CopyConfig,
    pub diff: DiffConfig,
}

/// Settings for string path parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct PathsConfig {
    /// Separator used by `split_path` and friends.
    pub separator: char,
}

/// Settings for text reads and writes.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TextConfig {
    /// Encoding name (ASCII, UTF7, UTF8, UTF32, UNICODE). Empty means default.
    pub encoding: String,
}

/// Settings for directory tree copies.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CopyConfig {
    /// Replace files that already exist at the destination.
    pub overwrite: bool,
}

/// Defaults for folder diffs.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DiffConfig {
    pub recursive: bool,
    pub check_contents: bool,
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            separator: DEFAULT_SEPARATOR,
        }
    }
}

/// One configuration file as written on disk. Keys left out stay `None` so a
/// higher layer only overrides what it actually sets.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    #[serde(default)]
    pub paths: PathsLayer,
    #[serde(default)]
    pub text: TextLayer,
    #[serde(default)]
    pub copy: CopyLayer,
    #[serde(default)]
    pub diff: DiffLayer,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PathsLayer {
    pub separator: Option<char>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TextLayer {
    pub encoding: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CopyLayer {
    pub overwrite: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DiffLayer {
    pub recursive: Option<bool>,
    pub check_contents: Option<bool>,
}

impl ConfigLayer {
    /// Lays `over` on top of `self`; every key `over` sets wins.
    pub fn merge(self, over: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            paths: PathsLayer {
                separator: over.paths.separator.or(self.paths.separator),
            },
            text: TextLayer {
                encoding: over.text.encoding.or(self.text.encoding),
            },
            copy: CopyLayer {
                overwrite: over.copy.overwrite.or(self.copy.overwrite),
            },
            diff: DiffLayer {
                recursive: over.diff.recursive.or(self.diff.recursive),
                check_contents: over.diff.check_contents.or(self.diff.check_contents),
            },
        }
    }

    /// Fills every unset key with its default.
    pub fn resolve(self) -> Config {
        let defaults = Config::default();
        Config {
            paths: PathsConfig {
                separator: self.paths.separator.unwrap_or(defaults.paths.separator),
            },
            text: TextConfig {
                encoding: self.text.encoding.unwrap_or(defaults.text.encoding),
            },
            copy: CopyConfig {
                overwrite: self.copy.overwrite.unwrap_or(defaults.copy.overwrite),
            },
            diff: DiffConfig {
                recursive: self.diff.recursive.unwrap_or(defaults.diff.recursive),
                check_contents: self
                    .diff
                    .check_contents
                    .unwrap_or(defaults.diff.check_contents),
            },
        }
    }
}

impl Config {
    /// The `PathStyle` described by `[paths]`.
    pub fn path_style(&self) -> PathStyle {
        PathStyle::new(self.paths.separator)
    }

    /// The encoding described by `[text]`, falling back to the default.
    pub fn text_encoding(&self) -> TextEncoding {
        TextEncoding::from_name(&self.text.encoding)
    }
}

const PROJECT_CONFIG_FILENAME: &str = ".filekit.toml";

/// Loads the merged and validated configuration.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let merged_config = merge_configs(user_config, project_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<ConfigLayer>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Filekit", "filekit") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<ConfigLayer>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.filekit.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from `start` towards the root looking for `.filekit.toml`.
/// Stops at the first directory containing `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

/// Parses one configuration file without applying defaults.
pub fn load_config_from_path(path: &Path) -> Result<ConfigLayer> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Option<ConfigLayer>, project: Option<ConfigLayer>) -> Config {
    user.unwrap_or_default()
        .merge(project.unwrap_or_default())
        .resolve()
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    let sep = config.paths.separator;
    if sep.is_alphanumeric() || sep.is_whitespace() {
        return Err(anyhow!(FilekitError::Config(format!(
            "Invalid path separator {:?}. Use a punctuation character such as '\\' or '/'.",
            sep
        ))));
    }
    if !config.text.encoding.is_empty()
        && TextEncoding::from_name(&config.text.encoding) == TextEncoding::Default
    {
        warn!(
            "Unrecognized text encoding '{}', falling back to the default encoding.",
            config.text.encoding
        );
    }
    info!("Configuration validation successful.");
    Ok(())
}

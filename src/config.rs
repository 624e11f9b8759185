//! User settings.
//!
//! Read from `<config dir>/deskcalc/config.toml` (or an explicit path),
//! then overridden from the environment.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculator::{AngleMode, DEFAULT_HISTORY_CAPACITY, DEFAULT_MAX_DISPLAY_LEN};

pub const ENV_HISTORY_CAPACITY: &str = "DESKCALC_HISTORY_CAPACITY";
pub const ENV_ANGLE_MODE: &str = "DESKCALC_ANGLE_MODE";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Entries kept in the history log.
    pub history_capacity: usize,
    /// Longest number the keypad lets you type.
    pub max_display_len: usize,
    /// Angle mode the keypad starts in.
    pub angle_mode: AngleMode,
    /// Angle mode for console triples.
    pub console_angle_mode: AngleMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            max_display_len: DEFAULT_MAX_DISPLAY_LEN,
            angle_mode: AngleMode::Degrees,
            console_angle_mode: AngleMode::Radians,
        }
    }
}

impl Settings {
    /// Render as TOML, in the same shape the loader reads.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize settings")
    }
}

/// Location of the per-user config file, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("deskcalc").join("config.toml"))
}

/// Load settings.
///
/// An explicit `path` must exist and parse. The default file is optional;
/// if it is broken a warning is logged and defaults are used.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let mut settings = match path {
        Some(path) => read_settings(path)?,
        None => match default_config_path() {
            Some(path) if path.exists() => read_settings(&path).unwrap_or_else(|e| {
                warn!("ignoring {}: {:#}", path.display(), e);
                Settings::default()
            }),
            _ => {
                debug!("no config file, using defaults");
                Settings::default()
            }
        },
    };

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    normalize(&mut settings);
    Ok(settings)
}

fn read_settings(path: &Path) -> Result<Settings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let settings = toml::from_str(&raw)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    debug!(path = %path.display(), "loaded config");
    Ok(settings)
}

/// Apply `DESKCALC_*` overrides. Unparseable values are logged and skipped.
pub fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(raw) = lookup(ENV_HISTORY_CAPACITY) {
        match raw.trim().parse::<usize>() {
            Ok(capacity) => settings.history_capacity = capacity,
            Err(_) => warn!("{} is not a number: {}", ENV_HISTORY_CAPACITY, raw),
        }
    }
    if let Some(raw) = lookup(ENV_ANGLE_MODE) {
        match raw.trim().parse::<AngleMode>() {
            Ok(mode) => settings.angle_mode = mode,
            Err(e) => warn!("{}: {}", ENV_ANGLE_MODE, e),
        }
    }
}

fn normalize(settings: &mut Settings) {
    if settings.history_capacity == 0 {
        warn!("history_capacity must be at least 1, using 1");
        settings.history_capacity = 1;
    }
}

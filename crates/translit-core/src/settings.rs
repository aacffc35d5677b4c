//! Run settings loaded from TOML.
//!
//! Defaults are embedded via `include_str!("default_settings.toml")`; a custom
//! file replaces them wholesale.

use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub data: DataSettings,
    pub io: IoSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataSettings {
    /// External row-file directory; `None` means the embedded tables.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IoSettings {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Settings {
    pub fn defaults() -> Result<Self, SettingsError> {
        parse_settings_toml(DEFAULT_SETTINGS_TOML)
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_empty {
        ($value:expr, $field:literal) => {
            if $value.as_os_str().is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: $field.to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        };
    }

    check_non_empty!(s.io.input, "io.input");
    check_non_empty!(s.io.output, "io.output");
    if let Some(dir) = &s.data.dir {
        check_non_empty!(dir, "data.dir");
    }
    if s.io.input == s.io.output {
        return Err(SettingsError::InvalidValue {
            field: "io.output".to_string(),
            reason: "must differ from io.input".to_string(),
        });
    }
    Ok(())
}

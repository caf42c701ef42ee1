//! Plugin settings: one hotkey string per conversion command.
//!
//! Persisted data is merged onto the built-in defaults key by key: a missing
//! `hotkeys` record takes every default, and a partial one keeps what it has
//! and fills the rest individually. An empty string is kept as-is and means
//! the user cleared that shortcut.
//!
//! Default values are embedded via `include_str!("default_settings.json")`.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::conversion::ConversionType;

pub const DEFAULT_SETTINGS_JSON: &str = include_str!("default_settings.json");

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("JSON parse error: {0}")]
    Parse(String),
    #[error("JSON serialize error: {0}")]
    Serialize(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginSettings {
    pub hotkeys: HotkeySettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotkeySettings {
    pub kana: String,
    pub hiragana: String,
    pub katakana: String,
    pub romaji: String,
}

/// Shape of the embedded defaults. Kept apart from [`HotkeySettings`], whose
/// `#[serde(default)]` would otherwise call back into `Default`.
#[derive(Deserialize)]
struct EmbeddedDefaults {
    hotkeys: HashMap<String, String>,
}

fn embedded_hotkeys() -> &'static HashMap<String, String> {
    static INSTANCE: OnceLock<HashMap<String, String>> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let defaults: EmbeddedDefaults = serde_json::from_str(DEFAULT_SETTINGS_JSON)
            .expect("default settings JSON must be valid");
        defaults.hotkeys
    })
}

impl Default for HotkeySettings {
    fn default() -> Self {
        let embedded = embedded_hotkeys();
        let get = |conversion: ConversionType| {
            embedded
                .get(conversion.as_str())
                .cloned()
                .unwrap_or_default()
        };
        Self {
            kana: get(ConversionType::Kana),
            hiragana: get(ConversionType::Hiragana),
            katakana: get(ConversionType::Katakana),
            romaji: get(ConversionType::Romaji),
        }
    }
}

impl HotkeySettings {
    pub fn get(&self, conversion: ConversionType) -> &str {
        match conversion {
            ConversionType::Kana => &self.kana,
            ConversionType::Hiragana => &self.hiragana,
            ConversionType::Katakana => &self.katakana,
            ConversionType::Romaji => &self.romaji,
        }
    }

    pub fn set(&mut self, conversion: ConversionType, hotkey: impl Into<String>) {
        let slot = match conversion {
            ConversionType::Kana => &mut self.kana,
            ConversionType::Hiragana => &mut self.hiragana,
            ConversionType::Katakana => &mut self.katakana,
            ConversionType::Romaji => &mut self.romaji,
        };
        *slot = hotkey.into();
    }
}

impl PluginSettings {
    /// Merge whatever the host had persisted onto the defaults.
    ///
    /// `None` and JSON `null` both mean "nothing saved yet".
    pub fn from_persisted(data: Option<serde_json::Value>) -> Result<Self, SettingsError> {
        match data {
            None | Some(serde_json::Value::Null) => Ok(Self::default()),
            Some(value) => {
                serde_json::from_value(value).map_err(|e| SettingsError::Parse(e.to_string()))
            }
        }
    }

    pub fn to_value(&self) -> Result<serde_json::Value, SettingsError> {
        serde_json::to_value(self).map_err(|e| SettingsError::Serialize(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, SettingsError> {
        serde_json::to_string_pretty(self).map_err(|e| SettingsError::Serialize(e.to_string()))
    }
}

/// Parse settings JSON text, merging onto the defaults.
pub fn parse_settings_json(json: &str) -> Result<PluginSettings, SettingsError> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| SettingsError::Parse(e.to_string()))?;
    PluginSettings::from_persisted(Some(value))
}

/// Returns the embedded default settings JSON content.
pub fn default_json() -> &'static str {
    DEFAULT_SETTINGS_JSON
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Target script of a selection conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionType {
    Kana,
    Hiragana,
    Katakana,
    Romaji,
}

impl ConversionType {
    pub const ALL: [ConversionType; 4] = [
        ConversionType::Kana,
        ConversionType::Hiragana,
        ConversionType::Katakana,
        ConversionType::Romaji,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ConversionType::Kana => "kana",
            ConversionType::Hiragana => "hiragana",
            ConversionType::Katakana => "katakana",
            ConversionType::Romaji => "romaji",
        }
    }

    /// Command id registered with the host, e.g. `convert-hiragana`.
    pub fn command_id(self) -> String {
        format!("convert-{}", self.as_str())
    }

    /// Human-readable command name shown in the command palette.
    pub fn command_name(self) -> &'static str {
        match self {
            ConversionType::Kana => "Replace Romaji with Kana",
            ConversionType::Hiragana => "Replace Romaji with Hiragana",
            ConversionType::Katakana => "Replace Romaji with Katakana",
            ConversionType::Romaji => "Replace Kana with Romaji",
        }
    }

    /// Inverse of [`ConversionType::command_id`].
    pub fn from_command_id(id: &str) -> Option<Self> {
        id.strip_prefix("convert-")?.parse().ok()
    }
}

impl fmt::Display for ConversionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown conversion type: {0}")]
pub struct UnknownConversionType(pub String);

impl FromStr for ConversionType {
    type Err = UnknownConversionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kana" => Ok(ConversionType::Kana),
            "hiragana" => Ok(ConversionType::Hiragana),
            "katakana" => Ok(ConversionType::Katakana),
            "romaji" => Ok(ConversionType::Romaji),
            other => Err(UnknownConversionType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for conversion in ConversionType::ALL {
            assert_eq!(conversion.as_str().parse::<ConversionType>(), Ok(conversion));
        }
    }

    #[test]
    fn unknown_tag_is_an_error() {
        let err = "cyrillic".parse::<ConversionType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown conversion type: cyrillic");
        assert!("Kana".parse::<ConversionType>().is_err());
    }

    #[test]
    fn command_ids_and_names() {
        assert_eq!(ConversionType::Kana.command_id(), "convert-kana");
        assert_eq!(ConversionType::Romaji.command_id(), "convert-romaji");
        assert_eq!(
            ConversionType::Katakana.command_name(),
            "Replace Romaji with Katakana"
        );
        assert_eq!(
            ConversionType::from_command_id("convert-hiragana"),
            Some(ConversionType::Hiragana)
        );
        assert_eq!(ConversionType::from_command_id("hiragana"), None);
        assert_eq!(ConversionType::from_command_id("convert-latin"), None);
    }
}

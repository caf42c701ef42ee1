//! Parsing of human-readable shortcut strings such as `Ctrl+Shift+K`.

use std::fmt;

use tracing::warn;

/// One keyboard shortcut: zero or more modifiers and a trigger key.
///
/// Modifier and key names are passed through as written; the host decides
/// whether it recognizes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHotkey {
    pub modifiers: Vec<String>,
    pub key: String,
}

impl ParsedHotkey {
    pub fn new<M, S>(modifiers: M, key: impl Into<String>) -> Self
    where
        M: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            modifiers: modifiers.into_iter().map(Into::into).collect(),
            key: key.into(),
        }
    }
}

impl fmt::Display for ParsedHotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in &self.modifiers {
            write!(f, "{modifier}+")?;
        }
        f.write_str(&self.key)
    }
}

/// Parse `Mod+Mod+Key` into at most one binding.
///
/// The result is a list because hosts accept alternative bindings per
/// command; an empty list means no shortcut is registered. Missing, blank,
/// or key-less strings (`"+"`, `"Ctrl+"`) log a warning and yield `[]`.
/// Empty modifier tokens (`"+K"`, `"Ctrl++K"`) are dropped.
pub fn parse_hotkey(hotkey: Option<&str>) -> Vec<ParsedHotkey> {
    let Some(raw) = hotkey.filter(|s| !s.trim().is_empty()) else {
        warn!("no hotkey configured, command will have no default shortcut");
        return Vec::new();
    };

    let mut tokens: Vec<&str> = raw.split('+').map(str::trim).collect();
    let key = match tokens.pop() {
        Some(key) if !key.is_empty() => key,
        _ => {
            warn!(hotkey = raw, "hotkey has no trigger key, ignoring");
            return Vec::new();
        }
    };

    tokens.retain(|t| !t.is_empty());
    vec![ParsedHotkey::new(tokens, key)]
}

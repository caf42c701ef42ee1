//! Romaji ⇄ kana conversion of editor selections.
//!
//! - [`dispatch`] picks a transliteration for a [`ConversionType`]
//! - [`romaji`] is the built-in table-driven transliterator
//! - [`hotkey`] parses `Ctrl+Shift+K`-style shortcut strings
//! - [`settings`] holds the per-command hotkeys and their defaults

pub mod conversion;
pub mod dispatch;
pub mod hotkey;
pub mod romaji;
pub mod settings;
pub mod unicode;

pub use conversion::{ConversionType, UnknownConversionType};
pub use dispatch::{convert, convert_tagged, BuiltinTransliterator, ConversionDispatcher, Transliterator};
pub use hotkey::{parse_hotkey, ParsedHotkey};
pub use settings::{HotkeySettings, PluginSettings, SettingsError};

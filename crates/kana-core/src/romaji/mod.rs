//! Romaji ⇄ kana transliteration.
//!
//! Romaji is converted through a table-driven lookup, incrementally as an
//! IME would, handling sokuon (っ), hatsuon (ん), and yōon (きゃ). Kana is
//! romanized back with a Hepburn-style reverse table.

mod config;
mod convert;
mod romanize;
mod table;
mod trie;

pub use config::{parse_romaji_toml, RomajiConfigError};
pub use convert::{convert_romaji, to_hiragana, to_kana, to_katakana, RomajiConvertResult};
pub use romanize::to_romaji;
pub use table::default_toml;
pub use trie::{RomajiTrie, TrieLookupResult};

pub use crate::unicode::is_romaji;

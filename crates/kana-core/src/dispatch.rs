//! Selection conversion: picks a transliteration by [`ConversionType`].
//!
//! Romaji → kana conversions only run when the classifier says the input is
//! romaji, so already-converted or mixed text is left alone. Kana → romaji
//! always runs.

use tracing::debug;

use crate::conversion::ConversionType;
use crate::romaji;

/// Script conversion capability the dispatcher delegates to.
pub trait Transliterator {
    fn to_kana(&self, input: &str) -> String;
    fn to_hiragana(&self, input: &str) -> String;
    fn to_katakana(&self, input: &str) -> String;
    fn to_romaji(&self, input: &str) -> String;
    fn is_romaji(&self, input: &str) -> bool;
}

/// The table-driven converter in [`crate::romaji`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTransliterator;

impl Transliterator for BuiltinTransliterator {
    fn to_kana(&self, input: &str) -> String {
        romaji::to_kana(input)
    }

    fn to_hiragana(&self, input: &str) -> String {
        romaji::to_hiragana(input)
    }

    fn to_katakana(&self, input: &str) -> String {
        romaji::to_katakana(input)
    }

    fn to_romaji(&self, input: &str) -> String {
        romaji::to_romaji(input)
    }

    fn is_romaji(&self, input: &str) -> bool {
        romaji::is_romaji(input)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConversionDispatcher<T = BuiltinTransliterator> {
    transliterator: T,
}

impl<T: Transliterator> ConversionDispatcher<T> {
    pub fn new(transliterator: T) -> Self {
        Self { transliterator }
    }

    pub fn transliterator(&self) -> &T {
        &self.transliterator
    }

    pub fn convert(&self, selection: &str, conversion: ConversionType) -> String {
        let t = &self.transliterator;
        match conversion {
            ConversionType::Kana if t.is_romaji(selection) => t.to_kana(selection),
            ConversionType::Hiragana if t.is_romaji(selection) => t.to_hiragana(selection),
            ConversionType::Katakana if t.is_romaji(selection) => t.to_katakana(selection),
            ConversionType::Kana | ConversionType::Hiragana | ConversionType::Katakana => {
                debug!(%conversion, "selection is not romaji, leaving unchanged");
                selection.to_string()
            }
            ConversionType::Romaji => t.to_romaji(selection),
        }
    }

    /// Convert by string tag. Unknown tags leave the selection unchanged.
    pub fn convert_tagged(&self, selection: &str, tag: &str) -> String {
        match tag.parse::<ConversionType>() {
            Ok(conversion) => self.convert(selection, conversion),
            Err(err) => {
                debug!(%err, "returning selection unchanged");
                selection.to_string()
            }
        }
    }
}

/// Convert with the built-in transliterator.
pub fn convert(selection: &str, conversion: ConversionType) -> String {
    ConversionDispatcher::new(BuiltinTransliterator).convert(selection, conversion)
}

/// Convert by string tag with the built-in transliterator.
pub fn convert_tagged(selection: &str, tag: &str) -> String {
    ConversionDispatcher::new(BuiltinTransliterator).convert_tagged(selection, tag)
}

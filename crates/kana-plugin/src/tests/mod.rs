
use std::cell::RefCell;

use kana_core::Transliterator;

use super::Editor;

/// Editor double that records every replacement it receives.
pub(super) struct RecordingEditor {
    pub selection: String,
    pub replacements: Vec<String>,
}

impl RecordingEditor {
    pub fn selecting(text: &str) -> Self {
        Self {
            selection: text.to_string(),
            replacements: Vec::new(),
        }
    }
}

impl Editor for RecordingEditor {
    fn selection(&self) -> String {
        self.selection.clone()
    }

    fn replace_selection(&mut self, replacement: &str) {
        self.replacements.push(replacement.to_string());
        self.selection = replacement.to_string();
    }
}

/// Transliterator that upper-cases and logs which capability ran.
#[derive(Default)]
pub(super) struct Shouting {
    pub calls: RefCell<Vec<&'static str>>,
}

impl Shouting {
    fn shout(&self, name: &'static str, input: &str) -> String {
        self.calls.borrow_mut().push(name);
        input.to_uppercase()
    }
}

impl Transliterator for Shouting {
    fn to_kana(&self, input: &str) -> String {
        self.shout("to_kana", input)
    }
    fn to_hiragana(&self, input: &str) -> String {
        self.shout("to_hiragana", input)
    }
    fn to_katakana(&self, input: &str) -> String {
        self.shout("to_katakana", input)
    }
    fn to_romaji(&self, input: &str) -> String {
        self.shout("to_romaji", input)
    }
    fn is_romaji(&self, input: &str) -> bool {
        input.is_ascii() && !input.is_empty()
    }
}

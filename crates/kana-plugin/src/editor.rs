use std::ops::Range;

/// The host editor's view of the current selection.
pub trait Editor {
    fn selection(&self) -> String;
    fn replace_selection(&mut self, replacement: &str);
}

/// A plain-text editor with one contiguous selection (byte offsets).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    selection: Range<usize>,
}

impl TextBuffer {
    /// A buffer with all of `text` selected.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let selection = 0..text.len();
        Self { text, selection }
    }

    /// Returns `None` if `selection` is out of bounds or splits a character.
    pub fn with_selection(text: impl Into<String>, selection: Range<usize>) -> Option<Self> {
        let text = text.into();
        let valid = selection.start <= selection.end
            && text.is_char_boundary(selection.start)
            && text.is_char_boundary(selection.end);
        valid.then_some(Self { text, selection })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selected_range(&self) -> Range<usize> {
        self.selection.clone()
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl Editor for TextBuffer {
    fn selection(&self) -> String {
        self.text[self.selection.clone()].to_string()
    }

    /// Replaces the selected span and leaves the cursor after the insertion.
    fn replace_selection(&mut self, replacement: &str) {
        let start = self.selection.start;
        self.text.replace_range(self.selection.clone(), replacement);
        let end = start + replacement.len();
        self.selection = end..end;
    }
}

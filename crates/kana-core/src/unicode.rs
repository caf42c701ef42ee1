//! Character-level Unicode classification for Japanese text.

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF). Includes ー and ・.
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// Characters that may appear in romaji text: all of ASCII, Hepburn macron
/// vowels, and typographic quotes.
pub fn is_romaji_char(c: char) -> bool {
    c.is_ascii()
        || matches!(
            c,
            'Ā' | 'ā' | 'Ē' | 'ē' | 'Ī' | 'ī' | 'Ō' | 'ō' | 'Ū' | 'ū' | '‘' | '’' | '“' | '”'
        )
}

/// True when `s` is non-empty and consists only of romaji characters.
pub fn is_romaji(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_romaji_char)
}

/// Hiragana that have a katakana twin exactly 0x60 code points above:
/// ぁ..ゖ and the iteration marks ゝゞ.
fn has_katakana_twin(c: char) -> bool {
    ('\u{3041}'..='\u{3096}').contains(&c) || c == 'ゝ' || c == 'ゞ'
}

/// Convert a hiragana string to katakana.
/// Non-hiragana characters (ー, ASCII, etc.) are passed through unchanged.
pub fn hiragana_to_katakana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if has_katakana_twin(c) {
                char::from_u32(c as u32 + 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Convert a katakana string to hiragana.
/// ー, ・, ヷ..ヺ and non-katakana characters pass through unchanged.
pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars()
        .map(|c| {
            let shifted = (c as u32).checked_sub(0x60).and_then(char::from_u32);
            match shifted {
                Some(h) if is_katakana(c) && has_katakana_twin(h) => h,
                _ => c,
            }
        })
        .collect()
}

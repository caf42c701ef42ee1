use tracing::debug_span;

use super::trie::{RomajiTrie, TrieLookupResult};
use crate::unicode::hiragana_to_katakana;

pub struct RomajiConvertResult {
    pub composed_kana: String,
    pub pending_romaji: String,
}

/// Map kana vowel chars to their romaji equivalents for collapse_latin_kana.
fn kana_vowel_to_romaji(ch: char) -> Option<char> {
    match ch {
        'あ' => Some('a'),
        'い' => Some('i'),
        'う' => Some('u'),
        'え' => Some('e'),
        'お' => Some('o'),
        _ => None,
    }
}

fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// Collapse sequences of latin consonant(s) + kana vowel into a single kana.
/// e.g. "kあ" → "か", "shあ" → "しゃ"
fn collapse_latin_kana(input: &str, trie: &RomajiTrie) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut result = String::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        if ch.is_ascii_lowercase() {
            let mut j = i + 1;
            while j < chars.len() && chars[j].is_ascii_lowercase() {
                j += 1;
            }

            if let Some(vowel) = chars.get(j).copied().and_then(kana_vowel_to_romaji) {
                let latin: String = chars[i..j].iter().collect();
                let candidate = format!("{latin}{vowel}");
                match trie.lookup(&candidate) {
                    TrieLookupResult::Exact(ref kana)
                    | TrieLookupResult::ExactAndPrefix(ref kana) => {
                        result.push_str(kana);
                        i = j + 1;
                        continue;
                    }
                    _ => {}
                }
            }
        }

        result.push(ch);
        i += 1;
    }

    result
}

/// Convert pending romaji to kana, one keystroke batch at a time.
///
/// When `force` is true, ambiguous sequences are resolved immediately
/// (e.g. trailing "n" becomes "ん").
pub fn convert_romaji(
    composed_kana: &str,
    pending_romaji: &str,
    force: bool,
) -> RomajiConvertResult {
    convert_romaji_with(RomajiTrie::global(), composed_kana, pending_romaji, force)
}

fn convert_romaji_with(
    trie: &RomajiTrie,
    composed_kana: &str,
    pending_romaji: &str,
    force: bool,
) -> RomajiConvertResult {
    let mut composed = composed_kana.to_string();
    let mut pending = pending_romaji.to_string();

    let mut changed = true;
    while !pending.is_empty() && changed {
        changed = false;

        match trie.lookup(&pending) {
            TrieLookupResult::Exact(kana) => {
                composed.push_str(&kana);
                pending.clear();
                changed = true;
            }

            TrieLookupResult::ExactAndPrefix(kana) => {
                if force {
                    composed.push_str(&kana);
                    pending.clear();
                    changed = true;
                }
            }

            TrieLookupResult::Prefix => {
                if !force {
                    break;
                }
                handle_no_match(trie, &mut composed, &mut pending, force, &mut changed);
            }

            TrieLookupResult::None => {
                handle_no_match(trie, &mut composed, &mut pending, force, &mut changed);
            }
        }
    }

    if composed.chars().any(|c| c.is_ascii_lowercase()) {
        composed = collapse_latin_kana(&composed, trie);
    }

    RomajiConvertResult {
        composed_kana: composed,
        pending_romaji: pending,
    }
}

/// Handle the case where `pending` has no full match: try sub-prefix,
/// sokuon/hatsuon detection, or force-drain.
fn handle_no_match(
    trie: &RomajiTrie,
    composed: &mut String,
    pending: &mut String,
    force: bool,
    changed: &mut bool,
) {
    // Longest sub-prefix first. ExactAndPrefix is consumed here regardless of
    // `force`: the full pending already failed, so no longer match can follow.
    for len in (1..pending.len()).rev() {
        if !pending.is_char_boundary(len) {
            continue;
        }
        match trie.lookup(&pending[..len]) {
            TrieLookupResult::Exact(kana) | TrieLookupResult::ExactAndPrefix(kana) => {
                composed.push_str(&kana);
                *pending = pending[len..].to_string();
                *changed = true;
                return;
            }
            _ => {}
        }
    }

    let mut chars = pending.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(second)) => {
            let doubled = first == second || (first == 't' && second == 'c');
            if doubled && first != 'n' && first.is_ascii_alphabetic() && !is_vowel(first) {
                // Sokuon (っ): doubled consonant, or "tch"
                composed.push('っ');
                pending.remove(0);
                *changed = true;
            } else if first == 'n' && !is_vowel(second) && second != 'n' && second != 'y' {
                // Hatsuon (ん): n before non-vowel, non-n, non-y
                composed.push('ん');
                pending.remove(0);
                *changed = true;
            } else if force {
                let c = pending.remove(0);
                composed.push(c);
                *changed = true;
            }
            // else: leave in pending (changed stays false → loop exits)
        }
        _ => {
            if *pending == "n" {
                if !force {
                    // "n" stays pending (could be prefix of "na", etc.)
                    return;
                }
                composed.push('ん');
            } else {
                // Unrecognized single chars pass through
                composed.push_str(pending);
            }
            pending.clear();
            *changed = true;
        }
    }
}

/// Whether `ch` should be fed to the converter rather than passed through.
fn feeds(trie: &RomajiTrie, pending: &str, ch: char) -> bool {
    if ch.is_ascii_alphabetic() {
        return true;
    }
    if !ch.is_ascii_graphic() {
        return false;
    }
    let mut buf = [0u8; 4];
    let single = ch.encode_utf8(&mut buf);
    if trie.lookup(single) != TrieLookupResult::None {
        return true;
    }
    let mut extended = String::with_capacity(pending.len() + 1);
    extended.push_str(pending);
    extended.push(ch);
    !pending.is_empty() && trie.lookup(&extended) != TrieLookupResult::None
}

fn flush(trie: &RomajiTrie, out: &mut String, pending: &mut String) {
    if pending.is_empty() {
        return;
    }
    let r = convert_romaji_with(trie, "", pending, true);
    out.push_str(&r.composed_kana);
    out.push_str(&r.pending_romaji);
    pending.clear();
}

/// Hepburn macron vowels spelled out the way the table reads them.
fn long_vowel(c: char) -> Option<&'static str> {
    match c {
        'ā' | 'Ā' => Some("aa"),
        'ī' | 'Ī' => Some("ii"),
        'ū' | 'Ū' => Some("uu"),
        'ē' | 'Ē' => Some("ee"),
        'ō' | 'Ō' => Some("ou"),
        _ => None,
    }
}

/// Convert a whole romaji string to hiragana.
///
/// Input is lowercased first and macron vowels are expanded (`ō` → `ou`). Characters the table cannot start or continue
/// (spaces, digits, kana, ...) pass through unchanged and terminate the
/// current syllable. A doubled `n` before a vowel or `y` yields ん followed
/// by an n-syllable, so `konnichiwa` reads こんにちわ rather than こんいちわ.
pub fn to_hiragana(input: &str) -> String {
    to_hiragana_with(RomajiTrie::global(), input)
}

fn to_hiragana_with(trie: &RomajiTrie, input: &str) -> String {
    let _span = debug_span!("to_hiragana", len = input.len()).entered();

    let mut chars: Vec<char> = Vec::with_capacity(input.len());
    for c in input.chars() {
        match long_vowel(c) {
            Some(expanded) => chars.extend(expanded.chars()),
            None => chars.push(c.to_ascii_lowercase()),
        }
    }
    let mut out = String::with_capacity(input.len() * 3);
    let mut pending = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        if !feeds(trie, &pending, ch) {
            flush(trie, &mut out, &mut pending);
            out.push(ch);
            continue;
        }

        if ch == 'n'
            && pending == "n"
            && chars
                .get(i + 1)
                .is_some_and(|&next| is_vowel(next) || next == 'y')
        {
            out.push('ん');
            pending.clear();
        }

        pending.push(ch);
        let r = convert_romaji_with(trie, "", &pending, false);
        out.push_str(&r.composed_kana);
        pending = r.pending_romaji;

        // Pending can only grow past the longest key on unmatchable input;
        // drain it from the front so every step stays bounded.
        while pending.len() > trie.max_key_len() {
            let c = pending.remove(0);
            out.push(c);
            let r = convert_romaji_with(trie, "", &pending, false);
            out.push_str(&r.composed_kana);
            pending = r.pending_romaji;
        }
    }

    flush(trie, &mut out, &mut pending);
    out
}

/// Convert romaji to katakana. Existing hiragana is shifted as well.
pub fn to_katakana(input: &str) -> String {
    hiragana_to_katakana(&to_hiragana(input))
}

/// Convert romaji to kana, choosing the script per word: all-uppercase words
/// become katakana, everything else hiragana.
pub fn to_kana(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 3);
    for (segment, is_word) in split_words(input) {
        if is_word && is_shouted(segment) {
            out.push_str(&to_katakana(segment));
        } else {
            out.push_str(&to_hiragana(segment));
        }
    }
    out
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '\'' || long_vowel(c).is_some()
}

fn is_shouted(word: &str) -> bool {
    let mut letters = word.chars().filter(|c| c.is_alphabetic()).peekable();
    letters.peek().is_some() && letters.all(char::is_uppercase)
}

/// Split into alternating runs of word characters and everything else.
fn split_words(input: &str) -> Vec<(&str, bool)> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;
    for (idx, c) in input.char_indices() {
        let word = is_word_char(c);
        match current {
            Some(prev) if prev != word => {
                segments.push((&input[start..idx], prev));
                start = idx;
            }
            _ => {}
        }
        current = Some(word);
    }
    if let Some(word) = current {
        segments.push((&input[start..], word));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(kana: &str, pending: &str, force: bool) -> RomajiConvertResult {
        convert_romaji(kana, pending, force)
    }

    #[test]
    fn test_basic_ka() {
        let r = convert("", "ka", false);
        assert_eq!(r.composed_kana, "か");
        assert_eq!(r.pending_romaji, "");
    }

    #[test]
    fn test_sokuon_kk() {
        let r = convert("", "kk", false);
        assert_eq!(r.composed_kana, "っ");
        assert_eq!(r.pending_romaji, "k");
    }

    #[test]
    fn test_sokuon_tch() {
        let r = convert("", "tchi", false);
        assert_eq!(r.composed_kana, "っち");
        assert_eq!(r.pending_romaji, "");
    }

    #[test]
    fn test_hatsuon_nk() {
        let r = convert("", "nk", false);
        assert_eq!(r.composed_kana, "ん");
        assert_eq!(r.pending_romaji, "k");
    }

    #[test]
    fn test_n_force() {
        let r = convert("", "n", true);
        assert_eq!(r.composed_kana, "ん");
        assert_eq!(r.pending_romaji, "");
    }

    #[test]
    fn test_n_no_force() {
        let r = convert("", "n", false);
        assert_eq!(r.composed_kana, "");
        assert_eq!(r.pending_romaji, "n");
    }

    #[test]
    fn test_consecutive_kakiku() {
        let r = convert("", "kakiku", false);
        assert_eq!(r.composed_kana, "かきく");
        assert_eq!(r.pending_romaji, "");
    }

    #[test]
    fn test_existing_composed_preserved() {
        let r = convert("あ", "ka", false);
        assert_eq!(r.composed_kana, "あか");
    }

    #[test]
    fn test_mixed_kyouha() {
        let r = convert("", "kyouha", false);
        assert_eq!(r.composed_kana, "きょうは");
        assert_eq!(r.pending_romaji, "");
    }

    #[test]
    fn test_collapse_multi_latin() {
        let r = convert("shあ", "", false);
        assert_eq!(r.composed_kana, "しゃ");
    }

    #[test]
    fn test_no_collapse_non_vowel() {
        let r = convert("kが", "", false);
        assert_eq!(r.composed_kana, "kが");
    }

    #[test]
    fn test_invalid_kqy_force() {
        let r = convert("", "kqy", true);
        assert_eq!(r.composed_kana, "kqy");
        assert_eq!(r.pending_romaji, "");
    }

    #[test]
    fn to_hiragana_greeting() {
        assert_eq!(to_hiragana("konnichiwa"), "こんにちわ");
        assert_eq!(to_hiragana("onna"), "おんな");
        assert_eq!(to_hiragana("konnnichiwa"), "こんにちわ");
    }

    #[test]
    fn to_hiragana_hatsuon_and_apostrophe() {
        assert_eq!(to_hiragana("kin'en"), "きんえん");
        assert_eq!(to_hiragana("shinbun"), "しんぶん");
        assert_eq!(to_hiragana("hon"), "ほん");
    }

    #[test]
    fn to_hiragana_sokuon() {
        assert_eq!(to_hiragana("kitte"), "きって");
        assert_eq!(to_hiragana("matcha"), "まっちゃ");
        assert_eq!(to_hiragana("kocchi"), "こっち");
    }

    #[test]
    fn to_hiragana_passes_through_spaces_and_digits() {
        assert_eq!(to_hiragana("hon desu"), "ほん です");
        assert_eq!(to_hiragana("2ko"), "2こ");
        assert_eq!(to_hiragana("kaあ"), "かあ");
    }

    #[test]
    fn to_hiragana_lowercases() {
        assert_eq!(to_hiragana("SUSHI"), "すし");
    }

    #[test]
    fn to_hiragana_punctuation() {
        assert_eq!(to_hiragana("hai."), "はい。");
        assert_eq!(to_hiragana("ra-men"), "らーめん");
        assert_eq!(to_hiragana("[hai]"), "「はい」");
    }

    #[test]
    fn to_hiragana_unmatchable_input_passes_through() {
        assert_eq!(to_hiragana("xq"), "xq");
        assert_eq!(to_hiragana("qwrtp"), "qwrtp");
    }

    #[test]
    fn to_hiragana_empty() {
        assert_eq!(to_hiragana(""), "");
    }

    #[test]
    fn to_katakana_basic() {
        assert_eq!(to_katakana("ra-men"), "ラーメン");
        assert_eq!(to_katakana("konpyu-ta-"), "コンピューター");
        assert_eq!(to_katakana("faito"), "ファイト");
    }

    #[test]
    fn to_kana_uses_case_for_script() {
        assert_eq!(to_kana("sushi"), "すし");
        assert_eq!(to_kana("SUSHI"), "スシ");
        assert_eq!(to_kana("watashi ha JON desu"), "わたし は ジョン です");
    }

    #[test]
    fn macron_vowels_are_spelled_out() {
        assert_eq!(to_hiragana("Tōkyō"), "とうきょう");
        assert_eq!(to_hiragana("rāmen"), "らあめん");
        assert_eq!(to_hiragana("ojīsan"), "おじいさん");
        assert_eq!(to_kana("Tōkyō"), "とうきょう");
        assert_eq!(to_kana("TŌKYŌ"), "トウキョウ");
        assert_eq!(to_katakana("sūpā"), "スウパア");
    }

    #[test]
    fn split_words_alternates() {
        assert_eq!(
            split_words("ka-DO n'"),
            vec![("ka", true), ("-", false), ("DO", true), (" ", false), ("n'", true)]
        );
        assert!(split_words("").is_empty());
    }
}

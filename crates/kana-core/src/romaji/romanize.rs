//! Kana → romaji (Hepburn-style, as produced by the default table).

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::unicode::katakana_to_hiragana;

const DIGRAPHS: &[(&str, &str)] = &[
    ("きゃ", "kya"),
    ("きゅ", "kyu"),
    ("きょ", "kyo"),
    ("きぇ", "kye"),
    ("ぎゃ", "gya"),
    ("ぎゅ", "gyu"),
    ("ぎょ", "gyo"),
    ("しゃ", "sha"),
    ("しゅ", "shu"),
    ("しぇ", "she"),
    ("しょ", "sho"),
    ("じゃ", "ja"),
    ("じゅ", "ju"),
    ("じぇ", "je"),
    ("じょ", "jo"),
    ("ちゃ", "cha"),
    ("ちゅ", "chu"),
    ("ちぇ", "che"),
    ("ちょ", "cho"),
    ("ぢゃ", "dya"),
    ("ぢゅ", "dyu"),
    ("ぢぇ", "dye"),
    ("ぢょ", "dyo"),
    ("てぃ", "thi"),
    ("でぃ", "dhi"),
    ("とぅ", "twu"),
    ("どぅ", "dwu"),
    ("にゃ", "nya"),
    ("にゅ", "nyu"),
    ("にぇ", "nye"),
    ("にょ", "nyo"),
    ("ひゃ", "hya"),
    ("ひゅ", "hyu"),
    ("ひぇ", "hye"),
    ("ひょ", "hyo"),
    ("びゃ", "bya"),
    ("びゅ", "byu"),
    ("びぇ", "bye"),
    ("びょ", "byo"),
    ("ぴゃ", "pya"),
    ("ぴゅ", "pyu"),
    ("ぴぇ", "pye"),
    ("ぴょ", "pyo"),
    ("みゃ", "mya"),
    ("みゅ", "myu"),
    ("みぇ", "mye"),
    ("みょ", "myo"),
    ("りゃ", "rya"),
    ("りゅ", "ryu"),
    ("りぇ", "rye"),
    ("りょ", "ryo"),
    ("ふぁ", "fa"),
    ("ふぃ", "fi"),
    ("ふぇ", "fe"),
    ("ふぉ", "fo"),
    ("ふゅ", "fyu"),
    ("うぃ", "wi"),
    ("うぇ", "we"),
    ("うぉ", "who"),
    ("いぇ", "ye"),
    ("ゔぁ", "va"),
    ("ゔぃ", "vi"),
    ("ゔぇ", "ve"),
    ("ゔぉ", "vo"),
];

const MONOGRAPHS: &[(char, &str)] = &[
    ('あ', "a"),
    ('い', "i"),
    ('う', "u"),
    ('え', "e"),
    ('お', "o"),
    ('か', "ka"),
    ('き', "ki"),
    ('く', "ku"),
    ('け', "ke"),
    ('こ', "ko"),
    ('が', "ga"),
    ('ぎ', "gi"),
    ('ぐ', "gu"),
    ('げ', "ge"),
    ('ご', "go"),
    ('さ', "sa"),
    ('し', "shi"),
    ('す', "su"),
    ('せ', "se"),
    ('そ', "so"),
    ('ざ', "za"),
    ('じ', "ji"),
    ('ず', "zu"),
    ('ぜ', "ze"),
    ('ぞ', "zo"),
    ('た', "ta"),
    ('ち', "chi"),
    ('つ', "tsu"),
    ('て', "te"),
    ('と', "to"),
    ('だ', "da"),
    ('ぢ', "di"),
    ('づ', "du"),
    ('で', "de"),
    ('ど', "do"),
    ('な', "na"),
    ('に', "ni"),
    ('ぬ', "nu"),
    ('ね', "ne"),
    ('の', "no"),
    ('は', "ha"),
    ('ひ', "hi"),
    ('ふ', "fu"),
    ('へ', "he"),
    ('ほ', "ho"),
    ('ば', "ba"),
    ('び', "bi"),
    ('ぶ', "bu"),
    ('べ', "be"),
    ('ぼ', "bo"),
    ('ぱ', "pa"),
    ('ぴ', "pi"),
    ('ぷ', "pu"),
    ('ぺ', "pe"),
    ('ぽ', "po"),
    ('ま', "ma"),
    ('み', "mi"),
    ('む', "mu"),
    ('め', "me"),
    ('も', "mo"),
    ('や', "ya"),
    ('ゆ', "yu"),
    ('よ', "yo"),
    ('ら', "ra"),
    ('り', "ri"),
    ('る', "ru"),
    ('れ', "re"),
    ('ろ', "ro"),
    ('わ', "wa"),
    ('ゐ', "wyi"),
    ('ゑ', "wye"),
    ('を', "wo"),
    ('ゔ', "vu"),
    ('ぁ', "xa"),
    ('ぃ', "xi"),
    ('ぅ', "xu"),
    ('ぇ', "xe"),
    ('ぉ', "xo"),
    ('ゃ', "xya"),
    ('ゅ', "xyu"),
    ('ょ', "xyo"),
    ('ゎ', "xwa"),
    ('ゕ', "xka"),
    ('ゖ', "xke"),
];

fn punctuation_to_ascii(ch: char) -> Option<char> {
    match ch {
        '。' => Some('.'),
        '、' => Some(','),
        '「' => Some('['),
        '」' => Some(']'),
        '？' => Some('?'),
        '！' => Some('!'),
        '〜' => Some('~'),
        '・' => Some('/'),
        '\u{3000}' => Some(' '),
        _ => None,
    }
}

fn digraphs() -> &'static HashMap<&'static str, &'static str> {
    static MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    MAP.get_or_init(|| DIGRAPHS.iter().copied().collect())
}

fn monographs() -> &'static HashMap<char, &'static str> {
    static MAP: OnceLock<HashMap<char, &'static str>> = OnceLock::new();
    MAP.get_or_init(|| MONOGRAPHS.iter().copied().collect())
}

/// Romaji for the syllable starting at `i`, with the number of kana consumed.
/// Digraphs win over monographs.
fn syllable_at(chars: &[char], i: usize) -> Option<(&'static str, usize)> {
    if let Some(pair) = chars.get(i..i + 2) {
        let pair: String = pair.iter().collect();
        if let Some(romaji) = digraphs().get(pair.as_str()) {
            return Some((*romaji, 2));
        }
    }
    let ch = chars.get(i)?;
    monographs().get(ch).map(|romaji| (*romaji, 1))
}

fn starts_with_vowel_or_y(romaji: &str) -> bool {
    romaji
        .chars()
        .next()
        .is_some_and(|c| matches!(c, 'a' | 'i' | 'u' | 'e' | 'o' | 'y'))
}

/// Convert hiragana and katakana to romaji.
///
/// Katakana is folded to hiragana first, so both scripts romanize the same
/// way. っ doubles the next consonant (`っち` → `cchi`), ん is written `n'`
/// before a vowel, `y`, or another ん, and anything unrecognized passes
/// through unchanged.
pub fn to_romaji(input: &str) -> String {
    let folded = katakana_to_hiragana(input);
    let chars: Vec<char> = folded.chars().collect();
    let mut out = String::with_capacity(folded.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            'っ' => {
                let next = syllable_at(&chars, i + 1)
                    .and_then(|(romaji, _)| romaji.chars().next())
                    .filter(|&c| !matches!(c, 'a' | 'i' | 'u' | 'e' | 'o' | 'n' | 'x'));
                match next {
                    Some(consonant) => out.push(consonant),
                    None => out.push_str("xtsu"),
                }
                i += 1;
            }
            'ん' => {
                out.push('n');
                let apostrophe = chars.get(i + 1) == Some(&'ん')
                    || syllable_at(&chars, i + 1)
                        .is_some_and(|(romaji, _)| starts_with_vowel_or_y(romaji));
                if apostrophe {
                    out.push('\'');
                }
                i += 1;
            }
            'ー' => {
                out.push('-');
                i += 1;
            }
            ch => {
                if let Some((romaji, len)) = syllable_at(&chars, i) {
                    out.push_str(romaji);
                    i += len;
                } else {
                    out.push(punctuation_to_ascii(ch).unwrap_or(ch));
                    i += 1;
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::romaji::to_hiragana;

    #[test]
    fn basic_hiragana() {
        assert_eq!(to_romaji("こんにちわ"), "konnichiwa");
        assert_eq!(to_romaji("すし"), "sushi");
        assert_eq!(to_romaji("ちかてつ"), "chikatetsu");
    }

    #[test]
    fn katakana_folds_to_same_romaji() {
        assert_eq!(to_romaji("ラーメン"), "ra-men");
        assert_eq!(to_romaji("ファイト"), "faito");
        assert_eq!(to_romaji("ヴァイオリン"), "vaiorin");
    }

    #[test]
    fn digraphs_win() {
        assert_eq!(to_romaji("きょうと"), "kyouto");
        assert_eq!(to_romaji("じゃあね"), "jaane");
    }

    #[test]
    fn sokuon_doubles_next_consonant() {
        assert_eq!(to_romaji("きって"), "kitte");
        assert_eq!(to_romaji("こっち"), "kocchi");
        assert_eq!(to_romaji("あっ"), "axtsu");
    }

    #[test]
    fn hatsuon_apostrophe() {
        assert_eq!(to_romaji("きんえん"), "kin'en");
        assert_eq!(to_romaji("こんや"), "kon'ya");
        assert_eq!(to_romaji("しんぶん"), "shinbun");
        assert_eq!(to_romaji("んん"), "n'n");
    }

    #[test]
    fn punctuation_and_passthrough() {
        assert_eq!(to_romaji("はい。"), "hai.");
        assert_eq!(to_romaji("「はい」"), "[hai]");
        assert_eq!(to_romaji("漢字abc"), "漢字abc");
        assert_eq!(to_romaji("already romaji"), "already romaji");
        assert_eq!(to_romaji(""), "");
    }

    #[test]
    fn every_table_digraph_romanizes_back() {
        assert_eq!(to_romaji("ティ"), "thi");
        assert_eq!(to_romaji("ディズニー"), "dhizuni-");
        assert_eq!(to_romaji("トゥ"), "twu");
        assert_eq!(to_romaji("ウォ"), "who");
        assert_eq!(to_romaji("きぇ"), "kye");
        assert_eq!(to_romaji("ゐ"), "wyi");
        assert_eq!(to_romaji("ゑ"), "wye");
    }

    #[test]
    fn multi_kana_table_values_romanize_to_a_key() {
        let map = crate::romaji::parse_romaji_toml(crate::romaji::default_toml()).unwrap();
        for kana in map.values() {
            if kana.chars().count() != 2 {
                continue;
            }
            let romaji = to_romaji(kana);
            assert_eq!(map.get(&romaji), Some(kana), "{kana} romanized to {romaji}");
        }
    }

    #[test]
    fn round_trips_through_hiragana() {
        for word in [
            "konnichiwa",
            "kitte",
            "kin'en",
            "kyouto",
            "shinbun",
            "kocchi",
            "ra-men",
            "onna",
            "fairu",
            "dhizuni-",
            "kye",
            "wyi",
            "who",
        ] {
            let kana = to_hiragana(word);
            assert_eq!(to_romaji(&kana), word, "round trip through {kana}");
        }
    }
}

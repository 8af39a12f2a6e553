use std::collections::HashMap;
use std::sync::LazyLock;

/// Longest key in [`ROMAJI_TO_HIRAGANA`]
const MAX_KEY_LEN: usize = 4;

// Hepburn, Kunrei and the usual IME spellings. `x`/`l` prefixes give small kana.
#[rustfmt::skip]
const ROMAJI_TABLE: &[(&str, &str)] = &[
    ("a", "あ"), ("i", "い"), ("u", "う"), ("e", "え"), ("o", "お"),
    ("ka", "か"), ("ki", "き"), ("ku", "く"), ("ke", "け"), ("ko", "こ"),
    ("kya", "きゃ"), ("kyi", "きぃ"), ("kyu", "きゅ"), ("kye", "きぇ"), ("kyo", "きょ"),
    ("kwa", "くぁ"), ("ca", "か"), ("cu", "く"), ("co", "こ"),
    ("ga", "が"), ("gi", "ぎ"), ("gu", "ぐ"), ("ge", "げ"), ("go", "ご"),
    ("gya", "ぎゃ"), ("gyi", "ぎぃ"), ("gyu", "ぎゅ"), ("gye", "ぎぇ"), ("gyo", "ぎょ"),
    ("gwa", "ぐぁ"),
    ("sa", "さ"), ("si", "し"), ("shi", "し"), ("su", "す"), ("se", "せ"), ("so", "そ"),
    ("sha", "しゃ"), ("shu", "しゅ"), ("she", "しぇ"), ("sho", "しょ"),
    ("sya", "しゃ"), ("syu", "しゅ"), ("sye", "しぇ"), ("syo", "しょ"),
    ("za", "ざ"), ("zi", "じ"), ("zu", "ず"), ("ze", "ぜ"), ("zo", "ぞ"),
    ("zya", "じゃ"), ("zyu", "じゅ"), ("zye", "じぇ"), ("zyo", "じょ"),
    ("ja", "じゃ"), ("ji", "じ"), ("ju", "じゅ"), ("je", "じぇ"), ("jo", "じょ"),
    ("jya", "じゃ"), ("jyu", "じゅ"), ("jye", "じぇ"), ("jyo", "じょ"),
    ("ta", "た"), ("ti", "ち"), ("chi", "ち"), ("tu", "つ"), ("tsu", "つ"), ("te", "て"), ("to", "と"),
    ("cha", "ちゃ"), ("chu", "ちゅ"), ("che", "ちぇ"), ("cho", "ちょ"),
    ("tya", "ちゃ"), ("tyu", "ちゅ"), ("tye", "ちぇ"), ("tyo", "ちょ"),
    ("cya", "ちゃ"), ("cyu", "ちゅ"), ("cye", "ちぇ"), ("cyo", "ちょ"),
    ("tsa", "つぁ"), ("tsi", "つぃ"), ("tse", "つぇ"), ("tso", "つぉ"),
    ("tha", "てゃ"), ("thi", "てぃ"), ("thu", "てゅ"), ("tho", "てょ"), ("twu", "とぅ"),
    ("da", "だ"), ("di", "ぢ"), ("du", "づ"), ("de", "で"), ("do", "ど"),
    ("dya", "ぢゃ"), ("dyu", "ぢゅ"), ("dyo", "ぢょ"),
    ("dha", "でゃ"), ("dhi", "でぃ"), ("dhu", "でゅ"), ("dho", "でょ"), ("dwu", "どぅ"),
    ("na", "な"), ("ni", "に"), ("nu", "ぬ"), ("ne", "ね"), ("no", "の"),
    ("nya", "にゃ"), ("nyi", "にぃ"), ("nyu", "にゅ"), ("nye", "にぇ"), ("nyo", "にょ"),
    ("ha", "は"), ("hi", "ひ"), ("hu", "ふ"), ("fu", "ふ"), ("he", "へ"), ("ho", "ほ"),
    ("hya", "ひゃ"), ("hyi", "ひぃ"), ("hyu", "ひゅ"), ("hye", "ひぇ"), ("hyo", "ひょ"),
    ("fa", "ふぁ"), ("fi", "ふぃ"), ("fe", "ふぇ"), ("fo", "ふぉ"), ("fyu", "ふゅ"),
    ("ba", "ば"), ("bi", "び"), ("bu", "ぶ"), ("be", "べ"), ("bo", "ぼ"),
    ("bya", "びゃ"), ("byi", "びぃ"), ("byu", "びゅ"), ("bye", "びぇ"), ("byo", "びょ"),
    ("pa", "ぱ"), ("pi", "ぴ"), ("pu", "ぷ"), ("pe", "ぺ"), ("po", "ぽ"),
    ("pya", "ぴゃ"), ("pyi", "ぴぃ"), ("pyu", "ぴゅ"), ("pye", "ぴぇ"), ("pyo", "ぴょ"),
    ("ma", "ま"), ("mi", "み"), ("mu", "む"), ("me", "め"), ("mo", "も"),
    ("mya", "みゃ"), ("myi", "みぃ"), ("myu", "みゅ"), ("mye", "みぇ"), ("myo", "みょ"),
    ("ya", "や"), ("yu", "ゆ"), ("ye", "いぇ"), ("yo", "よ"),
    ("ra", "ら"), ("ri", "り"), ("ru", "る"), ("re", "れ"), ("ro", "ろ"),
    ("rya", "りゃ"), ("ryi", "りぃ"), ("ryu", "りゅ"), ("rye", "りぇ"), ("ryo", "りょ"),
    ("wa", "わ"), ("wi", "うぃ"), ("we", "うぇ"), ("wo", "を"),
    ("va", "ゔぁ"), ("vi", "ゔぃ"), ("vu", "ゔ"), ("ve", "ゔぇ"), ("vo", "ゔぉ"),
    ("xa", "ぁ"), ("xi", "ぃ"), ("xu", "ぅ"), ("xe", "ぇ"), ("xo", "ぉ"),
    ("la", "ぁ"), ("li", "ぃ"), ("lu", "ぅ"), ("le", "ぇ"), ("lo", "ぉ"),
    ("xya", "ゃ"), ("xyu", "ゅ"), ("xyo", "ょ"),
    ("lya", "ゃ"), ("lyu", "ゅ"), ("lyo", "ょ"),
    ("xtu", "っ"), ("xtsu", "っ"), ("ltu", "っ"), ("ltsu", "っ"),
    ("xwa", "ゎ"), ("lwa", "ゎ"), ("xka", "ゕ"), ("xke", "ゖ"),
    ("xn", "ん"),
];

static ROMAJI_TO_HIRAGANA: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| ROMAJI_TABLE.iter().copied().collect());

fn punctuation(c: char) -> Option<char> {
    Some(match c {
        '-' => 'ー',
        '.' => '。',
        ',' => '、',
        '!' => '！',
        '?' => '？',
        '[' => '「',
        ']' => '」',
        '~' => '〜',
        _ => return None,
    })
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_lowercase() && !is_vowel(c)
}

/// Convert romaji to hiragana.
///
/// Longest match against the table, ASCII case-insensitive. Non-ASCII text
/// (kana included) and letters with no mapping are copied through as they were.
pub fn romaji_to_hiragana(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let lower: Vec<char> = chars.iter().map(char::to_ascii_lowercase).collect();
    let mut out = String::with_capacity(input.len() * 3);
    let mut i = 0;

    while i < chars.len() {
        let c = lower[i];
        let next = lower.get(i + 1).copied();

        if let Some(p) = punctuation(c) {
            out.push(p);
            i += 1;
            continue;
        }

        if !c.is_ascii_lowercase() {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        if c == 'n' {
            match next {
                // "n'" separates a syllabic n from a following vowel: kon'ya
                Some('\'') => {
                    out.push('ん');
                    i += 2;
                    continue;
                }
                Some('n') => {
                    out.push('ん');
                    // "nna" is ん + な, a bare "nn" is a single ん
                    let after = lower.get(i + 2).copied();
                    i += if after.is_some_and(|a| is_vowel(a) || a == 'y') { 1 } else { 2 };
                    continue;
                }
                Some(n) if is_vowel(n) || n == 'y' => {}
                _ => {
                    out.push('ん');
                    i += 1;
                    continue;
                }
            }
        }

        // Doubled consonant, or "tch", is a sokuon: dokki, matcha
        if is_consonant(c) && (next == Some(c) || (c == 't' && next == Some('c'))) {
            out.push('っ');
            i += 1;
            continue;
        }

        let longest = (1..=MAX_KEY_LEN.min(chars.len() - i)).rev().find_map(|len| {
            let key: String = lower[i..i + len].iter().collect();
            ROMAJI_TO_HIRAGANA
                .get(key.as_str())
                .map(|kana| (len, *kana))
        });

        match longest {
            Some((len, kana)) => {
                out.push_str(kana);
                i += len;
            }
            None if c == 'n' => {
                out.push('ん');
                i += 1;
            }
            None => {
                out.push(chars[i]);
                i += 1;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_keys_are_unique_and_short() {
        assert_eq!(ROMAJI_TO_HIRAGANA.len(), ROMAJI_TABLE.len());
        assert!(ROMAJI_TABLE.iter().all(|(k, _)| k.len() <= MAX_KEY_LEN));
    }

    #[test]
    fn converts_basic_syllables() {
        assert_eq!(romaji_to_hiragana("wanwan"), "わんわん");
        assert_eq!(romaji_to_hiragana("dokidoki"), "どきどき");
        assert_eq!(romaji_to_hiragana("nyaa"), "にゃあ");
        assert_eq!(romaji_to_hiragana("shiin"), "しいん");
        assert_eq!(romaji_to_hiragana("tsurutsuru"), "つるつる");
    }

    #[test]
    fn alternative_spellings_agree() {
        assert_eq!(romaji_to_hiragana("si"), romaji_to_hiragana("shi"));
        assert_eq!(romaji_to_hiragana("ti"), romaji_to_hiragana("chi"));
        assert_eq!(romaji_to_hiragana("tu"), romaji_to_hiragana("tsu"));
        assert_eq!(romaji_to_hiragana("hu"), romaji_to_hiragana("fu"));
        assert_eq!(romaji_to_hiragana("zya"), romaji_to_hiragana("ja"));
    }

    #[test]
    fn syllabic_n() {
        assert_eq!(romaji_to_hiragana("wan"), "わん");
        assert_eq!(romaji_to_hiragana("konnichiha"), "こんにちは");
        assert_eq!(romaji_to_hiragana("onna"), "おんな");
        assert_eq!(romaji_to_hiragana("kon'ya"), "こんや");
        assert_eq!(romaji_to_hiragana("konya"), "こにゃ");
        assert_eq!(romaji_to_hiragana("gann"), "がん");
        assert_eq!(romaji_to_hiragana("kanpai"), "かんぱい");
        assert_eq!(romaji_to_hiragana("ny"), "んy");
    }

    #[test]
    fn doubled_consonants_become_small_tsu() {
        assert_eq!(romaji_to_hiragana("dokki"), "どっき");
        assert_eq!(romaji_to_hiragana("bikkuri"), "びっくり");
        assert_eq!(romaji_to_hiragana("matcha"), "まっちゃ");
        assert_eq!(romaji_to_hiragana("zakku"), "ざっく");
    }

    #[test]
    fn small_kana_prefixes() {
        assert_eq!(romaji_to_hiragana("xa"), "ぁ");
        assert_eq!(romaji_to_hiragana("ltsu"), "っ");
        assert_eq!(romaji_to_hiragana("faxa"), "ふぁぁ");
    }

    #[test]
    fn punctuation_and_long_vowel() {
        assert_eq!(romaji_to_hiragana("nya-"), "にゃー");
        assert_eq!(romaji_to_hiragana("ha."), "は。");
    }

    #[test]
    fn case_insensitive_but_unmapped_case_preserved() {
        assert_eq!(romaji_to_hiragana("WAN"), "わん");
        assert_eq!(romaji_to_hiragana("xyz"), "xyz");
        assert_eq!(romaji_to_hiragana("XYZ"), "XYZ");
        assert_eq!(romaji_to_hiragana("q"), "q");
    }

    #[test]
    fn kana_and_other_text_pass_through() {
        assert_eq!(romaji_to_hiragana("ワン"), "ワン");
        assert_eq!(romaji_to_hiragana("わんwan"), "わんわん");
        assert_eq!(romaji_to_hiragana("音 1"), "音 1");
        assert_eq!(romaji_to_hiragana(""), "");
    }
}

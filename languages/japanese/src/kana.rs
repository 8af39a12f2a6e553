//! Hiragana/katakana shifting.
//!
//! The two syllabaries share a layout in Unicode, offset by 0x60.

const KANA_OFFSET: u32 = 0x60;

/// Katakana long vowel mark
pub const CHOONPU: char = 'ー';

pub fn is_hiragana(c: char) -> bool {
    matches!(c, '\u{3041}'..='\u{3096}' | 'ゝ' | 'ゞ')
}

pub fn is_katakana(c: char) -> bool {
    matches!(c, '\u{30A1}'..='\u{30F6}' | 'ヽ' | 'ヾ')
}

fn shift(c: char, up: bool) -> char {
    let code = c as u32;
    let shifted = if up {
        code + KANA_OFFSET
    } else {
        code - KANA_OFFSET
    };
    char::from_u32(shifted).unwrap_or(c)
}

/// Hiragana to katakana; everything else unchanged
pub fn hiragana_to_katakana(text: &str) -> String {
    text.chars()
        .map(|c| if is_hiragana(c) { shift(c, true) } else { c })
        .collect()
}

/// Katakana to hiragana.
///
/// A long vowel mark after a kana becomes that kana's vowel (`ラーメン` -> `らあめん`).
pub fn katakana_to_hiragana(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;

    for c in text.chars() {
        let converted = if is_katakana(c) {
            shift(c, false)
        } else if c == CHOONPU {
            prev.and_then(vowel_of).unwrap_or(c)
        } else {
            c
        };
        out.push(converted);
        prev = Some(converted);
    }

    out
}

/// Vowel that a hiragana syllable ends in
fn vowel_of(c: char) -> Option<char> {
    const A: &str = "あかがさざただなはばぱまやらわぁゃゎゕ";
    const I: &str = "いきぎしじちぢにひびぴみりゐぃ";
    const U: &str = "うくぐすずつづぬふぶぷむゆるゔぅゅ";
    const E: &str = "えけげせぜてでねへべぺめれゑぇゖ";
    const O: &str = "おこごそぞとどのほぼぽもよろをぉょ";

    [(A, 'あ'), (I, 'い'), (U, 'う'), (E, 'え'), (O, 'お')]
        .into_iter()
        .find(|(row, _)| row.contains(c))
        .map(|(_, vowel)| vowel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifts_hiragana_up() {
        assert_eq!(hiragana_to_katakana("わんわん"), "ワンワン");
        assert_eq!(hiragana_to_katakana("ぎゅっ"), "ギュッ");
        assert_eq!(hiragana_to_katakana("ゔ"), "ヴ");
    }

    #[test]
    fn leaves_other_scripts_alone() {
        assert_eq!(hiragana_to_katakana("ワンabc音!"), "ワンabc音!");
        assert_eq!(katakana_to_hiragana("わんabc音!"), "わんabc音!");
    }

    #[test]
    fn shifts_katakana_down() {
        assert_eq!(katakana_to_hiragana("ワンワン"), "わんわん");
        assert_eq!(katakana_to_hiragana("ドキドキ"), "どきどき");
        assert_eq!(katakana_to_hiragana("ヴ"), "ゔ");
    }

    #[test]
    fn long_vowel_mark_takes_previous_vowel() {
        assert_eq!(katakana_to_hiragana("ラーメン"), "らあめん");
        assert_eq!(katakana_to_hiragana("ニャー"), "にゃあ");
        assert_eq!(katakana_to_hiragana("ゴーー"), "ごおお");
    }

    #[test]
    fn long_vowel_mark_without_vowel_is_kept() {
        assert_eq!(katakana_to_hiragana("ー"), "ー");
        assert_eq!(katakana_to_hiragana("ンー"), "んー");
        assert_eq!(katakana_to_hiragana("ッー"), "っー");
    }
}

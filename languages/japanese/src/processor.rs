use giongo_core::language::ScriptConverter;
use giongo_core::preprocess::{DefaultPreprocessor, Preprocessor};

use crate::kana::{hiragana_to_katakana, katakana_to_hiragana};
use crate::romaji::romaji_to_hiragana;

/// Japanese script converter: katakana is the canonical script
pub struct JapaneseProcessor {
    preprocessor: DefaultPreprocessor,
}

impl JapaneseProcessor {
    pub fn new() -> Self {
        Self {
            preprocessor: DefaultPreprocessor,
        }
    }
}

impl Default for JapaneseProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptConverter for JapaneseProcessor {
    fn language_code(&self) -> &str {
        "ja"
    }

    fn normalize_for_search(&self, raw: &str) -> String {
        let text = self.preprocessor.process(raw);
        if text.is_empty() {
            return text;
        }

        let canonical = hiragana_to_katakana(&romaji_to_hiragana(&text));
        tracing::trace!("normalized '{}' -> '{}'", raw, canonical);
        canonical
    }

    fn to_display_script(&self, canonical: &str) -> String {
        katakana_to_hiragana(canonical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use giongo_core::dictionary::{Definition, Dictionary};
    use giongo_core::matcher::{MatchResult, lookup};

    fn processor() -> JapaneseProcessor {
        JapaneseProcessor::new()
    }

    #[test]
    fn romaji_hiragana_and_katakana_agree() {
        let p = processor();
        assert_eq!(p.normalize_for_search("wan"), "ワン");
        assert_eq!(p.normalize_for_search("わん"), "ワン");
        assert_eq!(p.normalize_for_search("ワン"), "ワン");
        assert_eq!(p.normalize_for_search("  WanWan "), "ワンワン");
        assert_eq!(p.normalize_for_search("ｗａｎ"), "ワン");
        assert_eq!(p.normalize_for_search("ﾜﾝ"), "ワン");
    }

    #[test]
    fn unmapped_input_passes_through() {
        let p = processor();
        assert_eq!(p.normalize_for_search("xyz"), "xyz");
        assert_eq!(p.normalize_for_search("音"), "音");
        assert_eq!(p.normalize_for_search("123"), "123");
    }

    #[test]
    fn whitespace_only_is_empty() {
        let p = processor();
        assert_eq!(p.normalize_for_search(""), "");
        assert_eq!(p.normalize_for_search("   "), "");
        assert_eq!(p.normalize_for_search("\u{3000}\t"), "");
    }

    #[test]
    fn display_script_is_hiragana() {
        let p = processor();
        assert_eq!(p.to_display_script("ワンワン"), "わんわん");
        assert_eq!(p.to_display_script("ニャー"), "にゃあ");
    }

    fn sample(entries: &[(&str, &str)]) -> Dictionary {
        entries
            .iter()
            .map(|(h, g)| (*h, vec![Definition::new(*g)]))
            .collect()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn romaji_query_finds_prefix_matches_shortest_first() {
        let dict = sample(&[("ワンワン", "woof"), ("ワン", "bark")]);
        assert_eq!(
            lookup(&processor(), "wan", &dict),
            MatchResult::Found {
                prefix: strings(&["ワン", "ワンワン"]),
                infix: vec![],
            }
        );
    }

    #[test]
    fn katakana_query_finds_infix_match() {
        let dict = sample(&[("ドキドキ", "heartbeat")]);
        assert_eq!(
            lookup(&processor(), "キド", &dict),
            MatchResult::Found {
                prefix: vec![],
                infix: strings(&["ドキドキ"]),
            }
        );
    }

    #[test]
    fn unmappable_query_is_empty() {
        let dict = sample(&[("ニャー", "meow")]);
        assert_eq!(lookup(&processor(), "xyz", &dict), MatchResult::Empty);
    }

    #[test]
    fn whitespace_query_is_not_searched() {
        let dict = sample(&[("ニャー", "meow")]);
        assert_eq!(lookup(&processor(), "   ", &dict), MatchResult::NotSearched);
    }

    #[test]
    fn headword_text_finds_itself() {
        let p = processor();
        for headword in ["シーン…", "①", "ガ゛", "ドキドキ"] {
            assert_eq!(p.normalize_for_search(headword), headword);
            let dict = sample(&[(headword, "sound")]);
            assert!(
                lookup(&p, headword, &dict).is_found(),
                "{headword} should find itself"
            );
        }
    }

    #[test]
    fn hiragana_and_long_vowel_queries_match() {
        let dict = sample(&[("ニャー", "meow"), ("ニャンニャン", "meow meow")]);
        let MatchResult::Found { prefix, .. } = lookup(&processor(), "にゃ", &dict) else {
            panic!("expected matches");
        };
        assert_eq!(prefix, ["ニャー", "ニャンニャン"]);
        assert_eq!(lookup(&processor(), "nya-", &dict).match_count(), 1);
    }
}

use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default JP preprocessor
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        fold_width(text).trim().to_string()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Full-width ASCII (U+FF01..=U+FF5E) and half-width katakana (U+FF61..=U+FF9F)
fn is_width_variant(c: char) -> bool {
    matches!(c, '\u{FF01}'..='\u{FF5E}' | '\u{FF61}'..='\u{FF9F}')
}

/// NFKC over runs of width variants only; everything else is copied as is.
///
/// Runs are normalized together so a half-width voicing mark composes with
/// the kana before it (`ｶﾞ` -> `ガ`).
fn fold_width(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = String::new();

    for c in text.chars() {
        if is_width_variant(c) {
            run.push(c);
            continue;
        }
        if !run.is_empty() {
            out.extend(run.nfkc());
            run.clear();
        }
        out.push(c);
    }
    out.extend(run.nfkc());

    out
}

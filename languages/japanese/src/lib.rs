pub mod kana;
pub mod processor;
pub mod romaji;

pub use kana::{hiragana_to_katakana, katakana_to_hiragana};
pub use processor::JapaneseProcessor;
pub use romaji::romaji_to_hiragana;

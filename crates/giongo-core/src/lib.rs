pub mod dictionary;
pub mod language;
pub mod matcher;
pub mod preprocess;
pub mod state;
pub mod types;

pub use dictionary::{Definition, Dictionary, DictionaryEntry};
pub use language::ScriptConverter;
pub use matcher::{MatchResult, SortedKeys, compare_headwords, find_matches, lookup};
pub use state::LookupSession;

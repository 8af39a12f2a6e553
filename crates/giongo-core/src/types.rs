use std::sync::Arc;

use serde::Serialize;

use crate::dictionary::{Definition, Dictionary};
use crate::language::ScriptConverter;

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Dictionary finished loading
    DictionaryLoaded(Arc<Dictionary>),
    /// Dictionary could not be loaded
    DictionaryFailed(String),
    /// User entered a new query
    TextInput(String),
    /// Input closed, stop after draining
    InputClosed,
}

/// Entry ready to be shown: headword, its second reading and its glosses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayEntry {
    pub headword: String,
    pub reading: String,
    pub definitions: Vec<Definition>,
}

impl DisplayEntry {
    /// Build display entries for a group of headwords, skipping unknown ones
    pub fn collect<C>(keys: &[String], dictionary: &Dictionary, converter: &C) -> Vec<Self>
    where
        C: ScriptConverter + ?Sized,
    {
        keys.iter()
            .filter_map(|key| dictionary.entry(key))
            .map(|entry| DisplayEntry {
                headword: entry.headword.to_string(),
                reading: converter.to_display_script(entry.headword),
                definitions: entry.definitions.to_vec(),
            })
            .collect()
    }
}

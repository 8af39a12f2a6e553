use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One gloss of an onomatopoeia entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    #[serde(rename = "english")]
    pub gloss: String,
    #[serde(rename = "details", default)]
    pub detail: Option<String>,
}

impl Definition {
    pub fn new(gloss: impl Into<String>) -> Self {
        Self {
            gloss: gloss.into(),
            detail: None,
        }
    }

    pub fn with_detail(gloss: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            gloss: gloss.into(),
            detail: Some(detail.into()),
        }
    }

    /// Detail text if present and not blank
    pub fn detail(&self) -> Option<&str> {
        self.detail
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}

/// Borrowed view of a single headword and its definitions
#[derive(Debug, Clone, Copy)]
pub struct DictionaryEntry<'a> {
    pub headword: &'a str,
    pub definitions: &'a [Definition],
}

/// Headword (katakana) to definitions mapping.
///
/// Serializes as a plain JSON object: `{ "ワン": [{ "english": "bark", "details": null }] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: BTreeMap<String, Vec<Definition>>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the definitions of a headword
    pub fn insert(&mut self, headword: impl Into<String>, definitions: Vec<Definition>) {
        self.entries.insert(headword.into(), definitions);
    }

    /// Append a definition, creating the headword if needed
    pub fn push_definition(&mut self, headword: impl Into<String>, definition: Definition) {
        self.entries
            .entry(headword.into())
            .or_default()
            .push(definition);
    }

    pub fn get(&self, headword: &str) -> Option<&[Definition]> {
        self.entries.get(headword).map(Vec::as_slice)
    }

    pub fn entry(&self, headword: &str) -> Option<DictionaryEntry<'_>> {
        self.entries
            .get_key_value(headword)
            .map(|(headword, definitions)| DictionaryEntry {
                headword,
                definitions,
            })
    }

    pub fn contains(&self, headword: &str) -> bool {
        self.entries.contains_key(headword)
    }

    pub fn headwords(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = DictionaryEntry<'_>> {
        self.entries
            .iter()
            .map(|(headword, definitions)| DictionaryEntry {
                headword,
                definitions,
            })
    }

    /// Number of headwords
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of definitions across all headwords
    pub fn definition_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Merge another dictionary into this one.
    /// Definitions of a shared headword are appended after the existing ones.
    pub fn merge(mut self, other: Dictionary) -> Self {
        for (headword, definitions) in other.entries {
            self.entries.entry(headword).or_default().extend(definitions);
        }
        self
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<Definition>)> for Dictionary {
    fn from_iter<T: IntoIterator<Item = (K, Vec<Definition>)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

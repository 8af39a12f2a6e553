use std::cmp::Ordering;

use serde::Serialize;

use crate::dictionary::Dictionary;
use crate::language::ScriptConverter;

/// Outcome of one lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchResult {
    /// Query is empty after normalization
    NotSearched,
    /// No dictionary available yet
    Loading,
    /// Nothing contains the query
    Empty,
    Found {
        /// Headwords starting with the query
        prefix: Vec<String>,
        /// Headwords containing the query elsewhere
        infix: Vec<String>,
    },
}

impl MatchResult {
    pub fn is_found(&self) -> bool {
        matches!(self, MatchResult::Found { .. })
    }

    /// Number of matched headwords across both groups
    pub fn match_count(&self) -> usize {
        match self {
            MatchResult::Found { prefix, infix } => prefix.len() + infix.len(),
            _ => 0,
        }
    }
}

/// Presentation order: shorter headwords first, then code point order
pub fn compare_headwords(a: &str, b: &str) -> Ordering {
    a.chars()
        .count()
        .cmp(&b.chars().count())
        .then_with(|| a.cmp(b))
}

/// Headwords of a dictionary in presentation order.
///
/// Sorting once per dictionary and reusing the index gives the same results
/// as sorting on every query.
#[derive(Debug, Clone, Default)]
pub struct SortedKeys {
    keys: Vec<String>,
}

impl SortedKeys {
    pub fn new(dictionary: &Dictionary) -> Self {
        let mut keys: Vec<String> = dictionary.headwords().map(str::to_owned).collect();
        keys.sort_by(|a, b| compare_headwords(a, b));
        Self { keys }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.keys
    }

    /// Match a canonical query against the sorted headwords
    pub fn search(&self, canonical: &str) -> MatchResult {
        if canonical.is_empty() {
            return MatchResult::NotSearched;
        }

        let (prefix, infix): (Vec<&String>, Vec<&String>) = self
            .keys
            .iter()
            .filter(|key| key.contains(canonical))
            .partition(|key| key.starts_with(canonical));

        if prefix.is_empty() && infix.is_empty() {
            return MatchResult::Empty;
        }

        MatchResult::Found {
            prefix: prefix.into_iter().cloned().collect(),
            infix: infix.into_iter().cloned().collect(),
        }
    }
}

/// Match an already canonical query against a dictionary
pub fn find_matches(canonical: &str, dictionary: &Dictionary) -> MatchResult {
    if canonical.is_empty() {
        return MatchResult::NotSearched;
    }
    SortedKeys::new(dictionary).search(canonical)
}

/// Normalize a raw query with `converter` and match it
pub fn lookup<C>(converter: &C, raw: &str, dictionary: &Dictionary) -> MatchResult
where
    C: ScriptConverter + ?Sized,
{
    find_matches(&converter.normalize_for_search(raw), dictionary)
}

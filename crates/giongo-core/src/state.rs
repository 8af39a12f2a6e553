use std::sync::Arc;

use crate::dictionary::Dictionary;
use crate::language::ScriptConverter;
use crate::matcher::{MatchResult, SortedKeys};

/// Current query plus the dictionary once it has arrived.
///
/// Each call to [`LookupSession::evaluate`] recomputes the result from
/// scratch; nothing from a previous evaluation is kept.
#[derive(Debug, Default)]
pub struct LookupSession {
    dictionary: Option<Arc<Dictionary>>,
    keys: SortedKeys,
    query: String,
}

impl LookupSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dictionary(dictionary: Arc<Dictionary>) -> Self {
        let mut session = Self::new();
        session.set_dictionary(dictionary);
        session
    }

    pub fn set_dictionary(&mut self, dictionary: Arc<Dictionary>) {
        self.keys = SortedKeys::new(&dictionary);
        self.dictionary = Some(dictionary);
    }

    pub fn dictionary(&self) -> Option<&Arc<Dictionary>> {
        self.dictionary.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.dictionary.is_some()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn evaluate<C>(&self, converter: &C) -> MatchResult
    where
        C: ScriptConverter + ?Sized,
    {
        if self.dictionary.is_none() {
            return MatchResult::Loading;
        }
        self.keys.search(&converter.normalize_for_search(&self.query))
    }
}

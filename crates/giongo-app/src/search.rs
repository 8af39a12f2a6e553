use giongo_core::dictionary::Dictionary;
use giongo_core::language::ScriptConverter;
use giongo_core::matcher::{MatchResult, find_matches};
use giongo_core::types::DisplayEntry;
use serde::Serialize;

use crate::ui;

/// Machine-readable result of a one-shot search
#[derive(Debug, Serialize)]
pub struct SearchReport {
    pub query: String,
    pub canonical: String,
    pub result: MatchResult,
    pub exact: Vec<DisplayEntry>,
    pub similar: Vec<DisplayEntry>,
}

impl SearchReport {
    pub fn new<C>(query: &str, dictionary: &Dictionary, converter: &C) -> Self
    where
        C: ScriptConverter + ?Sized,
    {
        let canonical = converter.normalize_for_search(query);
        let result = find_matches(&canonical, dictionary);

        let (exact, similar) = match &result {
            MatchResult::Found { prefix, infix } => (
                DisplayEntry::collect(prefix, dictionary, converter),
                DisplayEntry::collect(infix, dictionary, converter),
            ),
            _ => (Vec::new(), Vec::new()),
        };

        Self {
            query: query.to_string(),
            canonical,
            result,
            exact,
            similar,
        }
    }

    pub fn render_text<C>(&self, dictionary: &Dictionary, converter: &C) -> String
    where
        C: ScriptConverter + ?Sized,
    {
        ui::render(&self.result, Some(dictionary), converter)
    }
}

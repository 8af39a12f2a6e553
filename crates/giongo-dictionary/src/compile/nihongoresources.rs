use std::fs;
use std::path::Path;

use super::RawEntry;
use crate::error::CompileError;

/// Parse `giongo.txt`: a header line, then
/// `<kana>\t<katakana>\t<translation>\t<detail>...` per line.
pub fn parse(content: &str) -> Vec<RawEntry> {
    let mut entries = Vec::new();

    for (line_no, line) in content.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        let [_kana, katakana, translation, details @ ..] = fields.as_slice() else {
            tracing::warn!(
                "giongo.txt line {}: expected at least 3 columns, skipping",
                line_no + 1
            );
            continue;
        };
        if katakana.trim().is_empty() {
            tracing::warn!("giongo.txt line {}: empty headword, skipping", line_no + 1);
            continue;
        }

        entries.push(RawEntry::new(
            katakana.trim(),
            translation.trim(),
            Some(details.join(", ").trim().to_string()),
        ));
    }

    entries
}

pub fn compile(path: &Path, entries: &mut Vec<RawEntry>) -> Result<(), CompileError> {
    tracing::info!("Reading {}", path.display());
    let content = fs::read_to_string(path)?;
    let parsed = parse(&content);
    tracing::debug!("{} entries from {}", parsed.len(), path.display());
    entries.extend(parsed);
    Ok(())
}

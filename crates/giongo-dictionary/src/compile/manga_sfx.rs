use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use super::RawEntry;
use crate::error::CompileError;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static NUMBERED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\((\d+)\)").expect("valid regex"));

/// Link text scraped along with the details column
const MORE_LINK: &str = "More Â»";

/// Header cell marking the first column of an entry group
const GROUP_HEADER: &str = "Japanese";

#[derive(Debug, Default)]
struct PendingEntry {
    katakana: String,
    english: String,
    details: String,
}

/// Turn the rows of one sheet into raw entries.
///
/// Two header rows; every `Japanese` cell in the second one starts a column
/// group of (katakana, romaji, english, details). A row with romaji starts a
/// new entry, following rows without romaji continue its english and details.
pub fn parse_rows(rows: &[Vec<String>]) -> Vec<RawEntry> {
    let Some(header) = rows.get(1) else {
        return Vec::new();
    };

    let columns: Vec<usize> = header
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.as_str() == GROUP_HEADER)
        .map(|(index, _)| index)
        .collect();

    let mut pending = Vec::new();

    for index in columns {
        let mut current: Option<PendingEntry> = None;

        for row in rows.iter().skip(2) {
            let cell = |offset: usize| row.get(index + offset).map(String::as_str).unwrap_or("");

            if !cell(1).trim().is_empty() {
                pending.extend(current.take());
                let katakana = cell(0);
                current = Some(PendingEntry {
                    katakana: katakana.strip_suffix(',').unwrap_or(katakana).to_string(),
                    ..Default::default()
                });
            }

            // Text above the first romaji row belongs to no entry
            if let Some(entry) = current.as_mut() {
                entry.english.push_str(cell(2));
                entry.english.push(' ');
                entry.details.push_str(cell(3));
                entry.details.push(' ');
            }
        }

        // Some columns have no entries
        pending.extend(current);
    }

    pending.into_iter().flat_map(refine).collect()
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

/// `(1) a; (2) b` -> [(1, "a"), (2, "b")]. Text before the first marker is dropped.
fn numbered_parts(text: &str) -> Vec<(u32, String)> {
    let marks: Vec<(usize, usize, Option<u32>)> = NUMBERED
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let number = caps.get(1).and_then(|n| n.as_str().parse().ok());
            Some((whole.start(), whole.end(), number))
        })
        .collect();

    marks
        .iter()
        .enumerate()
        .filter_map(|(i, &(_, end, number))| {
            let until = marks.get(i + 1).map_or(text.len(), |&(start, _, _)| start);
            let part = text[end..until].trim();
            let part = part.strip_suffix(';').unwrap_or(part);
            number.map(|n| (n, part.to_string()))
        })
        .collect()
}

/// Normalize one entry, splitting numbered glosses into separate definitions
fn refine(entry: PendingEntry) -> Vec<RawEntry> {
    let english = collapse_whitespace(&entry.english);
    let details = collapse_whitespace(&entry.details.replace(MORE_LINK, ""));

    if !NUMBERED.is_match(&english) {
        return vec![RawEntry::new(entry.katakana, english, Some(details))];
    }

    let details_items: HashMap<u32, String> = numbered_parts(&details).into_iter().collect();

    numbered_parts(&english)
        .into_iter()
        .map(|(number, gloss)| {
            RawEntry::new(
                entry.katakana.as_str(),
                gloss,
                details_items.get(&number).cloned(),
            )
        })
        .collect()
}

pub fn compile_file(path: &Path, entries: &mut Vec<RawEntry>) -> Result<(), CompileError> {
    tracing::info!("Reading {}", path.display());

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let rows = reader
        .records()
        .map(|record| record.map(|r| r.iter().map(str::to_string).collect()))
        .collect::<Result<Vec<Vec<String>>, _>>()?;

    let parsed = parse_rows(&rows);
    tracing::debug!("{} entries from {}", parsed.len(), path.display());
    entries.extend(parsed);
    Ok(())
}

/// Compile every `*.csv` in `dir`, in file name order
pub fn compile_dir(dir: &Path, entries: &mut Vec<RawEntry>) -> Result<(), CompileError> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "csv"))
        .collect();
    files.sort();

    if files.is_empty() {
        tracing::warn!("No CSV files in {}", dir.display());
    }

    for file in files {
        compile_file(&file, entries)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(lines: &[&[&str]]) -> Vec<Vec<String>> {
        lines
            .iter()
            .map(|line| line.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    #[test]
    fn continuation_rows_extend_the_current_entry() {
        let sheet = rows(&[
            &["Manga SFX", "", "", ""],
            &["Japanese", "Romaji", "English", "Details"],
            &["ドン,", "don", "boom", "a heavy"],
            &["", "", "thud", "impact  More Â»"],
            &["バン", "ban", "bang", ""],
        ]);

        assert_eq!(
            parse_rows(&sheet),
            vec![
                RawEntry::new("ドン", "boom thud", Some("a heavy impact".into())),
                RawEntry::new("バン", "bang", None),
            ]
        );
    }

    #[test]
    fn multiple_column_groups() {
        let sheet = rows(&[
            &["", "", "", "", "", "", "", ""],
            &[
                "Japanese", "Romaji", "English", "Details", "Japanese", "Romaji", "English",
                "Details",
            ],
            &["ガン", "gan", "clang", "", "ゴゴゴ", "gogogo", "rumble", "menace"],
            &["", "", "", "", "", "", "", ""],
        ]);

        assert_eq!(
            parse_rows(&sheet),
            vec![
                RawEntry::new("ガン", "clang", None),
                RawEntry::new("ゴゴゴ", "rumble", Some("menace".into())),
            ]
        );
    }

    #[test]
    fn numbered_glosses_split_with_matching_details() {
        let sheet = rows(&[
            &["", "", "", ""],
            &["Japanese", "Romaji", "English", "Details"],
            &["ガタ", "gata", "(1) rattle; (2) clatter;", "(2) falling over;"],
            &["", "", "(3) collapse", ""],
        ]);

        assert_eq!(
            parse_rows(&sheet),
            vec![
                RawEntry::new("ガタ", "rattle", None),
                RawEntry::new("ガタ", "clatter", Some("falling over".into())),
                RawEntry::new("ガタ", "collapse", None),
            ]
        );
    }

    #[test]
    fn text_before_first_entry_is_dropped() {
        let sheet = rows(&[
            &["", "", "", ""],
            &["Japanese", "Romaji", "English", "Details"],
            &["", "", "stray", "note"],
            &["ピカ", "pika", "flash", ""],
        ]);

        assert_eq!(parse_rows(&sheet), vec![RawEntry::new("ピカ", "flash", None)]);
    }

    #[test]
    fn short_rows_and_missing_header() {
        assert!(parse_rows(&rows(&[&["only one row"]])).is_empty());

        let sheet = rows(&[&[""], &["Japanese", "Romaji", "English", "Details"], &["ズン", "zun"]]);
        assert_eq!(parse_rows(&sheet), vec![RawEntry::new("ズン", "", None)]);
    }
}

//! Builds the onomatopoeia dictionary from the raw source data.
//!
//! Expected layout under the data directory:
//!
//! ```text
//! data/
//!   nihongoresources.com/giongo.txt
//!   japanese-manga-sfx/*.csv
//! ```

use std::path::{Path, PathBuf};

use giongo_core::dictionary::{Definition, Dictionary};

use crate::error::CompileError;

pub mod manga_sfx;
pub mod nihongoresources;

/// One source row before grouping by headword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub katakana: String,
    pub english: String,
    pub details: Option<String>,
}

impl RawEntry {
    pub fn new(
        katakana: impl Into<String>,
        english: impl Into<String>,
        details: Option<String>,
    ) -> Self {
        Self {
            katakana: katakana.into(),
            english: english.into(),
            details: details.filter(|d| !d.trim().is_empty()),
        }
    }
}

pub fn nihongoresources_path(data_dir: &Path) -> PathBuf {
    data_dir.join("nihongoresources.com").join("giongo.txt")
}

pub fn manga_sfx_dir(data_dir: &Path) -> PathBuf {
    data_dir.join("japanese-manga-sfx")
}

/// Collect raw entries from every source present under `data_dir`
pub fn compile_raw_entries(data_dir: &Path) -> Result<Vec<RawEntry>, CompileError> {
    let giongo = nihongoresources_path(data_dir);
    let sfx_dir = manga_sfx_dir(data_dir);

    if !giongo.is_file() && !sfx_dir.is_dir() {
        return Err(CompileError::NoSources(data_dir.to_path_buf()));
    }

    let mut entries = Vec::new();

    if giongo.is_file() {
        nihongoresources::compile(&giongo, &mut entries)?;
    } else {
        tracing::warn!("Skipping missing source {}", giongo.display());
    }

    if sfx_dir.is_dir() {
        manga_sfx::compile_dir(&sfx_dir, &mut entries)?;
    } else {
        tracing::warn!("Skipping missing source {}", sfx_dir.display());
    }

    tracing::info!("Collected {} raw entries", entries.len());
    Ok(entries)
}

/// Group raw entries by headword, keeping source order within a headword
pub fn compile_entries(raw_entries: Vec<RawEntry>) -> Dictionary {
    let mut dict = Dictionary::new();
    for entry in raw_entries {
        dict.push_definition(
            entry.katakana,
            Definition {
                gloss: entry.english,
                detail: entry.details,
            },
        );
    }
    dict
}

/// Compile every source under `data_dir` into a dictionary
pub fn compile(data_dir: &Path) -> Result<Dictionary, CompileError> {
    let dict = compile_entries(compile_raw_entries(data_dir)?);
    tracing::info!(
        "Compiled {} headwords ({} definitions)",
        dict.len(),
        dict.definition_count()
    );
    Ok(dict)
}

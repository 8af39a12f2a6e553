use std::fs;
use std::path::Path;

use giongo_core::dictionary::Dictionary;

use crate::error::LoadError;

/// Loads `onomatopoeia.json`: `{ "<katakana>": [{ "english": ..., "details": ... }] }`
pub struct OnomatopoeiaLoader;

impl OnomatopoeiaLoader {
    /// Parse dictionary JSON from a string
    pub fn from_json(json: &str) -> Result<Dictionary, LoadError> {
        let dict: Dictionary = serde_json::from_str(json)?;
        Ok(dict)
    }

    /// Load dictionary from file path
    pub fn load_from_file(path: &Path) -> Result<Dictionary, LoadError> {
        tracing::info!("Loading dictionary from file: {}", path.display());
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.to_path_buf()));
        }
        let json = fs::read_to_string(path)?;
        let dict = Self::from_json(&json)?;
        tracing::info!(
            "Loaded {} headwords ({} definitions)",
            dict.len(),
            dict.definition_count()
        );
        Ok(dict)
    }

    /// Load a base dictionary and merge additional ones into it.
    /// Additional files that fail to load are skipped with a warning.
    pub fn load_with_additional(
        base: &Path,
        additional: &[impl AsRef<Path>],
    ) -> Result<Dictionary, LoadError> {
        let mut dict = Self::load_from_file(base)?;

        for path in additional {
            let path = path.as_ref();
            match Self::load_from_file(path) {
                Ok(extra) => {
                    tracing::info!("Merging additional dictionary from: {}", path.display());
                    dict = dict.merge(extra);
                }
                Err(e) => {
                    tracing::warn!("Failed to load dictionary from {}: {}", path.display(), e);
                }
            }
        }

        Ok(dict)
    }

    /// Write a dictionary as pretty-printed JSON
    pub fn write_to_file(dict: &Dictionary, path: &Path) -> Result<(), LoadError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(dict)?;
        fs::write(path, json)?;
        tracing::info!("Wrote {} headwords to {}", dict.len(), path.display());
        Ok(())
    }
}

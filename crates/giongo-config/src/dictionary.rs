use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_path() -> PathBuf {
    PathBuf::from("onomatopoeia.json")
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DictionaryConfig {
    #[serde(default = "default_path")]
    pub path: PathBuf,
    /// Extra dictionaries merged on top of `path`
    #[serde(default)]
    pub additional_paths: Vec<PathBuf>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            additional_paths: vec![],
        }
    }
}

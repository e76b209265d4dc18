use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{ManifestError, Result};

/// On-disk overrides for a generator preset. Every field is optional;
/// unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct FileConfig {
    #[serde(default)]
    pub(crate) base_url: Option<String>,
    #[serde(default)]
    pub(crate) folders: Option<Vec<String>>,
    #[serde(default)]
    pub(crate) display_names: BTreeMap<String, String>,
    #[serde(default)]
    pub(crate) output_path: Option<PathBuf>,
    #[serde(default)]
    pub(crate) prior_manifest_path: Option<PathBuf>,
    #[serde(default)]
    pub(crate) root: Option<PathBuf>,
}

/// The file was named explicitly, so a missing or invalid one is fatal.
pub(crate) fn load_file_config(path: &Path) -> Result<FileConfig> {
    let data = std::fs::read_to_string(path).map_err(|err| ManifestError::io(path, err))?;
    serde_json::from_str(&data).map_err(|err| ManifestError::Config {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })
}

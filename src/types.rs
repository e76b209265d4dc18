use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{emoji_url, file_stem};

pub(crate) const IMAGE_TYPE: &str = "image";

/// One image file found directly inside a scanned folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EmojiFile {
    pub(crate) folder: String,
    pub(crate) filename: String,
}

impl EmojiFile {
    pub(crate) fn new(folder: &str, filename: &str) -> Self {
        Self {
            folder: folder.to_string(),
            filename: filename.to_string(),
        }
    }

    pub(crate) fn stem(&self) -> String {
        file_stem(&self.filename)
    }

    pub(crate) fn url(&self, base_url: &str) -> String {
        emoji_url(base_url, &self.folder, &self.filename)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EmojiItem {
    pub(crate) label: String,
    pub(crate) url: String,
    /// True when the label came from the prior manifest.
    pub(crate) carried: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct EmojiGroup {
    pub(crate) name: String,
    pub(crate) display_name: String,
    pub(crate) items: Vec<EmojiItem>,
}

impl EmojiGroup {
    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn carried_count(&self) -> usize {
        self.items.iter().filter(|item| item.carried).count()
    }
}

// Artalk: `[{"name", "type", "items": [{"key", "val"}]}]`

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ArtalkGroup {
    pub(crate) name: String,
    #[serde(rename = "type")]
    pub(crate) kind: String,
    pub(crate) items: Vec<ArtalkItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ArtalkItem {
    pub(crate) key: String,
    pub(crate) val: String,
}

// Twikoo: `{displayName: {"type", "container": [{"text", "icon"}]}}`

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct TwikooCategory {
    #[serde(rename = "type")]
    pub(crate) kind: String,
    pub(crate) container: Vec<TwikooItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct TwikooItem {
    pub(crate) text: String,
    pub(crate) icon: String,
}

/// A finished manifest in the shape its consumer expects. The Twikoo map
/// keeps insertion order, so categories follow the configured folder order.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub(crate) enum Manifest {
    Artalk(Vec<ArtalkGroup>),
    Twikoo(Map<String, Value>),
}

impl Manifest {
    pub(crate) fn group_count(&self) -> usize {
        match self {
            Manifest::Artalk(groups) => groups.len(),
            Manifest::Twikoo(categories) => categories.len(),
        }
    }
}

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub(crate) struct RunSummary {
    pub(crate) groups: usize,
    pub(crate) items: usize,
    pub(crate) carried: usize,
    pub(crate) fallback: usize,
    pub(crate) written: bool,
}

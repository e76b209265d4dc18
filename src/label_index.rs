use std::collections::HashMap;
use std::io;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use super::ManifestShape;

/// Labels published by a previous run, keyed by the emoji URL they were
/// attached to. Lets a regeneration keep names someone picked by hand.
#[derive(Debug, Clone, Default)]
pub(crate) struct LabelIndex {
    labels: HashMap<String, String>,
}

impl LabelIndex {
    pub(crate) fn from_manifest(shape: ManifestShape, doc: &Value) -> Self {
        match shape {
            ManifestShape::Artalk => Self::from_artalk(doc),
            ManifestShape::Twikoo => Self::from_twikoo(doc),
        }
    }

    /// Reads `[{"items": [{"key", "val"}]}]`. Entries missing either field
    /// are skipped.
    pub(crate) fn from_artalk(doc: &Value) -> Self {
        let mut index = Self::default();
        let Some(groups) = doc.as_array() else {
            return index;
        };
        for group in groups {
            let Some(items) = group.get("items").and_then(Value::as_array) else {
                continue;
            };
            for item in items {
                let val = item.get("val").and_then(Value::as_str);
                let key = item.get("key").and_then(Value::as_str);
                if let (Some(val), Some(key)) = (val, key) {
                    index.insert(val, key);
                }
            }
        }
        index
    }

    /// Reads `{name: {"container": [{"text", "icon"}]}}`, pulling the URL
    /// out of the `src` attribute of each icon.
    pub(crate) fn from_twikoo(doc: &Value) -> Self {
        let mut index = Self::default();
        let Some(categories) = doc.as_object() else {
            return index;
        };
        for category in categories.values() {
            let Some(container) = category.get("container").and_then(Value::as_array) else {
                continue;
            };
            for item in container {
                let icon = item.get("icon").and_then(Value::as_str);
                let text = item.get("text").and_then(Value::as_str);
                let (Some(icon), Some(text)) = (icon, text) else {
                    continue;
                };
                if let Some(url) = extract_img_src(icon) {
                    index.insert(url, text);
                }
            }
        }
        index
    }

    pub(crate) fn insert(&mut self, url: &str, label: &str) {
        self.labels.insert(normalize_url(url), label.to_string());
    }

    /// Exact match only; no case folding or slash normalization.
    pub(crate) fn lookup(&self, url: &str) -> Option<&str> {
        self.labels.get(url).map(String::as_str)
    }

    pub(crate) fn len(&self) -> usize {
        self.labels.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Strips stray backticks (left behind by hand-edited manifests) and
/// surrounding whitespace.
pub(crate) fn normalize_url(raw: &str) -> String {
    raw.replace('`', "").trim().to_string()
}

fn img_src_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#"src=['"]([^'"]+)['"]"#).unwrap())
}

/// First `src='...'` or `src="..."` value in a small markup string.
/// Returns `None` when there is no such attribute.
pub(crate) fn extract_img_src(markup: &str) -> Option<&str> {
    img_src_pattern()
        .captures(markup)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Loads the previous manifest. Every failure degrades to `None` with a
/// notice so the run can fall back to filename labels.
pub(crate) fn load_prior_manifest(path: Option<&Path>) -> Option<Value> {
    let Some(path) = path else {
        eprintln!("[origin] label carry-over disabled");
        return None;
    };
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            eprintln!("[origin] no prior manifest at {}", path.display());
            return None;
        }
        Err(err) => {
            eprintln!("[origin] could not read {}: {err}", path.display());
            return None;
        }
    };
    match serde_json::from_str(&data) {
        Ok(doc) => {
            eprintln!("[origin] loaded prior manifest: {}", path.display());
            Some(doc)
        }
        Err(err) => {
            eprintln!(
                "[origin] prior manifest is not valid JSON: {} ({err})",
                path.display()
            );
            None
        }
    }
}

pub(crate) fn build_label_index(shape: ManifestShape, path: Option<&Path>) -> LabelIndex {
    match load_prior_manifest(path) {
        Some(doc) => {
            let index = LabelIndex::from_manifest(shape, &doc);
            if index.is_empty() {
                eprintln!("[origin] prior manifest has no usable labels");
            } else {
                eprintln!("[origin] {} labels available for carry-over", index.len());
            }
            index
        }
        None => LabelIndex::default(),
    }
}

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{
    FileConfig, GenerateArgs, ManifestError, Result, env_optional, load_file_config,
    normalize_base_url,
};

pub(crate) const DEFAULT_FOLDERS: [&str; 5] = ["qingzhu", "liushen", "blobcat", "bilibili", "zhheo"];

const ARTALK_BASE_URL: &str = "https://cdn.jsdmirror.com/gh/scfcn/owo";
const ARTALK_OUTPUT: &str = ".json/artalk-emoji.json";

const TWIKOO_BASE_URL: &str = "https://owo.69b94fb6.er.aliyun-esa.net";
const TWIKOO_OUTPUT: &str = ".json/twikoo-emoji.json";
const TWIKOO_ORIGIN: &str = ".json/twikoo.json";

const TWIKOO_DISPLAY_NAMES: [(&str, &str); 5] = [
    ("qingzhu", "青竹君"),
    ("blobcat", "可爱猫"),
    ("bilibili", "小电视"),
    ("liushen", "清羽酱"),
    ("zhheo", "张洪Heo"),
];

pub(crate) const ENV_BASE_URL: &str = "OWO_BASE_URL";
pub(crate) const ENV_ROOT: &str = "OWO_ROOT";

/// Which picker plugin the manifest is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ManifestShape {
    /// List of groups with `key`/`val` items.
    Artalk,
    /// Map of categories with `text`/`icon` items.
    Twikoo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct GeneratorConfig {
    pub(crate) shape: ManifestShape,
    pub(crate) base_url: String,
    pub(crate) folders: Vec<String>,
    pub(crate) display_names: BTreeMap<String, String>,
    pub(crate) output_path: PathBuf,
    pub(crate) prior_manifest_path: Option<PathBuf>,
    pub(crate) root: PathBuf,
}

impl GeneratorConfig {
    pub(crate) fn preset(shape: ManifestShape) -> Self {
        let folders = DEFAULT_FOLDERS.iter().map(|f| f.to_string()).collect();
        match shape {
            ManifestShape::Artalk => Self {
                shape,
                base_url: ARTALK_BASE_URL.to_string(),
                folders,
                display_names: BTreeMap::new(),
                output_path: PathBuf::from(ARTALK_OUTPUT),
                // Artalk regenerates in place, so the output doubles as the prior.
                prior_manifest_path: Some(PathBuf::from(ARTALK_OUTPUT)),
                root: PathBuf::from("."),
            },
            ManifestShape::Twikoo => Self {
                shape,
                base_url: TWIKOO_BASE_URL.to_string(),
                folders,
                display_names: TWIKOO_DISPLAY_NAMES
                    .iter()
                    .map(|(folder, name)| (folder.to_string(), name.to_string()))
                    .collect(),
                output_path: PathBuf::from(TWIKOO_OUTPUT),
                prior_manifest_path: Some(PathBuf::from(TWIKOO_ORIGIN)),
                root: PathBuf::from("."),
            },
        }
    }

    pub(crate) fn display_name<'a>(&'a self, folder: &'a str) -> &'a str {
        self.display_names
            .get(folder)
            .map(String::as_str)
            .unwrap_or(folder)
    }

    pub(crate) fn apply_file(&mut self, file: FileConfig) {
        if let Some(base_url) = file.base_url {
            self.base_url = base_url;
        }
        if let Some(folders) = file.folders {
            self.folders = folders;
        }
        self.display_names.extend(file.display_names);
        if let Some(output) = file.output_path {
            self.output_path = output;
        }
        if let Some(prior) = file.prior_manifest_path {
            self.prior_manifest_path = Some(prior);
        }
        if let Some(root) = file.root {
            self.root = root;
        }
    }

    pub(crate) fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            self.base_url = base_url;
        }
        if let Some(root) = lookup(ENV_ROOT) {
            self.root = PathBuf::from(root);
        }
    }

    pub(crate) fn apply_args(&mut self, args: &GenerateArgs) -> Result<()> {
        if let Some(base_url) = &args.base_url {
            self.base_url = base_url.clone();
        }
        if !args.folders.is_empty() {
            self.folders = args.folders.clone();
        }
        for raw in &args.display_names {
            let (folder, name) = parse_display_name(raw)?;
            self.display_names.insert(folder, name);
        }
        if let Some(output) = &args.output {
            self.output_path = output.clone();
        }
        if let Some(origin) = &args.origin {
            self.prior_manifest_path = Some(origin.clone());
        }
        if args.no_origin {
            self.prior_manifest_path = None;
        }
        if let Some(root) = &args.root {
            self.root = root.clone();
        }
        Ok(())
    }

    /// Rejects settings that cannot produce a usable manifest. A relative
    /// base URL such as `/owo` is allowed, with a notice.
    pub(crate) fn validate(mut self) -> Result<Self> {
        self.base_url = normalize_base_url(&self.base_url);
        if self.base_url.is_empty() {
            return Err(ManifestError::InvalidArgument("empty base url".into()));
        }
        if let Err(err) = url::Url::parse(&self.base_url) {
            eprintln!(
                "[config] base url {:?} is not absolute ({err}); emoji URLs will be relative",
                self.base_url
            );
        }
        if let Some(bad) = self.folders.iter().find(|f| f.trim().is_empty()) {
            return Err(ManifestError::InvalidArgument(format!(
                "empty folder name {bad:?}"
            )));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(ManifestError::InvalidArgument("empty output path".into()));
        }
        Ok(self)
    }
}

/// Parses a `folder=name` pair.
pub(crate) fn parse_display_name(raw: &str) -> Result<(String, String)> {
    let Some((folder, name)) = raw.split_once('=') else {
        return Err(ManifestError::InvalidArgument(format!(
            "display name {raw:?} must look like FOLDER=NAME"
        )));
    };
    let folder = folder.trim();
    let name = name.trim();
    if folder.is_empty() || name.is_empty() {
        return Err(ManifestError::InvalidArgument(format!(
            "display name {raw:?} must look like FOLDER=NAME"
        )));
    }
    Ok((folder.to_string(), name.to_string()))
}

/// preset < config file < environment < flags.
pub(crate) fn resolve_config(shape: ManifestShape, args: &GenerateArgs) -> Result<GeneratorConfig> {
    let mut config = GeneratorConfig::preset(shape);
    if let Some(path) = &args.config {
        config.apply_file(load_file_config(path)?);
    }
    config.apply_env(env_optional);
    config.apply_args(args)?;
    config.validate()
}

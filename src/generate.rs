use std::fs;
use std::path::Path;

use serde_json::Map;

use super::{
    ArtalkGroup, ArtalkItem, EmojiFile, EmojiGroup, EmojiItem, GeneratorConfig, IMAGE_TYPE,
    LabelIndex, Manifest, ManifestError, ManifestShape, Result, RunSummary, TwikooCategory,
    TwikooItem, build_label_index, img_tag, scan_folder,
};

/// Labels each file, preferring the label the prior manifest gave its URL.
/// The group is returned even when `files` is empty.
pub(crate) fn build_group(
    folder: &str,
    display_name: &str,
    base_url: &str,
    files: &[EmojiFile],
    index: &LabelIndex,
) -> EmojiGroup {
    let items = files
        .iter()
        .map(|file| {
            let url = file.url(base_url);
            match index.lookup(&url) {
                Some(label) => EmojiItem {
                    label: label.to_string(),
                    url,
                    carried: true,
                },
                None => EmojiItem {
                    label: file.stem(),
                    url,
                    carried: false,
                },
            }
        })
        .collect();
    EmojiGroup {
        name: folder.to_string(),
        display_name: display_name.to_string(),
        items,
    }
}

/// One group per configured folder, in configured order.
pub(crate) fn collect_groups(config: &GeneratorConfig, index: &LabelIndex) -> Vec<EmojiGroup> {
    config
        .folders
        .iter()
        .map(|folder| {
            let files = scan_folder(&config.root, folder);
            build_group(
                folder,
                config.display_name(folder),
                &config.base_url,
                &files,
                index,
            )
        })
        .collect()
}

/// Shapes the groups for the target plugin, dropping empty ones.
pub(crate) fn assemble(shape: ManifestShape, groups: &[EmojiGroup]) -> Result<Manifest> {
    let groups = groups.iter().filter(|group| !group.is_empty());
    match shape {
        ManifestShape::Artalk => Ok(Manifest::Artalk(
            groups
                .map(|group| ArtalkGroup {
                    name: group.name.clone(),
                    kind: IMAGE_TYPE.to_string(),
                    items: group
                        .items
                        .iter()
                        .map(|item| ArtalkItem {
                            key: item.label.clone(),
                            val: item.url.clone(),
                        })
                        .collect(),
                })
                .collect(),
        )),
        ManifestShape::Twikoo => {
            let mut categories = Map::new();
            for group in groups {
                let category = TwikooCategory {
                    kind: IMAGE_TYPE.to_string(),
                    container: group
                        .items
                        .iter()
                        .map(|item| TwikooItem {
                            text: item.label.clone(),
                            icon: img_tag(&item.url),
                        })
                        .collect(),
                };
                // Two folders sharing a display name: the later one wins.
                categories.insert(group.display_name.clone(), serde_json::to_value(category)?);
            }
            Ok(Manifest::Twikoo(categories))
        }
    }
}

/// Groups whose items end up in the manifest: non-empty ones, and for
/// Twikoo only the last group per display name.
pub(crate) fn published_groups(shape: ManifestShape, groups: &[EmojiGroup]) -> Vec<&EmojiGroup> {
    let kept: Vec<&EmojiGroup> = groups.iter().filter(|g| !g.is_empty()).collect();
    match shape {
        ManifestShape::Artalk => kept,
        ManifestShape::Twikoo => kept
            .iter()
            .enumerate()
            .filter(|(i, group)| {
                !kept[i + 1..]
                    .iter()
                    .any(|later| later.display_name == group.display_name)
            })
            .map(|(_, group)| *group)
            .collect(),
    }
}

/// Two-space indented JSON with non-ASCII text left unescaped.
pub(crate) fn render_manifest(manifest: &Manifest) -> Result<String> {
    Ok(serde_json::to_string_pretty(manifest)?)
}

pub(crate) fn write_manifest(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| ManifestError::io(parent, err))?;
        }
    }
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, contents).map_err(|err| ManifestError::io(&tmp, err))?;
    fs::rename(&tmp, path).map_err(|err| ManifestError::io(path, err))?;
    Ok(())
}

/// Full pass: index the prior manifest, scan, assemble, write.
pub(crate) fn run_generate(config: &GeneratorConfig, dry_run: bool) -> Result<RunSummary> {
    let index = build_label_index(config.shape, config.prior_manifest_path.as_deref());
    let groups = collect_groups(config, &index);
    let manifest = assemble(config.shape, &groups)?;
    let rendered = render_manifest(&manifest)?;

    let kept = published_groups(config.shape, &groups);
    let items: usize = kept.iter().map(|g| g.items.len()).sum();
    let carried: usize = kept.iter().map(|g| g.carried_count()).sum();
    let mut summary = RunSummary {
        groups: manifest.group_count(),
        items,
        carried,
        fallback: items - carried,
        written: false,
    };

    if !dry_run {
        write_manifest(&config.output_path, &rendered)?;
        summary.written = true;
    }
    Ok(summary)
}

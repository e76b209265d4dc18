use std::env;

/// Filename without its last extension. Leading dots never start an
/// extension, so `.hidden` and `..png` are returned whole.
pub(crate) fn file_stem(filename: &str) -> String {
    let leading = filename.len() - filename.trim_start_matches('.').len();
    match filename[leading..].rfind('.') {
        Some(dot) => filename[..leading + dot].to_string(),
        None => filename.to_string(),
    }
}

pub(crate) fn emoji_url(base_url: &str, folder: &str, filename: &str) -> String {
    format!("{base_url}/{folder}/{filename}")
}

/// Minimal image tag Twikoo expects in a container item's `icon`.
pub(crate) fn img_tag(url: &str) -> String {
    format!("<img src='{url}'>")
}

/// Only surrounding whitespace is dropped; the prefix is otherwise used
/// verbatim so URLs match the ones earlier runs published.
pub(crate) fn normalize_base_url(raw: &str) -> String {
    raw.trim().to_string()
}

pub(crate) fn env_optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

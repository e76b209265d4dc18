use std::path::Path;

use walkdir::WalkDir;

use super::EmojiFile;

/// Plain files directly inside `root/folder`, sorted by filename.
///
/// Symlinks to files count as files. A missing folder, or a path that is
/// not a directory, logs a warning and yields nothing.
pub(crate) fn scan_folder(root: &Path, folder: &str) -> Vec<EmojiFile> {
    let dir = root.join(folder);
    if !dir.is_dir() {
        eprintln!("[scan] warning: {folder} is not a directory, skipped");
        return Vec::new();
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(&dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                eprintln!("[scan] {folder}: {err}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            eprintln!(
                "[scan] {folder}: skipping non UTF-8 file name {:?}",
                entry.file_name()
            );
            continue;
        };
        files.push(EmojiFile::new(folder, name));
    }
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn lists_plain_files_sorted() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("blobcat");
        fs::create_dir_all(dir.join("nested")).unwrap();
        fs::write(dir.join("zzz.png"), b"z").unwrap();
        fs::write(dir.join("happy.webp"), b"h").unwrap();
        fs::write(dir.join("angry.gif"), b"a").unwrap();
        fs::write(dir.join("nested").join("deep.png"), b"d").unwrap();

        let files = scan_folder(root.path(), "blobcat");
        let names: Vec<&str> = files.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(names, vec!["angry.gif", "happy.webp", "zzz.png"]);
        assert!(files.iter().all(|f| f.folder == "blobcat"));
    }

    #[test]
    fn missing_folder_yields_nothing() {
        let root = tempfile::tempdir().unwrap();
        assert!(scan_folder(root.path(), "bilibili").is_empty());
    }

    #[test]
    fn regular_file_in_place_of_folder_yields_nothing() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("zhheo"), b"not a dir").unwrap();
        assert!(scan_folder(root.path(), "zhheo").is_empty());
    }

    #[test]
    fn folder_with_only_subdirectories_is_empty() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("liushen").join("sub")).unwrap();
        assert!(scan_folder(root.path(), "liushen").is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_file_is_listed() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("qingzhu");
        fs::create_dir_all(&dir).unwrap();
        let target = root.path().join("shared.png");
        fs::write(&target, b"s").unwrap();
        std::os::unix::fs::symlink(&target, dir.join("link.png")).unwrap();

        let files = scan_folder(root.path(), "qingzhu");
        assert_eq!(files, vec![EmojiFile::new("qingzhu", "link.png")]);
    }
}

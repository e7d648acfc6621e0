//! Recursive file discovery with a fixed skip list.
//!
//! Discovery is deterministic: directory entries are sorted by file name at
//! every level, so repeated scans of an unchanged tree yield identical
//! orderings. Entries named `node_modules`, `.git`, `dist`, or starting
//! with a dot are never descended into or returned.

use std::fs;
use std::path::{Path, PathBuf};

const HTML_EXTS: &[&str] = &["html"];
const CSS_EXTS: &[&str] = &["css"];
const JS_EXTS: &[&str] = &["js", "jsx", "ts", "tsx"];
const MARKDOWN_EXTS: &[&str] = &["md"];
const IMAGE_EXTS: &[&str] = &["jpg", "jpeg", "png", "gif", "svg"];

fn skip_entry(name: &str) -> bool {
    name == "node_modules" || name == "dist" || name.starts_with('.')
}

/// Recursively collect files under `root` whose extension (without the dot,
/// case-insensitive) is in `extensions`. A missing root yields an empty
/// list rather than an error.
pub fn find_files(root: &Path, extensions: &[&str]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if !root.exists() {
        return files;
    }
    walk(root, extensions, &mut files);
    files
}

fn walk(dir: &Path, extensions: &[&str], files: &mut Vec<PathBuf>) {
    let mut entries: Vec<_> = match fs::read_dir(dir) {
        Ok(rd) => rd.flatten().collect(),
        Err(_) => return,
    };
    entries.sort_by_key(|e| e.file_name());
    for entry in entries {
        let name = entry.file_name().to_string_lossy().to_string();
        if skip_entry(&name) {
            continue;
        }
        let path = entry.path();
        if path.is_dir() {
            walk(&path, extensions, files);
        } else if path.is_file() {
            let ext = path
                .extension()
                .map(|e| e.to_string_lossy().to_ascii_lowercase());
            if let Some(ext) = ext {
                if extensions.contains(&ext.as_str()) {
                    files.push(path);
                }
            }
        }
    }
}

pub fn html_files(root: &Path) -> Vec<PathBuf> {
    find_files(root, HTML_EXTS)
}

pub fn css_files(root: &Path) -> Vec<PathBuf> {
    find_files(root, CSS_EXTS)
}

pub fn js_files(root: &Path) -> Vec<PathBuf> {
    find_files(root, JS_EXTS)
}

pub fn markdown_files(dir: &Path) -> Vec<PathBuf> {
    find_files(dir, MARKDOWN_EXTS)
}

pub fn image_files(root: &Path) -> Vec<PathBuf> {
    find_files(root, IMAGE_EXTS)
}

/// Find files anywhere under `root` whose base name equals `filename`.
/// Used by the link fixer to relocate moved targets; results follow scan
/// order, so callers get a deterministic candidate list.
pub fn find_by_name(root: &Path, filename: &str) -> Vec<PathBuf> {
    let ext: Vec<String> = Path::new(filename)
        .extension()
        .map(|e| vec![e.to_string_lossy().to_ascii_lowercase()])
        .unwrap_or_default();
    let ext_refs: Vec<&str> = ext.iter().map(String::as_str).collect();
    find_files(root, &ext_refs)
        .into_iter()
        .filter(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy() == filename)
                .unwrap_or(false)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_find_files_skips_hidden_and_build_dirs() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("pages")).unwrap();
        fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
        fs::create_dir_all(root.join(".cache")).unwrap();
        fs::create_dir_all(root.join("dist")).unwrap();
        fs::write(root.join("index.html"), "x").unwrap();
        fs::write(root.join("pages/about.html"), "x").unwrap();
        fs::write(root.join("node_modules/pkg/a.html"), "x").unwrap();
        fs::write(root.join(".cache/b.html"), "x").unwrap();
        fs::write(root.join("dist/c.html"), "x").unwrap();
        fs::write(root.join("style.css"), "x").unwrap();

        let found = html_files(root);
        assert_eq!(found.len(), 2);
        assert!(found.iter().any(|p| p.ends_with("index.html")));
        assert!(found.iter().any(|p| p.ends_with("pages/about.html")));
    }

    #[test]
    fn test_find_files_missing_root_is_empty() {
        let tmp = tempdir().unwrap();
        let gone = tmp.path().join("no-such-dir");
        assert!(find_files(&gone, &["html"]).is_empty());
    }

    #[test]
    fn test_scan_order_is_sorted_per_directory() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::write(root.join("b.css"), "x").unwrap();
        fs::write(root.join("a.css"), "x").unwrap();
        fs::write(root.join("c.css"), "x").unwrap();
        let names: Vec<String> = css_files(root)
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.css", "b.css", "c.css"]);
    }

    #[test]
    fn test_find_by_name_matches_base_name_only() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("deep/nested")).unwrap();
        fs::write(root.join("deep/nested/logo.png"), "x").unwrap();
        fs::write(root.join("other.png"), "x").unwrap();
        let hits = find_by_name(root, "logo.png");
        assert_eq!(hits.len(), 1);
        assert!(hits[0].ends_with("deep/nested/logo.png"));
    }
}

//! Blog listing generation from markdown front matter.
//!
//! Full recompute every run: every markdown file under the blog directory
//! is parsed and the ordered listing overwrites `_blog-listing.json`.

use crate::journal::MaintenanceLog;
use crate::models::blog::BlogPostMeta;
use crate::scanner;
use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;

/// Name of the generated index artifact inside the blog directory.
pub const LISTING_FILE: &str = "_blog-listing.json";

/// Parse every blog post, sort descending by date (stable, so equal dates
/// keep scan order), and overwrite the listing file. Journals the refresh;
/// an empty or missing blog directory journals and writes nothing.
pub fn generate_listing(blog_dir: &Path, journal: &MaintenanceLog) {
    let posts_paths = scanner::markdown_files(blog_dir);
    if posts_paths.is_empty() {
        journal.log("No blog posts found", "BLOG");
        return;
    }

    let mut posts: Vec<BlogPostMeta> = posts_paths
        .iter()
        .map(|path| {
            let content = fs::read_to_string(path).unwrap_or_default();
            parse_post_meta(&content, path)
        })
        .collect();
    posts.sort_by(|a, b| b.date.cmp(&a.date));

    let listing_path = blog_dir.join(LISTING_FILE);
    match serde_json::to_string_pretty(&posts) {
        Ok(json) => {
            if fs::write(&listing_path, json).is_ok() {
                journal.log_fix(
                    &listing_path.to_string_lossy(),
                    "Blog listing outdated",
                    &format!("Updated blog listing with {} posts", posts.len()),
                );
            } else {
                journal.log(
                    &format!("Could not write {}", listing_path.to_string_lossy()),
                    "ERROR",
                );
            }
        }
        Err(e) => journal.log(&format!("Could not serialize blog listing: {}", e), "ERROR"),
    }
}

/// Build one post's metadata, applying fallbacks for missing fields:
/// file stem for title, modification date for date, empty description
/// and tags otherwise.
pub fn parse_post_meta(content: &str, path: &Path) -> BlogPostMeta {
    let fm = parse_front_matter(content);
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let stem = path
        .file_stem()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let title = fm
        .iter()
        .find(|(k, _)| k == "title")
        .map(|(_, v)| v.clone())
        .unwrap_or(stem);
    let date = fm
        .iter()
        .find(|(k, _)| k == "date")
        .map(|(_, v)| v.clone())
        .unwrap_or_else(|| mtime_date(path));
    let description = fm
        .iter()
        .find(|(k, _)| k == "description")
        .map(|(_, v)| v.clone())
        .unwrap_or_default();
    let tags = fm
        .iter()
        .find(|(k, _)| k == "tags")
        .map(|(_, v)| parse_tags(v))
        .unwrap_or_default();

    BlogPostMeta {
        path: path.to_path_buf(),
        filename,
        title,
        date,
        description,
        tags,
    }
}

/// Line-oriented `key: value` pairs from a leading `---`-delimited block.
/// Surrounding quotes are stripped from values. Returns pairs in document
/// order; absent block yields an empty list.
fn parse_front_matter(content: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    let mut lines = content.lines();
    if lines.next().map(str::trim) != Some("---") {
        return pairs;
    }
    for line in lines {
        if line.trim() == "---" {
            return pairs;
        }
        if let Some((key, value)) = line.split_once(':') {
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            pairs.push((key.to_string(), strip_quotes(value.trim()).to_string()));
        }
    }
    // Unterminated block: treat as no front matter.
    Vec::new()
}

fn strip_quotes(value: &str) -> &str {
    let v = value.strip_prefix('"').and_then(|s| s.strip_suffix('"'));
    let v = v.or_else(|| value.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')));
    v.unwrap_or(value)
}

/// Tags value: optional `[...]` brackets, comma-separated, quotes stripped.
fn parse_tags(value: &str) -> Vec<String> {
    let inner = value
        .trim()
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(value);
    inner
        .split(',')
        .map(|t| strip_quotes(t.trim()).to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// ISO date of the file's mtime; today when the file cannot be stat'ed.
fn mtime_date(path: &Path) -> String {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .map(|t| DateTime::<Local>::from(t).format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| Local::now().format("%Y-%m-%d").to_string())
}

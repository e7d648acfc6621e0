//! Image checker: `<img src>` targets and CSS `url(...)` references.

use crate::checks::{is_special_ref, resolve_ref};
use crate::models::{Category, Issue, Severity};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static IMG_SRC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<img[^>]+src=["']([^"']+)["']"#).unwrap());
/// Matches CSS `url(...)` values. Shared with the link fixer so broken
/// background references are rewritten the same way attributes are.
pub(crate) static CSS_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"url\(['"]?([^'"()]+)['"]?\)"#).unwrap());

/// Existence check for image references in HTML and CSS content. Missing
/// targets are `error, autofix` issues; external/data references are
/// skipped like the link checker does.
pub fn check_image_paths(content: &str, file: &Path, root: &Path) -> Vec<Issue> {
    let mut issues = Vec::new();

    for cap in IMG_SRC_RE.captures_iter(content) {
        let src = &cap[1];
        if is_special_ref(src) {
            continue;
        }
        if !resolve_ref(src, file, root).exists() {
            issues.push(Issue::in_file(
                Severity::Error,
                Category::MissingImage,
                format!("Image not found: {}", src),
                file,
                true,
            ));
        }
    }

    for cap in CSS_URL_RE.captures_iter(content) {
        let src = &cap[1];
        if is_special_ref(src) {
            continue;
        }
        if !resolve_ref(src, file, root).exists() {
            issues.push(Issue::in_file(
                Severity::Error,
                Category::MissingBackgroundImage,
                format!("Background image not found: {}", src),
                file,
                true,
            ));
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_img_and_background_flagged_separately() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        let page = root.join("index.html");
        fs::write(&page, "x").unwrap();

        let content = concat!(
            r#"<img src="hero.png" alt="">"#,
            r#"<div style="background: url('bg.jpg')"></div>"#,
        );
        let issues = check_image_paths(content, &page, root);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].category, Category::MissingImage);
        assert_eq!(issues[1].category, Category::MissingBackgroundImage);
        assert!(issues.iter().all(|i| i.autofix));
    }

    #[test]
    fn test_existing_and_remote_images_pass() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::write(root.join("hero.png"), "x").unwrap();
        let page = root.join("index.html");
        fs::write(&page, "x").unwrap();

        let content = concat!(
            r#"<img src="hero.png">"#,
            r#"<img src="https://cdn.example.com/a.png">"#,
            r#"<img src="data:image/png;base64,AA">"#,
            "background: url(/hero.png);",
        );
        assert!(check_image_paths(content, &page, root).is_empty());
    }
}

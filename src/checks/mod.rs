//! Checkers: pure mappings from file content to issue lists.
//!
//! Each submodule inspects one concern and emits `Issue`s without mutating
//! anything. Shared here: reference classification (external/special vs
//! internal) and resolution of internal references against the project
//! tree, used by both the link and image checkers and mirrored by the
//! link fixer.

pub mod html;
pub mod images;
pub mod links;
pub mod perf;
pub mod responsive;

use std::path::{Path, PathBuf};

/// References the checkers never resolve: external URLs, protocol-relative
/// URLs, data URIs, mail/tel schemes, and in-page anchors.
pub fn is_special_ref(link: &str) -> bool {
    link.starts_with("http")
        || link.starts_with("//")
        || link.starts_with("data:")
        || link.starts_with("mailto:")
        || link.starts_with("tel:")
        || link.starts_with('#')
}

/// Resolve an internal reference to an absolute path: root-relative values
/// (`/...`) against the project root, anything else against the directory
/// of the referencing file. Query strings and fragments are stripped first.
pub fn resolve_ref(link: &str, file: &Path, root: &Path) -> PathBuf {
    let clean = link.split(['#', '?']).next().unwrap_or(link);
    if let Some(rooted) = clean.strip_prefix('/') {
        root.join(rooted)
    } else {
        file.parent().unwrap_or(root).join(clean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_refs_are_skipped() {
        for l in [
            "https://example.com",
            "http://example.com",
            "//cdn.example.com/a.js",
            "data:image/png;base64,AAAA",
            "mailto:hi@example.com",
            "tel:+123",
            "#section",
        ] {
            assert!(is_special_ref(l), "{} should be special", l);
        }
        assert!(!is_special_ref("about.html"));
        assert!(!is_special_ref("/assets/logo.png"));
    }

    #[test]
    fn test_resolve_ref_root_vs_file_relative() {
        let root = Path::new("/site");
        let file = Path::new("/site/pages/index.html");
        assert_eq!(
            resolve_ref("/assets/a.css", file, root),
            PathBuf::from("/site/assets/a.css")
        );
        assert_eq!(
            resolve_ref("img/b.png", file, root),
            PathBuf::from("/site/pages/img/b.png")
        );
        assert_eq!(
            resolve_ref("about.html#team", file, root),
            PathBuf::from("/site/pages/about.html")
        );
    }
}

//! Performance checks based on on-disk file size.
//!
//! The only checker that touches the filesystem: it stats the file it was
//! given. Oversized images are marked autofixable so they reach the fix
//! stage and the suggestion roll-up; no optimizer is wired in, so they are
//! reported rather than rewritten.

use crate::models::{Category, Issue, Severity};
use crate::utils::size_kb;
use std::fs;
use std::path::Path;

/// Size budgets in kilobytes.
pub const MAX_JS_KB: f64 = 500.0;
pub const MAX_CSS_KB: f64 = 200.0;
pub const MAX_IMAGE_KB: f64 = 500.0;

const IMAGE_EXTS: &[&str] = &["jpg", "jpeg", "png", "gif", "svg"];

/// Flag files exceeding their extension's size budget. Unreadable files
/// produce nothing; they surface elsewhere as read failures.
pub fn check_performance(file: &Path) -> Vec<Issue> {
    let mut issues = Vec::new();
    let Ok(meta) = fs::metadata(file) else {
        return issues;
    };
    let kb = size_kb(meta.len());
    let ext = file
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    if ext == "js" && kb > MAX_JS_KB {
        issues.push(Issue::in_file(
            Severity::Warning,
            Category::Performance,
            format!("Large JavaScript file ({:.2} KB) - consider code splitting", kb),
            file,
            false,
        ));
    }
    if ext == "css" && kb > MAX_CSS_KB {
        issues.push(Issue::in_file(
            Severity::Warning,
            Category::Performance,
            format!("Large CSS file ({:.2} KB) - consider optimization", kb),
            file,
            false,
        ));
    }
    if IMAGE_EXTS.contains(&ext.as_str()) && kb > MAX_IMAGE_KB {
        issues.push(Issue::in_file(
            Severity::Warning,
            Category::Performance,
            format!("Large image file ({:.2} KB) - consider optimization", kb),
            file,
            true,
        ));
    }

    issues
}

//! Responsive design heuristics for CSS files.

use crate::models::{Category, Issue, Severity};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static MEDIA_QUERY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@media[^{]+\{").unwrap());
static FIXED_WIDTH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"width:\s*\d+px").unwrap());

/// Fixed-pixel width count above which a warning is raised.
pub const MAX_FIXED_WIDTHS: usize = 10;

/// Flag stylesheets with no `@media` rule (info) and stylesheets leaning
/// on more than `MAX_FIXED_WIDTHS` fixed pixel widths (warning).
pub fn check_responsive_design(content: &str, file: &Path) -> Vec<Issue> {
    let mut issues = Vec::new();

    if !MEDIA_QUERY_RE.is_match(content) {
        issues.push(Issue::in_file(
            Severity::Info,
            Category::ResponsiveDesign,
            "No media queries found - consider adding responsive breakpoints".into(),
            file,
            false,
        ));
    }

    let fixed_widths = FIXED_WIDTH_RE.find_iter(content).count();
    if fixed_widths > MAX_FIXED_WIDTHS {
        issues.push(Issue::in_file(
            Severity::Warning,
            Category::ResponsiveDesign,
            format!(
                "Found {} fixed pixel widths - consider using responsive units",
                fixed_widths
            ),
            file,
            false,
        ));
    }

    issues
}

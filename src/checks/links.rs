//! Link checker: broken internal references and external link inventory.

use crate::checks::{is_special_ref, resolve_ref};
use crate::models::{Category, Issue, Severity};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Matches `href="..."` / `src='...'` attribute values. Shared with the
/// link fixer so both stages see the same references.
pub(crate) static ATTR_REF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?:href|src)=["']([^"']+)["']"#).unwrap());
static EXTERNAL_HREF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href=["'](https?://[^"']+)["']"#).unwrap());

/// Emit one `error, autofix` issue per `href`/`src` value that resolves to
/// a nonexistent file. External and special references are skipped.
pub fn check_internal_links(content: &str, file: &Path, root: &Path) -> Vec<Issue> {
    let mut issues = Vec::new();
    for cap in ATTR_REF_RE.captures_iter(content) {
        let link = &cap[1];
        if is_special_ref(link) {
            continue;
        }
        let target = resolve_ref(link, file, root);
        if !target.exists() {
            issues.push(Issue::in_file(
                Severity::Error,
                Category::BrokenLink,
                format!("Broken internal link: {}", link),
                file,
                true,
            ));
        }
    }
    issues
}

/// Collect `http(s)` hrefs as informational issues. Reachability is never
/// checked; these feed the external-link suggestion roll-up.
pub fn check_external_links(content: &str, file: &Path) -> Vec<Issue> {
    EXTERNAL_HREF_RE
        .captures_iter(content)
        .map(|cap| {
            Issue::in_file(
                Severity::Info,
                Category::ExternalLink,
                format!("External link found: {}", &cap[1]),
                file,
                false,
            )
        })
        .collect()
}

//! Structural HTML presence checks.
//!
//! A fixed checklist, not a parser: doctype, `lang` attribute, non-empty
//! title, charset meta, viewport meta, and a heuristic open/close tag
//! count parity check. Every absence is a warning; none are auto-fixed.

use crate::models::{Category, Issue, Severity};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static DOCTYPE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<!doctype html>").unwrap());
static HTML_LANG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<html[^>]+lang=").unwrap());
static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<title>[^<]+</title>").unwrap());
static CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<meta[^>]+charset=").unwrap());
static VIEWPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<meta[^>]+name=["']viewport["']"#).unwrap());
static OPEN_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<(\w+)[^>]*>").unwrap());
static CLOSE_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</(\w+)>").unwrap());

fn warn(file: &Path, message: &str) -> Issue {
    Issue::in_file(
        Severity::Warning,
        Category::HtmlValidation,
        message.to_string(),
        file,
        false,
    )
}

/// Run the structural checklist over one HTML document.
pub fn validate_basics(content: &str, file: &Path) -> Vec<Issue> {
    let mut issues = Vec::new();

    if !DOCTYPE_RE.is_match(content) {
        issues.push(warn(file, "Missing DOCTYPE declaration"));
    }
    if !HTML_LANG_RE.is_match(content) {
        issues.push(warn(file, "Missing lang attribute on <html> tag"));
    }
    if !TITLE_RE.is_match(content) {
        issues.push(warn(file, "Missing or empty <title> tag"));
    }
    if !CHARSET_RE.is_match(content) {
        issues.push(warn(file, "Missing charset meta tag"));
    }
    if !VIEWPORT_RE.is_match(content) {
        issues.push(warn(file, "Missing viewport meta tag"));
    }

    // Heuristic only. Void elements and explicit self-closing tags carry
    // no close tag and are excluded from the open count.
    let opens = OPEN_TAG_RE
        .captures_iter(content)
        .filter(|cap| {
            let name = cap[1].to_ascii_lowercase();
            !VOID_ELEMENTS.contains(&name.as_str()) && !cap[0].ends_with("/>")
        })
        .count();
    let closes = CLOSE_TAG_RE.find_iter(content).count();
    if opens != closes {
        issues.push(warn(file, "Potential unclosed HTML tags detected"));
    }

    issues
}

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

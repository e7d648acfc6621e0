//! Timestamp updater for `Last updated:` stamps.

use crate::journal::MaintenanceLog;
use crate::utils::display_path;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static TIMESTAMP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(Last updated|Updated):\s*\d{4}-\d{2}-\d{2}").unwrap());

/// Rewrite `Last updated:`/`Updated:` date stamps to `today`
/// (`YYYY-MM-DD`). No-op when no stamp exists; idempotent when the stamp
/// is already current. The change is journaled only when the text
/// actually changed, and as available rather than applied under `dry_run`.
pub fn update_timestamps(
    content: &str,
    file: &Path,
    root: &Path,
    today: &str,
    dry_run: bool,
    journal: &MaintenanceLog,
) -> String {
    if !TIMESTAMP_RE.is_match(content) {
        return content.to_string();
    }
    let replacement = format!("Last updated: {}", today);
    let updated = TIMESTAMP_RE.replace_all(content, replacement.as_str());
    if updated != content {
        if dry_run {
            journal.log(
                &format!(
                    "Would refresh timestamp in {}: {}",
                    display_path(file, root),
                    today
                ),
                "DRY-RUN",
            );
        } else {
            journal.log_fix(
                &display_path(file, root),
                "Outdated timestamp",
                &format!("Updated to: {}", today),
            );
        }
    }
    updated.into_owned()
}

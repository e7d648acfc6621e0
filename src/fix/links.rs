//! Link fixer: rewrite broken internal references to relocated targets.
//!
//! For every broken `href`/`src` attribute or CSS `url(...)` value the
//! project tree is searched for a file with the same base name. When
//! candidates exist the reference is rewritten to a path relative to the
//! referencing file. Tie-break when
//! several same-named files exist: fewest path components first, then
//! lexicographic path order, so the shallowest (and then alphabetically
//! first) candidate always wins.

use crate::checks::images::CSS_URL_RE;
use crate::checks::links::ATTR_REF_RE;
use crate::checks::{is_special_ref, resolve_ref};
use crate::journal::MaintenanceLog;
use crate::scanner;
use crate::utils::display_path;
use std::path::{Path, PathBuf};

/// Rewrite broken internal references in `content`, returning the possibly
/// modified content and the original link values that were fixed. With
/// `dry_run` the rewrite is still computed but journaled as available
/// rather than applied.
pub fn fix_broken_internal_links(
    content: &str,
    file: &Path,
    root: &Path,
    dry_run: bool,
    journal: &MaintenanceLog,
) -> (String, Vec<String>) {
    let mut fixed_content = content.to_string();
    let mut fixed_links = Vec::new();

    let mut matches: Vec<(String, String)> = ATTR_REF_RE
        .captures_iter(content)
        .map(|cap| (cap[0].to_string(), cap[1].to_string()))
        .collect();
    matches.extend(
        CSS_URL_RE
            .captures_iter(content)
            .map(|cap| (cap[0].to_string(), cap[1].to_string())),
    );

    for (attr, link) in matches {
        if is_special_ref(&link) {
            continue;
        }
        if resolve_ref(&link, file, root).exists() {
            continue;
        }
        let filename = match Path::new(&link).file_name() {
            Some(n) => n.to_string_lossy().to_string(),
            None => continue,
        };
        let Some(target) = best_candidate(scanner::find_by_name(root, &filename)) else {
            continue;
        };
        let base = file.parent().unwrap_or(root);
        let Some(rel) = pathdiff::diff_paths(&target, base) else {
            continue;
        };
        let new_link = rel.to_string_lossy().to_string();
        if new_link == link {
            continue;
        }
        let new_attr = attr.replace(&link, &new_link);
        fixed_content = fixed_content.replace(&attr, &new_attr);
        if dry_run {
            journal.log(
                &format!(
                    "Would update broken link in {}: {} -> {}",
                    display_path(file, root),
                    link,
                    new_link
                ),
                "DRY-RUN",
            );
        } else {
            journal.log_fix(
                &display_path(file, root),
                &format!("Broken link: {}", link),
                &format!("Updated to: {}", new_link),
            );
        }
        fixed_links.push(link);
    }

    (fixed_content, fixed_links)
}

/// Deterministic candidate selection: fewest components, then lexicographic.
fn best_candidate(mut candidates: Vec<PathBuf>) -> Option<PathBuf> {
    candidates.sort_by(|a, b| {
        a.components()
            .count()
            .cmp(&b.components().count())
            .then_with(|| a.cmp(b))
    });
    candidates.into_iter().next()
}

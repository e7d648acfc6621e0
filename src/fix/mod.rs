//! Fix stage: apply mechanical remediations to autofixable issues.
//!
//! Issues are grouped per file so each file is read and written once.
//! Failures on one file are journaled and never stop the remaining files
//! from being processed.

pub mod format;
pub mod links;
pub mod timestamp;

use crate::journal::MaintenanceLog;
use crate::models::{Category, Issue};
use crate::utils::display_path;
use std::fs;
use std::path::{Path, PathBuf};

/// Apply fixers to every `autofix` issue, marking `fixed = true` on the
/// issues whose reference was actually rewritten. Returns clones of the
/// fixed issues in encounter order. With `dry_run` nothing is written and
/// nothing is marked fixed; available fixes are journaled as would-fix
/// notes instead.
pub fn apply_fixes(
    issues: &mut [Issue],
    root: &Path,
    today: &str,
    dry_run: bool,
    journal: &MaintenanceLog,
) -> Vec<Issue> {
    let mut fixes_applied = Vec::new();

    // Files in first-appearance order; issues arrive in scan order. Only
    // reference issues have a fixer; oversized images stay report-only.
    let mut files: Vec<PathBuf> = Vec::new();
    for issue in issues.iter() {
        if issue.autofix && fixable_category(issue.category) {
            if let Some(f) = issue.file.as_ref() {
                if !files.contains(f) {
                    files.push(f.clone());
                }
            }
        }
    }

    for file in files {
        let content = match fs::read_to_string(&file) {
            Ok(s) => s,
            Err(e) => {
                journal.log(
                    &format!("Could not fix {}: {}", display_path(&file, root), e),
                    "ERROR",
                );
                continue;
            }
        };

        let (after_links, fixed_links) =
            links::fix_broken_internal_links(&content, &file, root, dry_run, journal);
        let after_stamps =
            timestamp::update_timestamps(&after_links, &file, root, today, dry_run, journal);

        let changed = after_stamps != content;
        if changed && !dry_run {
            if let Err(e) = fs::write(&file, &after_stamps) {
                journal.log(
                    &format!("Could not fix {}: {}", display_path(&file, root), e),
                    "ERROR",
                );
                continue;
            }
        }

        if dry_run {
            continue;
        }
        for issue in issues.iter_mut() {
            if issue.file.as_deref() != Some(file.as_path()) || !issue.autofix || issue.fixed {
                continue;
            }
            // Checker messages end in `: <link>`; compare the extracted link
            // exactly so e.g. a fixed `doc.html` never claims `old-doc.html`.
            let link_fixed = fixable_category(issue.category)
                && issue
                    .message
                    .split_once(": ")
                    .map(|(_, link)| fixed_links.iter().any(|l| l == link))
                    .unwrap_or(false);
            if link_fixed {
                issue.fixed = true;
                fixes_applied.push(issue.clone());
            }
        }
    }

    fixes_applied
}

fn fixable_category(category: Category) -> bool {
    matches!(
        category,
        Category::BrokenLink | Category::MissingImage | Category::MissingBackgroundImage
    )
}

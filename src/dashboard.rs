//! Dashboard block management inside the project README.
//!
//! The block lives between two sentinel comments and is fully regenerated
//! every run: any existing block (inclusive of markers) is excised and a
//! fresh one is inserted at the same position, or appended when no block
//! existed yet. Exactly one block exists after every call.

use crate::models::{Issue, Report};
use crate::utils::display_path;
use std::fs;
use std::path::Path;

pub const DASHBOARD_START: &str = "<!-- AGENT-DASHBOARD-START -->";
pub const DASHBOARD_END: &str = "<!-- AGENT-DASHBOARD-END -->";

const MAX_ISSUES_SHOWN: usize = 10;
const MAX_FIXES_SHOWN: usize = 5;
const MAX_SUGGESTIONS_SHOWN: usize = 5;

/// Render the report into the readme's dashboard block. A missing readme
/// is created with a default title. Returns an error only when the final
/// write fails.
pub fn update_dashboard(report: &Report, readme_file: &Path, root: &Path) -> std::io::Result<()> {
    let readme = match fs::read_to_string(readme_file) {
        Ok(s) => s,
        Err(_) => "# Site\n\n".to_string(),
    };

    let start = readme.find(DASHBOARD_START);
    let end = readme.find(DASHBOARD_END);
    let (without_block, insert_at) = match (start, end) {
        (Some(s), Some(e)) if e >= s => {
            let after = e + DASHBOARD_END.len();
            (format!("{}{}", &readme[..s], &readme[after..]), Some(s))
        }
        _ => (readme, None),
    };

    let block = render_block(report, root);
    let updated = match insert_at {
        Some(pos) => format!("{}{}{}", &without_block[..pos], block, &without_block[pos..]),
        None => format!("{}\n\n{}\n", without_block.trim_end(), block),
    };
    fs::write(readme_file, updated)
}

fn issue_line(issue: &Issue, root: &Path) -> String {
    let loc = issue
        .file
        .as_ref()
        .map(|f| format!(" (`{}`)", display_path(f, root)))
        .unwrap_or_default();
    format!(
        "- [{}] {}: {}{}",
        issue.severity.label(),
        issue.category.label(),
        issue.message,
        loc
    )
}

/// Build the sentinel-delimited block, with no surrounding newlines so
/// in-place replacement is byte-idempotent.
pub fn render_block(report: &Report, root: &Path) -> String {
    let mut out = String::new();
    out.push_str(DASHBOARD_START);
    out.push_str("\n## Site Maintenance Dashboard\n\n");
    out.push_str(&format!("**Last Check:** {}\n\n", report.timestamp));
    out.push_str("### Status Overview\n\n");
    out.push_str("| Metric | Count |\n|--------|-------|\n");
    out.push_str(&format!(
        "| Total Issues Found | {} |\n",
        report.metrics.total_issues
    ));
    out.push_str(&format!("| Auto-Fixed | {} |\n", report.metrics.auto_fixed));
    out.push_str(&format!(
        "| Requires Attention | {} |\n\n",
        report.metrics.requires_attention
    ));

    out.push_str("### Recent Issues\n\n");
    if report.issues.is_empty() {
        out.push_str("- No issues found in this run\n");
    } else {
        for issue in report.issues.iter().take(MAX_ISSUES_SHOWN) {
            out.push_str(&issue_line(issue, root));
            out.push('\n');
        }
    }

    out.push_str("\n### Recent Fixes\n\n");
    if report.fixes_applied.is_empty() {
        out.push_str("- No automatic fixes applied in this run\n");
    } else {
        for fix in report.fixes_applied.iter().take(MAX_FIXES_SHOWN) {
            out.push_str(&issue_line(fix, root));
            out.push('\n');
        }
    }

    out.push_str("\n### Suggestions\n\n");
    if report.suggestions.is_empty() {
        out.push_str("- No suggestions at this time\n");
    } else {
        for s in report.suggestions.iter().take(MAX_SUGGESTIONS_SHOWN) {
            out.push_str(&format!("- {}: {}\n", s.category.label(), s.message));
        }
    }

    out.push_str("\n*This dashboard is automatically updated by the site maintenance agent.*\n\n");
    out.push_str(DASHBOARD_END);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Severity};
    use tempfile::tempdir;

    fn sample_report() -> Report {
        let mut report = Report::new("2026-08-29T10:00:00Z".into());
        report.issues = vec![Issue::in_file(
            Severity::Error,
            Category::BrokenLink,
            "Broken internal link: x.html".into(),
            Path::new("index.html"),
            true,
        )];
        report.suggestions = vec![Issue::global(
            Severity::Info,
            Category::Performance,
            "Found 2 performance optimization opportunities".into(),
        )];
        report.finalize_metrics();
        report
    }

    #[test]
    fn test_block_appended_to_existing_readme() {
        let tmp = tempdir().unwrap();
        let readme = tmp.path().join("README.md");
        fs::write(&readme, "# Project\n\nIntro text.\n").unwrap();

        update_dashboard(&sample_report(), &readme, tmp.path()).unwrap();
        let content = fs::read_to_string(&readme).unwrap();
        assert!(content.starts_with("# Project"));
        assert!(content.contains("Intro text."));
        assert_eq!(content.matches(DASHBOARD_START).count(), 1);
        assert!(content.contains("| Total Issues Found | 1 |"));
        assert!(content.contains("[ERROR] Broken Link"));
    }

    #[test]
    fn test_repeated_updates_keep_one_block_in_place() {
        let tmp = tempdir().unwrap();
        let readme = tmp.path().join("README.md");
        fs::write(&readme, "# Project\n\nBefore.\n").unwrap();

        update_dashboard(&sample_report(), &readme, tmp.path()).unwrap();
        let first = fs::read_to_string(&readme).unwrap();
        let pos_first = first.find(DASHBOARD_START).unwrap();

        update_dashboard(&sample_report(), &readme, tmp.path()).unwrap();
        let second = fs::read_to_string(&readme).unwrap();
        assert_eq!(second.matches(DASHBOARD_START).count(), 1);
        assert_eq!(second.matches(DASHBOARD_END).count(), 1);
        assert_eq!(second.find(DASHBOARD_START).unwrap(), pos_first);
        // Idempotent with identical report content.
        assert_eq!(first, second);
    }

    #[test]
    fn test_block_replaced_between_surrounding_text() {
        let tmp = tempdir().unwrap();
        let readme = tmp.path().join("README.md");
        let seeded = format!(
            "# Project\n\n{}\nstale dashboard\n{}\n\n## License\nMIT\n",
            DASHBOARD_START, DASHBOARD_END
        );
        fs::write(&readme, &seeded).unwrap();

        update_dashboard(&sample_report(), &readme, tmp.path()).unwrap();
        let content = fs::read_to_string(&readme).unwrap();
        assert!(!content.contains("stale dashboard"));
        assert!(content.contains("## License"));
        // Block stays before the license section, where the markers were.
        assert!(content.find(DASHBOARD_START).unwrap() < content.find("## License").unwrap());
    }

    #[test]
    fn test_missing_readme_created_with_default_title() {
        let tmp = tempdir().unwrap();
        let readme = tmp.path().join("README.md");
        update_dashboard(&sample_report(), &readme, tmp.path()).unwrap();
        let content = fs::read_to_string(&readme).unwrap();
        assert!(content.starts_with("# Site"));
        assert_eq!(content.matches(DASHBOARD_START).count(), 1);
    }

    #[test]
    fn test_empty_sections_render_placeholders() {
        let tmp = tempdir().unwrap();
        let readme = tmp.path().join("README.md");
        let report = Report::new("t".into());
        update_dashboard(&report, &readme, tmp.path()).unwrap();
        let content = fs::read_to_string(&readme).unwrap();
        assert!(content.contains("- No issues found in this run"));
        assert!(content.contains("- No automatic fixes applied in this run"));
        assert!(content.contains("- No suggestions at this time"));
    }
}

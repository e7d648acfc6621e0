//! Agent orchestrator: one full maintenance pass over the project.
//!
//! Fixed sequential pipeline: discover -> check -> fix -> format ->
//! suggest -> blog index -> dashboard -> metrics. No stage is skipped
//! because an earlier one found problems; per-file failures are isolated
//! inside the fix stage. Repeated runs from a clean or partially-fixed
//! tree converge (the pipeline is re-entrant).

use crate::checks;
use crate::config::Effective;
use crate::fix;
use crate::journal::MaintenanceLog;
use crate::models::{Category, Issue, Report, Severity};
use crate::scanner;
use crate::{blog, dashboard};
use chrono::Local;
use std::fs;
use std::path::PathBuf;

/// Files found by the discovery stage, threaded explicitly through the
/// pipeline instead of living on the config.
pub struct DiscoveredFiles {
    pub html: Vec<PathBuf>,
    pub css: Vec<PathBuf>,
    pub js: Vec<PathBuf>,
    pub images: Vec<PathBuf>,
}

pub struct SiteAgent<'a> {
    config: &'a Effective,
    journal: MaintenanceLog,
}

impl<'a> SiteAgent<'a> {
    pub fn new(config: &'a Effective, echo: bool) -> Self {
        SiteAgent {
            journal: MaintenanceLog::new(&config.log_file, echo),
            config,
        }
    }

    /// Run the full pipeline and return the report for printing.
    pub fn run(&self) -> Report {
        self.journal.log("Site maintenance check started", "AGENT");
        let mut report = Report::new(Local::now().to_rfc3339());

        let files = self.discover_files();
        self.check_site(&files, &mut report);
        self.apply_fixes(&mut report);
        self.format_files(&files);
        self.generate_suggestions(&mut report);
        blog::generate_listing(&self.config.blog_dir, &self.journal);
        self.update_dashboard(&report);
        report.finalize_metrics();

        self.journal.log("Site maintenance check completed", "AGENT");
        report
    }

    fn discover_files(&self) -> DiscoveredFiles {
        let root = &self.config.project_root;
        DiscoveredFiles {
            html: scanner::html_files(root),
            css: scanner::css_files(root),
            js: scanner::js_files(root),
            images: scanner::image_files(root),
        }
    }

    /// Run every checker over the discovered files, accumulating issues in
    /// scan order.
    fn check_site(&self, files: &DiscoveredFiles, report: &mut Report) {
        let root = &self.config.project_root;
        for html_file in &files.html {
            let Ok(content) = fs::read_to_string(html_file) else {
                continue;
            };
            report
                .issues
                .extend(checks::links::check_internal_links(&content, html_file, root));
            report
                .issues
                .extend(checks::links::check_external_links(&content, html_file));
            report
                .issues
                .extend(checks::images::check_image_paths(&content, html_file, root));
            report
                .issues
                .extend(checks::html::validate_basics(&content, html_file));
            report.issues.extend(checks::perf::check_performance(html_file));
        }
        for css_file in &files.css {
            let Ok(content) = fs::read_to_string(css_file) else {
                continue;
            };
            report
                .issues
                .extend(checks::images::check_image_paths(&content, css_file, root));
            report
                .issues
                .extend(checks::responsive::check_responsive_design(&content, css_file));
            report.issues.extend(checks::perf::check_performance(css_file));
        }
        for js_file in &files.js {
            report.issues.extend(checks::perf::check_performance(js_file));
        }
        for image_file in &files.images {
            report.issues.extend(checks::perf::check_performance(image_file));
        }
    }

    fn apply_fixes(&self, report: &mut Report) {
        let today = Local::now().format("%Y-%m-%d").to_string();
        report.fixes_applied = fix::apply_fixes(
            &mut report.issues,
            &self.config.project_root,
            &today,
            self.config.dry_run,
            &self.journal,
        );
    }

    fn format_files(&self, files: &DiscoveredFiles) {
        if self.config.no_format || self.config.dry_run {
            return;
        }
        let targets: Vec<PathBuf> = files.html.iter().chain(files.css.iter()).cloned().collect();
        fix::format::format_files(
            &targets,
            self.config.format_command.as_deref(),
            &self.config.project_root,
            &self.journal,
        );
    }

    /// Categorical aggregation over collected issues.
    fn generate_suggestions(&self, report: &mut Report) {
        let external_links = report
            .issues
            .iter()
            .filter(|i| i.category == Category::ExternalLink)
            .count();
        if external_links > 0 {
            report.suggestions.push(Issue::global(
                Severity::Warning,
                Category::ExternalLinks,
                format!(
                    "Found {} external links - consider checking them periodically",
                    external_links
                ),
            ));
        }

        let perf_issues = report
            .issues
            .iter()
            .filter(|i| i.category == Category::Performance)
            .count();
        if perf_issues > 0 {
            report.suggestions.push(Issue::global(
                Severity::Info,
                Category::Performance,
                format!("Found {} performance optimization opportunities", perf_issues),
            ));
        }

        let responsive = report
            .issues
            .iter()
            .any(|i| i.category == Category::ResponsiveDesign);
        if responsive {
            report.suggestions.push(Issue::global(
                Severity::Info,
                Category::Ux,
                "Consider improving responsive design for better mobile experience".into(),
            ));
        }

        for s in &report.suggestions {
            self.journal
                .log_suggestion(s.category.label(), &s.message, "See dashboard for details");
        }
    }

    fn update_dashboard(&self, report: &Report) {
        if self.config.dry_run {
            return;
        }
        if let Err(e) =
            dashboard::update_dashboard(report, &self.config.readme_file, &self.config.project_root)
        {
            self.journal
                .log(&format!("Could not update dashboard: {}", e), "ERROR");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::resolve_effective;
    use tempfile::tempdir;

    fn effective_for(root: &std::path::Path, dry_run: bool) -> Effective {
        // .git marks the root so detection never escapes the tempdir.
        fs::create_dir_all(root.join(".git")).unwrap();
        resolve_effective(root.to_str(), None, dry_run, true, None)
    }

    #[test]
    fn test_full_run_fixes_broken_link_and_reports() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("pages")).unwrap();
        fs::write(root.join("pages/missing.html"), "target").unwrap();
        fs::write(
            root.join("index.html"),
            concat!(
                "<!DOCTYPE html>",
                r#"<html lang="en"><head><meta charset="utf-8">"#,
                r#"<meta name="viewport" content="w"><title>T</title></head>"#,
                r#"<body><a href="missing.html">go</a></body></html>"#,
            ),
        )
        .unwrap();

        let eff = effective_for(root, false);
        let agent = SiteAgent::new(&eff, false);
        let report = agent.run();

        assert_eq!(report.metrics.auto_fixed, 1);
        assert!(report
            .issues
            .iter()
            .any(|i| i.category == Category::BrokenLink && i.fixed));
        let rewritten = fs::read_to_string(root.join("index.html")).unwrap();
        assert!(rewritten.contains(r#"href="pages/missing.html""#));
        // Audit trail and dashboard were produced.
        assert!(root.join("maintenance-log.md").exists());
        let readme = fs::read_to_string(root.join("README.md")).unwrap();
        assert!(readme.contains(crate::dashboard::DASHBOARD_START));
    }

    #[test]
    fn test_rerun_converges_to_no_fixes() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("pages")).unwrap();
        fs::write(root.join("pages/missing.html"), "target").unwrap();
        fs::write(
            root.join("index.html"),
            r#"<a href="missing.html">go</a>"#,
        )
        .unwrap();

        let eff = effective_for(root, false);
        let first = SiteAgent::new(&eff, false).run();
        assert_eq!(first.metrics.auto_fixed, 1);
        let second = SiteAgent::new(&eff, false).run();
        assert_eq!(second.metrics.auto_fixed, 0);
        assert!(!second
            .issues
            .iter()
            .any(|i| i.category == Category::BrokenLink));
    }

    #[test]
    fn test_dry_run_touches_nothing() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        let original = r#"<a href="gone.html">x</a>"#;
        fs::write(root.join("index.html"), original).unwrap();

        let eff = effective_for(root, true);
        let report = SiteAgent::new(&eff, false).run();
        assert_eq!(report.metrics.auto_fixed, 0);
        assert_eq!(
            fs::read_to_string(root.join("index.html")).unwrap(),
            original
        );
        assert!(!root.join("README.md").exists());
    }

    #[test]
    fn test_suggestions_aggregate_by_category() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::write(
            root.join("index.html"),
            concat!(
                "<!DOCTYPE html>",
                r#"<html lang="en"><head><meta charset="u">"#,
                r#"<meta name="viewport" content="w"><title>T</title></head><body>"#,
                r#"<a href="https://example.com/a">a</a>"#,
                r#"<a href="https://example.com/b">b</a>"#,
                "</body></html>",
            ),
        )
        .unwrap();
        fs::write(root.join("style.css"), ".a { color: red; }").unwrap();

        let eff = effective_for(root, false);
        let report = SiteAgent::new(&eff, false).run();

        let ext = report
            .suggestions
            .iter()
            .find(|s| s.category == Category::ExternalLinks)
            .expect("external link suggestion");
        assert!(ext.message.contains("Found 2 external links"));
        assert!(report
            .suggestions
            .iter()
            .any(|s| s.category == Category::Ux));
    }

    #[test]
    fn test_issues_follow_scan_order() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::write(root.join("a.html"), r#"<a href="x.html">x</a>"#).unwrap();
        fs::write(root.join("b.html"), r#"<a href="y.html">y</a>"#).unwrap();

        let eff = effective_for(root, true);
        let report = SiteAgent::new(&eff, false).run();
        let broken: Vec<&str> = report
            .issues
            .iter()
            .filter(|i| i.category == Category::BrokenLink)
            .map(|i| i.message.as_str())
            .collect();
        assert_eq!(
            broken,
            vec!["Broken internal link: x.html", "Broken internal link: y.html"]
        );
    }
}

//! Shared data models for issues, reports, and blog metadata.

pub mod blog;

use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
/// Issue severity. `Error` marks actionable breakage, `Warning` structural
/// concerns, `Info` observations collected for reporting only.
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
        }
    }
}

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
/// Closed set of issue categories emitted by checkers and the suggestion
/// roll-up. Serialized under the human-readable names used in the
/// dashboard and the maintenance log.
pub enum Category {
    #[serde(rename = "Broken Link")]
    BrokenLink,
    #[serde(rename = "External Link")]
    ExternalLink,
    #[serde(rename = "Missing Image")]
    MissingImage,
    #[serde(rename = "Missing Background Image")]
    MissingBackgroundImage,
    #[serde(rename = "HTML Validation")]
    HtmlValidation,
    #[serde(rename = "Responsive Design")]
    ResponsiveDesign,
    #[serde(rename = "Performance")]
    Performance,
    #[serde(rename = "External Links")]
    ExternalLinks,
    #[serde(rename = "UX")]
    Ux,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::BrokenLink => "Broken Link",
            Category::ExternalLink => "External Link",
            Category::MissingImage => "Missing Image",
            Category::MissingBackgroundImage => "Missing Background Image",
            Category::HtmlValidation => "HTML Validation",
            Category::ResponsiveDesign => "Responsive Design",
            Category::Performance => "Performance",
            Category::ExternalLinks => "External Links",
            Category::Ux => "UX",
        }
    }
}

#[derive(Serialize, Clone, PartialEq, Debug)]
/// A single detected problem. Recomputed every run; `fixed` is the only
/// field mutated after creation (by the fix stage).
///
/// Invariant: `autofix == true` implies `file.is_some()`.
pub struct Issue {
    pub severity: Severity,
    pub category: Category,
    pub message: String,
    pub file: Option<PathBuf>,
    pub autofix: bool,
    pub fixed: bool,
}

impl Issue {
    /// An issue not tied to any particular file (suggestion roll-ups).
    pub fn global(severity: Severity, category: Category, message: String) -> Self {
        Issue {
            severity,
            category,
            message,
            file: None,
            autofix: false,
            fixed: false,
        }
    }

    pub fn in_file(
        severity: Severity,
        category: Category,
        message: String,
        file: &std::path::Path,
        autofix: bool,
    ) -> Self {
        Issue {
            severity,
            category,
            message,
            file: Some(file.to_path_buf()),
            autofix,
            fixed: false,
        }
    }
}

#[derive(Serialize, Clone, Copy, Default, Debug)]
/// Aggregated counters computed at the end of a run.
pub struct Metrics {
    pub total_issues: usize,
    pub auto_fixed: usize,
    pub requires_attention: usize,
}

#[derive(Serialize)]
/// One full agent run: everything found, fixed, and suggested, plus the
/// final counters. Never persisted structurally; rendered into the
/// dashboard and the console/JSON output.
pub struct Report {
    pub timestamp: String,
    pub issues: Vec<Issue>,
    pub fixes_applied: Vec<Issue>,
    pub suggestions: Vec<Issue>,
    pub metrics: Metrics,
}

impl Report {
    pub fn new(timestamp: String) -> Self {
        Report {
            timestamp,
            issues: Vec::new(),
            fixes_applied: Vec::new(),
            suggestions: Vec::new(),
            metrics: Metrics::default(),
        }
    }

    /// Recompute counters from the collected issue lists.
    ///
    /// `requires_attention` counts issues that are either not mechanically
    /// fixable or were not fixed in this run.
    pub fn finalize_metrics(&mut self) {
        self.metrics.total_issues = self.issues.len();
        self.metrics.auto_fixed = self.fixes_applied.len();
        self.metrics.requires_attention = self
            .issues
            .iter()
            .filter(|i| !i.autofix || !i.fixed)
            .count();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_counts_unfixed_and_unfixable() {
        let mut report = Report::new("t".into());
        let mut fixed = Issue::in_file(
            Severity::Error,
            Category::BrokenLink,
            "broken".into(),
            std::path::Path::new("a.html"),
            true,
        );
        fixed.fixed = true;
        let unfixed = Issue::in_file(
            Severity::Error,
            Category::MissingImage,
            "missing".into(),
            std::path::Path::new("a.html"),
            true,
        );
        let warning = Issue::in_file(
            Severity::Warning,
            Category::HtmlValidation,
            "no doctype".into(),
            std::path::Path::new("a.html"),
            false,
        );
        report.fixes_applied.push(fixed.clone());
        report.issues = vec![fixed, unfixed, warning];
        report.finalize_metrics();
        assert_eq!(report.metrics.total_issues, 3);
        assert_eq!(report.metrics.auto_fixed, 1);
        assert_eq!(report.metrics.requires_attention, 2);
    }

    #[test]
    fn test_category_serializes_to_label() {
        let v = serde_json::to_value(Category::MissingBackgroundImage).unwrap();
        assert_eq!(v, "Missing Background Image");
        let sev = serde_json::to_value(Severity::Warning).unwrap();
        assert_eq!(sev, "warning");
    }
}

//! Report rendering for the check command.
//!
//! Supports `human` (default) and `json` outputs. The JSON form carries
//! the full report plus the summary counters; `compose_report_json` is
//! pure so the shape can be asserted in tests.

use crate::models::{Report, Severity};
use crate::utils::display_path;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::path::Path;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print the report in the requested format.
pub fn print_report(report: &Report, output: &str, root: &Path) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_report_json(report)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            for issue in &report.issues {
                let sev = match issue.severity {
                    Severity::Error => {
                        if color {
                            "⟦error⟧".red().bold().to_string()
                        } else {
                            "⟦error⟧".to_string()
                        }
                    }
                    Severity::Warning => {
                        if color {
                            "⟦warn⟧".yellow().bold().to_string()
                        } else {
                            "⟦warn⟧".to_string()
                        }
                    }
                    Severity::Info => {
                        if color {
                            "⟦info⟧".blue().bold().to_string()
                        } else {
                            "⟦info⟧".to_string()
                        }
                    }
                };
                let icon = match issue.severity {
                    Severity::Error => {
                        if color {
                            "✖".red().to_string()
                        } else {
                            "✖".to_string()
                        }
                    }
                    Severity::Warning => {
                        if color {
                            "▲".yellow().to_string()
                        } else {
                            "▲".to_string()
                        }
                    }
                    Severity::Info => {
                        if color {
                            "◆".blue().to_string()
                        } else {
                            "◆".to_string()
                        }
                    }
                };
                let file = issue
                    .file
                    .as_ref()
                    .map(|f| display_path(f, root))
                    .unwrap_or_default();
                let shown_file = if color {
                    file.bold().to_string()
                } else {
                    file
                };
                let fixed = if issue.fixed { " (fixed)" } else { "" };
                println!(
                    "{} {} {} ❲{}❳ — {}{}",
                    icon,
                    sev,
                    shown_file,
                    issue.category.label(),
                    issue.message,
                    fixed
                );
            }
            for s in &report.suggestions {
                let prefix = if color {
                    "suggestion:".green().bold().to_string()
                } else {
                    "suggestion:".to_string()
                };
                println!("{} {} — {}", prefix, s.category.label(), s.message);
            }
            let summary = format!(
                "— Summary — issues={} auto-fixed={} requires-attention={} suggestions={}",
                report.metrics.total_issues,
                report.metrics.auto_fixed,
                report.metrics.requires_attention,
                report.suggestions.len()
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Compose the report JSON object (pure) for testing/snapshot purposes.
pub fn compose_report_json(report: &Report) -> JsonVal {
    json!({
        "timestamp": report.timestamp,
        "issues": report.issues,
        "fixes_applied": report.fixes_applied,
        "suggestions": report.suggestions,
        "summary": report.metrics,
    })
}

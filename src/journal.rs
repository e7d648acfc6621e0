//! Append-only maintenance log.
//!
//! Every agent action lands here as a timestamped markdown entry. The file
//! is created with a fixed header when absent and is never truncated or
//! rewritten; prior entries stay untouched.

use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

const LOG_HEADER: &str = "# Site Maintenance Log\n\n\
This file tracks all automated maintenance actions performed by the site agent.\n\n\
---\n\n";

pub struct MaintenanceLog {
    log_file: PathBuf,
    /// Echo entries to stderr as they are written.
    echo: bool,
}

impl MaintenanceLog {
    pub fn new(log_file: &Path, echo: bool) -> Self {
        let log = MaintenanceLog {
            log_file: log_file.to_path_buf(),
            echo,
        };
        log.initialize();
        log
    }

    fn initialize(&self) {
        if !self.log_file.exists() {
            if let Some(parent) = self.log_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = fs::write(&self.log_file, LOG_HEADER);
        }
    }

    /// Append one entry under the given category (e.g. AGENT, AUTO-FIX).
    pub fn log(&self, message: &str, category: &str) {
        let timestamp = Local::now().to_rfc3339();
        let entry = format!("## {} - {}\n\n{}\n\n---\n\n", timestamp, category, message);
        let appended = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.log_file)
            .and_then(|mut f| f.write_all(entry.as_bytes()));
        if appended.is_err() && self.echo {
            eprintln!(
                "{} could not write maintenance log at {}",
                crate::utils::error_prefix(),
                self.log_file.to_string_lossy()
            );
        }
        if self.echo {
            eprintln!("[{}] {}", category, message.lines().next().unwrap_or(""));
        }
    }

    /// Record an applied auto-fix with its file, issue, and remedy.
    pub fn log_fix(&self, file: &str, issue: &str, fix: &str) {
        let message = format!(
            "**Auto-fix applied**\n- File: `{}`\n- Issue: {}\n- Fix: {}",
            file, issue, fix
        );
        self.log(&message, "AUTO-FIX");
    }

    /// Record a suggestion surfaced by the report stage.
    pub fn log_suggestion(&self, category: &str, suggestion: &str, details: &str) {
        let message = format!(
            "**Suggestion**\n- Category: {}\n- Suggestion: {}\n- Details: {}",
            category, suggestion, details
        );
        self.log(&message, "SUGGESTION");
    }
}

//! External formatter invocation.
//!
//! The formatter is an opaque collaborator: a shell command receiving one
//! file path, returning only success or failure. Failures are journaled
//! and never abort the run.

use crate::journal::MaintenanceLog;
use crate::utils::display_path;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Run the configured formatter over each file. `command` comes from the
/// `[format]` config section (e.g. `npx prettier --write`); when absent
/// the stage is skipped with a single journal note.
pub fn format_files(
    files: &[PathBuf],
    command: Option<&str>,
    root: &Path,
    journal: &MaintenanceLog,
) {
    let Some(command) = command else {
        journal.log("No formatter configured; skipping format stage", "FORMAT");
        return;
    };
    for file in files {
        let shown = display_path(file, root);
        let status = Command::new("sh")
            .arg("-lc")
            .arg(format!("{} \"{}\"", command, file.to_string_lossy()))
            .current_dir(root)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        match status {
            Ok(s) if s.success() => journal.log(&format!("Formatted: {}", shown), "FORMAT"),
            _ => journal.log(&format!("Could not format: {}", shown), "FORMAT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_no_command_skips_with_note() {
        let tmp = tempdir().unwrap();
        let journal = MaintenanceLog::new(&tmp.path().join("log.md"), false);
        format_files(&[tmp.path().join("a.html")], None, tmp.path(), &journal);
        let log = fs::read_to_string(tmp.path().join("log.md")).unwrap();
        assert!(log.contains("No formatter configured"));
    }

    #[test]
    fn test_failing_command_is_nonfatal() {
        let tmp = tempdir().unwrap();
        let journal = MaintenanceLog::new(&tmp.path().join("log.md"), false);
        let file = tmp.path().join("a.html");
        fs::write(&file, "<p>x</p>").unwrap();
        format_files(&[file], Some("false"), tmp.path(), &journal);
        let log = fs::read_to_string(tmp.path().join("log.md")).unwrap();
        assert!(log.contains("Could not format: a.html"));
    }

    #[test]
    fn test_successful_command_logged() {
        let tmp = tempdir().unwrap();
        let journal = MaintenanceLog::new(&tmp.path().join("log.md"), false);
        let file = tmp.path().join("a.html");
        fs::write(&file, "<p>x</p>").unwrap();
        format_files(&[file], Some("true"), tmp.path(), &journal);
        let log = fs::read_to_string(tmp.path().join("log.md")).unwrap();
        assert!(log.contains("Formatted: a.html"));
    }
}

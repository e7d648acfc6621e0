//! Polling watch loop for proactive maintenance.
//!
//! Every poll interval the mtimes of watched files are snapshotted and
//! compared against the previous snapshot. A change starts the debounce
//! window; further changes extend it, so bursts collapse into one run.
//! The loop is synchronous: changes arriving while a run is in flight are
//! dropped, not queued, and the snapshot is refreshed after each run so
//! the agent's own writes never re-trigger it.

use crate::agent::SiteAgent;
use crate::config::Effective;
use crate::scanner;
use crate::utils::info_prefix;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime};

const POLL_INTERVAL: Duration = Duration::from_millis(500);

const WATCH_EXTS: &[&str] = &["html", "css", "js", "jsx", "ts", "tsx", "md"];

type Snapshot = BTreeMap<PathBuf, SystemTime>;

fn take_snapshot(eff: &Effective) -> Snapshot {
    scanner::find_files(&eff.project_root, WATCH_EXTS)
        .into_iter()
        .filter(|p| p != &eff.log_file && p != &eff.readme_file)
        .filter_map(|p| {
            let mtime = std::fs::metadata(&p).and_then(|m| m.modified()).ok()?;
            Some((p, mtime))
        })
        .collect()
}

/// Run the watch loop until the process is terminated.
pub fn run_watch(eff: &Effective) -> ! {
    eprintln!(
        "{} watching {} (debounce {} ms, press Ctrl+C to stop)",
        info_prefix(),
        eff.project_root.to_string_lossy(),
        eff.debounce_ms
    );

    let debounce = Duration::from_millis(eff.debounce_ms);
    let mut snapshot = take_snapshot(eff);
    let mut pending_since: Option<Instant> = None;

    loop {
        std::thread::sleep(POLL_INTERVAL);
        let current = take_snapshot(eff);
        if current != snapshot {
            snapshot = current;
            pending_since = Some(Instant::now());
            continue;
        }
        if let Some(since) = pending_since {
            if since.elapsed() >= debounce {
                pending_since = None;
                eprintln!("{} change detected, running site agent", info_prefix());
                let agent = SiteAgent::new(eff, true);
                let report = agent.run();
                crate::output::print_report(&report, &eff.output, &eff.project_root);
                // Drop anything that changed during the run.
                snapshot = take_snapshot(eff);
                eprintln!("{} watching for changes", info_prefix());
            }
        }
    }
}

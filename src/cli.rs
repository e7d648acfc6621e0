//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "siteward",
    version,
    about = "Siteward — static site maintenance agent",
    long_about = "Siteward — a small, fast agent that scans a static site for broken links, missing images, HTML validation gaps, and oversized assets; applies mechanical fixes; and maintains a log, blog index, and README dashboard.\n\nConfiguration precedence: CLI > siteward.toml > defaults.",
    after_help = "Examples:\n  siteward check\n  siteward check --project-root ./site --output json\n  siteward check --dry-run\n  siteward watch --debounce-ms 2000",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands for checking and watching a site.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current siteward version.")]
    Version,
    /// Run one full maintenance pass and exit
    #[command(
        about = "Run a full site maintenance check",
        long_about = "Discover site files, run all checkers, apply automatic fixes, refresh the blog listing and README dashboard, and print a report.",
        after_help = "Examples:\n  siteward check\n  siteward check --output json\n  siteward check --dry-run --no-format"
    )]
    Check {
        #[arg(long, help = "Project root (default: current dir)")]
        project_root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Report fixes without writing any file")]
        dry_run: bool,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Skip the external formatter stage")]
        no_format: bool,
    },
    /// Watch for file changes and re-run the check
    #[command(
        about = "Start continuous monitoring",
        long_about = "Poll the project tree for changes to site files; change bursts are debounced into a single run, and changes arriving during a run are dropped rather than queued.",
        after_help = "Examples:\n  siteward watch\n  siteward watch --project-root ./site --debounce-ms 5000"
    )]
    Watch {
        #[arg(long, help = "Project root (default: current dir)")]
        project_root: Option<String>,
        #[arg(long, help = "Debounce delay in milliseconds (default: 2000)")]
        debounce_ms: Option<u64>,
    },
}

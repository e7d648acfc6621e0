//! Siteward core library.
//!
//! Programmatic APIs for scanning a static site, detecting simple classes
//! of problems (broken links, missing images, HTML validation gaps,
//! oversized assets), applying mechanical fixes, and maintaining the
//! project's audit log, blog listing, and README dashboard.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `scanner`: Deterministic recursive file discovery.
//! - `checks`: Pure checkers producing issues from file content.
//! - `fix`: Mechanical fixers (links, timestamps) and the external formatter.
//! - `blog`: Blog listing generation from markdown front matter.
//! - `dashboard`: Sentinel-delimited README dashboard block.
//! - `journal`: Append-only maintenance log.
//! - `agent`: Orchestrator running the full pipeline.
//! - `output`: Human/JSON report printers.
//! - `watch`: Polling watch loop with debounce.
//! - `models`: Issue/report/blog data models.
//! - `utils`: Supporting helpers.
pub mod agent;
pub mod blog;
pub mod checks;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod fix;
pub mod journal;
pub mod models;
pub mod output;
pub mod scanner;
pub mod utils;
pub mod watch;

//! Configuration discovery and effective settings resolution.
//!
//! Siteward reads `siteward.toml|yaml|yml` from the project root (or the
//! closest ancestor) and merges it with CLI flags into an `Effective`
//! config. Defaults:
//! - `content_dir`: `content`
//! - `blog_dir`: `content/blog`
//! - `log_file`: `maintenance-log.md`
//! - `readme_file`: `README.md`
//! - `output`: `human`
//! - `watch.debounce_ms`: 2000
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Formatter configuration under `[format]`. The command receives one file
/// path per invocation and is treated as an opaque external tool.
pub struct FormatCfg {
    pub command: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Watch loop configuration under `[watch]`.
pub struct WatchCfg {
    pub debounce_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `siteward.toml|yaml`.
pub struct SitewardConfig {
    pub content_dir: Option<String>,
    pub blog_dir: Option<String>,
    pub log_file: Option<String>,
    pub readme_file: Option<String>,
    pub output: Option<String>,
    #[serde(default)]
    pub format: Option<FormatCfg>,
    #[serde(default)]
    pub watch: Option<WatchCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
/// All paths are absolute (joined onto the detected project root).
pub struct Effective {
    pub project_root: PathBuf,
    pub content_dir: PathBuf,
    pub blog_dir: PathBuf,
    pub log_file: PathBuf,
    pub readme_file: PathBuf,
    pub output: String,
    pub dry_run: bool,
    pub no_format: bool,
    pub format_command: Option<String>,
    pub debounce_ms: u64,
}

/// Walk upward from `start` to detect the project root.
///
/// Stops when a `siteward.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_project_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("siteward.toml").exists()
            || cur.join("siteward.yaml").exists()
            || cur.join("siteward.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `SitewardConfig` from `siteward.toml` or `siteward.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<SitewardConfig> {
    let toml_path = root.join("siteward.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: SitewardConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["siteward.yaml", "siteward.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: SitewardConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_project_root: Option<&str>,
    cli_output: Option<&str>,
    cli_dry_run: bool,
    cli_no_format: bool,
    cli_debounce_ms: Option<u64>,
) -> Effective {
    let start = PathBuf::from(cli_project_root.unwrap_or("."));
    let project_root = detect_project_root(&start);
    let cfg = load_config(&project_root).unwrap_or_default();

    let content_dir = project_root.join(cfg.content_dir.as_deref().unwrap_or("content"));
    let blog_dir = project_root.join(cfg.blog_dir.as_deref().unwrap_or("content/blog"));
    let log_file = project_root.join(cfg.log_file.as_deref().unwrap_or("maintenance-log.md"));
    let readme_file = project_root.join(cfg.readme_file.as_deref().unwrap_or("README.md"));

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let format_command = cfg.format.as_ref().and_then(|f| f.command.clone());
    let debounce_ms = cli_debounce_ms
        .or_else(|| cfg.watch.as_ref().and_then(|w| w.debounce_ms))
        .unwrap_or(2000);

    Effective {
        project_root,
        content_dir,
        blog_dir,
        log_file,
        readme_file,
        output,
        dry_run: cli_dry_run,
        no_format: cli_no_format,
        format_command,
        debounce_ms,
    }
}

//! Siteward CLI binary entry point.
//! Delegates to the agent for checks and to the watch loop for monitoring.

mod agent;
mod blog;
mod checks;
mod cli;
mod config;
mod dashboard;
mod fix;
mod journal;
mod models;
mod output;
mod scanner;
mod utils;
mod watch;

use agent::SiteAgent;
use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Check {
            project_root,
            output,
            dry_run,
            no_format,
        } => {
            let eff = config::resolve_effective(
                project_root.as_deref(),
                output.as_deref(),
                dry_run,
                no_format,
                None,
            );
            if !eff.project_root.is_dir() {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    format!(
                        "Project root is not a directory: {}",
                        eff.project_root.to_string_lossy()
                    )
                );
                std::process::exit(2);
            }
            // Friendly note if no siteward config was found
            if config::load_config(&eff.project_root).is_none() {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "No siteward.toml found; using defaults."
                );
            }
            let echo = eff.output != "json";
            let agent = SiteAgent::new(&eff, echo);
            let report = agent.run();
            output::print_report(&report, &eff.output, &eff.project_root);
        }
        Commands::Watch {
            project_root,
            debounce_ms,
        } => {
            let eff = config::resolve_effective(project_root.as_deref(), None, false, false, debounce_ms);
            if !eff.project_root.is_dir() {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    format!(
                        "Project root is not a directory: {}",
                        eff.project_root.to_string_lossy()
                    )
                );
                std::process::exit(2);
            }
            watch::run_watch(&eff);
        }
    }
}

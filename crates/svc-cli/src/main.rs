//! Service manifest CLI
//!
//! Rewrites application manifests of a service project for the local debug
//! server or for deployment, and resolves provider manifest URLs.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;
use svc_config::Project;
use svc_fs::NormalizedPath;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let project = match &cli.root {
        Some(root) => Project::open(NormalizedPath::new(root))?,
        None => Project::discover(std::env::current_dir()?)?,
    };

    execute_command(cli.command, project)
}

fn execute_command(cmd: Commands, project: Project) -> Result<()> {
    match cmd {
        Commands::Manifest {
            config_path,
            context,
            provider_version,
            runtime_version,
            out,
        } => commands::run_manifest(
            project,
            &config_path,
            context.into(),
            &provider_version,
            runtime_version.as_deref(),
            out.as_deref(),
        ),
        Commands::ProviderUrl {
            version,
            manifest_url,
        } => commands::run_provider_url(&project, &version, manifest_url.as_deref()),
        Commands::Config => commands::run_config(&project),
    }
}

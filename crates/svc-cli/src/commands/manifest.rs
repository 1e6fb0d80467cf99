//! Manifest command: load, rewrite and print or write a manifest

use std::path::Path;

use colored::Colorize;
use svc_config::Project;
use svc_fs::{NormalizedPath, write_json_file};
use svc_manifest::{ManifestLoader, RewriteContext};

use crate::error::Result;

/// Run the manifest command
pub fn run_manifest(
    project: Project,
    config_path: &str,
    context: RewriteContext,
    provider_version: &str,
    runtime_version: Option<&str>,
    out: Option<&Path>,
) -> Result<()> {
    let loader = ManifestLoader::new(project);
    let manifest = loader.load_manifest(config_path, context, provider_version, runtime_version)?;

    match out {
        Some(out) => {
            let path = NormalizedPath::new(out);
            write_json_file(&path, &manifest)?;
            println!("{} {} ({})", "Wrote".green().bold(), path, context);
        }
        None => println!("{}", manifest.to_json_pretty()?),
    }

    Ok(())
}

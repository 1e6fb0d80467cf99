use svc_config::Project;
use svc_manifest::ProviderUrlResolver;

use crate::error::Result;

/// Run the provider-url command
pub fn run_provider_url(project: &Project, version: &str, manifest_url: Option<&str>) -> Result<()> {
    let url = ProviderUrlResolver::new(project).resolve(version, manifest_url)?;
    println!("{url}");
    Ok(())
}

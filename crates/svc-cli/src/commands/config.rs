use serde_json::json;
use svc_config::Project;
use svc_fs::ResourcePath;

use crate::error::Result;

/// Run the config command
pub fn run_config(project: &Project) -> Result<()> {
    let output = json!({
        "root": project.root().as_str(),
        "local_overrides": project.has(ResourcePath::LocalConfig),
        "config": project.config(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

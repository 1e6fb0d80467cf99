//! Configuration resolution with layered overrides
//!
//! The `ConfigResolver` loads configuration from the project root:
//! 1. Project config (`service.toml`), required
//! 2. Local overrides (`service.local.toml`), optional and git-ignored
//!
//! Later layers override earlier ones field by field.

use svc_fs::{ConfigStore, NormalizedPath, ResourcePath};

use crate::config::{ConfigLayer, ProjectConfig};
use crate::error::{Error, Result};

/// Resolves the project configuration for a root directory.
pub struct ConfigResolver {
    root: NormalizedPath,
    store: ConfigStore,
}

impl ConfigResolver {
    pub fn new(root: NormalizedPath) -> Self {
        Self {
            root,
            store: ConfigStore::new(),
        }
    }

    /// Resolve the configuration by merging all layers.
    ///
    /// A missing project config is an error; a missing local override file
    /// is silently skipped. Invalid syntax in either layer is an error.
    pub fn resolve(&self) -> Result<ProjectConfig> {
        let config_path = self.root.join(ResourcePath::ProjectConfig.as_str());
        if !config_path.is_file() {
            return Err(Error::ConfigNotFound {
                path: config_path.to_native(),
            });
        }

        tracing::debug!(%config_path, "Loading project config (layer 1)");
        let mut layer: ConfigLayer = self.store.load(&config_path)?;

        let local_path = self.root.join(ResourcePath::LocalConfig.as_str());
        if self.has_local_overrides() {
            tracing::debug!(%local_path, "Loading local config (layer 2)");
            let local: ConfigLayer = self.store.load(&local_path)?;
            layer.merge(&local);
        } else {
            tracing::debug!(%local_path, "No local config found (layer 2), skipping");
        }

        ProjectConfig::from_layer(layer, &config_path.to_native())
    }

    /// Check if local overrides exist
    pub fn has_local_overrides(&self) -> bool {
        self.root.join(ResourcePath::LocalConfig.as_str()).is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn resolve_fails_when_no_config_exists() {
        let temp_dir = TempDir::new().unwrap();
        let resolver = ConfigResolver::new(NormalizedPath::new(temp_dir.path()));

        assert!(matches!(resolver.resolve(), Err(Error::ConfigNotFound { .. })));
    }

    #[test]
    fn resolve_merges_local_overrides_on_top_of_project_config() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("service.toml"),
            r#"
name = "layouts"
port = 8081
cdn_location = "https://cdn.example.com/layouts"
"#,
        )
        .unwrap();
        std::fs::write(temp_dir.path().join("service.local.toml"), "port = 9090\n").unwrap();

        let resolver = ConfigResolver::new(NormalizedPath::new(temp_dir.path()));
        assert!(resolver.has_local_overrides());

        let config = resolver.resolve().unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.name, "layouts");
        assert_eq!(config.cdn_location, "https://cdn.example.com/layouts");
    }
}

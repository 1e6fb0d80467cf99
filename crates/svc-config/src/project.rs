//! A discovered project: its root directory and resolved configuration.

use std::path::Path;

use svc_fs::{NormalizedPath, ResourcePath, find_root_directory};

use crate::config::ProjectConfig;
use crate::error::Result;
use crate::resolver::ConfigResolver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    root: NormalizedPath,
    config: ProjectConfig,
}

impl Project {
    pub fn new(root: NormalizedPath, config: ProjectConfig) -> Self {
        Self { root, config }
    }

    /// Find the project containing `start` and resolve its configuration.
    pub fn discover(start: impl AsRef<Path>) -> Result<Self> {
        let root = find_root_directory(start)?;
        Self::open(root)
    }

    /// Resolve the configuration of the project rooted exactly at `root`.
    pub fn open(root: NormalizedPath) -> Result<Self> {
        let config = ConfigResolver::new(root.clone()).resolve()?;
        tracing::debug!(%root, name = %config.name, port = config.port, "Opened project");
        Ok(Self { root, config })
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// Path of a file under the resources root (`<root>/res/<relative>`).
    pub fn resource(&self, relative: &str) -> NormalizedPath {
        self.root
            .join(ResourcePath::ResourcesRoot.as_str())
            .join(relative)
    }

    /// Whether one of the well-known project files exists.
    pub fn has(&self, path: ResourcePath) -> bool {
        self.root.join(path.as_str()).is_file()
    }
}

//! Well-known paths inside a service project.

use std::path::Path;

/// Standard project files and resources, relative to the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourcePath {
    /// The `res` directory holding manifests and static resources
    ResourcesRoot,
    /// Demo provider manifest served in place of the real provider
    DemoProvider,
    /// Optional provider manifest used by the `testing` channel
    TestingProvider,
    /// The project configuration file
    ProjectConfig,
    /// Developer overrides for the project configuration (not committed)
    LocalConfig,
}

impl ResourcePath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ResourcesRoot => "res",
            Self::DemoProvider => "res/demo/provider.json",
            Self::TestingProvider => "res/test/provider.json",
            Self::ProjectConfig => "service.toml",
            Self::LocalConfig => "service.local.toml",
        }
    }
}

impl AsRef<Path> for ResourcePath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ResourcePath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! [`TestProject`] builder for manifest test scenarios.

use std::fs;
use std::path::Path;

use serde_json::{Value, json};
use svc_config::Project;
use svc_fs::{NormalizedPath, ResourcePath};
use tempfile::TempDir;

pub const TEST_NAME: &str = "layouts";
pub const TEST_PORT: u16 = 8081;
pub const TEST_CDN: &str = "https://cdn.example.com/services/layouts";

/// A temporary service project directory.
///
/// # Example
///
/// ```rust,no_run
/// use svc_test_utils::{TestProject, sample_manifest, TEST_CDN};
///
/// let project = TestProject::service();
/// project.write_manifest("provider/app.json", &sample_manifest(TEST_CDN));
/// project.add_demo_provider();
/// let project = project.open();
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl TestProject {
    /// An empty temporary directory with no `service.toml`.
    pub fn empty() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// A project configured as a service named [`TEST_NAME`].
    pub fn service() -> Self {
        let project = Self::empty();
        project.write_config(TEST_NAME, TEST_PORT, TEST_CDN, true);
        project
    }

    /// A project that is an application, not a service.
    pub fn application() -> Self {
        let project = Self::empty();
        project.write_config(TEST_NAME, TEST_PORT, TEST_CDN, false);
        project
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `service.toml`.
    pub fn write_config(&self, name: &str, port: u16, cdn_location: &str, is_service: bool) {
        let config = format!(
            "name = \"{name}\"\nport = {port}\ncdn_location = \"{cdn_location}\"\nis_service = {is_service}\nversion = \"1.4.0\"\n"
        );
        self.write_file(ResourcePath::ProjectConfig.as_str(), &config);
    }

    /// Write a manifest at `res/<relative>`.
    pub fn write_manifest(&self, relative: &str, manifest: &Value) {
        let path = format!("{}/{relative}", ResourcePath::ResourcesRoot);
        self.write_file(&path, &serde_json::to_string_pretty(manifest).unwrap());
    }

    /// Create `res/demo/provider.json`.
    pub fn add_demo_provider(&self) {
        self.write_file(ResourcePath::DemoProvider.as_str(), "{}");
    }

    /// Create `res/test/provider.json`.
    pub fn add_testing_provider(&self) {
        self.write_file(ResourcePath::TestingProvider.as_str(), "{}");
    }

    /// Write `content` at `relative`, creating parent directories.
    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
    }

    /// Resolve the project at this directory.
    ///
    /// # Panics
    /// Panics if the configuration does not resolve.
    pub fn open(&self) -> Project {
        Project::open(NormalizedPath::new(self.root()))
            .unwrap_or_else(|e| panic!("TestProject::open: {e}"))
    }
}

/// A manifest whose URLs all point into `cdn`, declaring the [`TEST_NAME`]
/// service with a query string on its manifest URL.
pub fn sample_manifest(cdn: &str) -> Value {
    json!({
        "licenseKey": "test-license",
        "startup_app": {
            "uuid": "layouts-demo",
            "name": "Layouts Demo",
            "url": format!("{cdn}/demo/index.html"),
            "autoShow": true,
            "icon": format!("{cdn}/demo/favicon.ico")
        },
        "shortcut": {
            "company": "Example",
            "icon": format!("{cdn}/demo/favicon.ico")
        },
        "runtime": {
            "arguments": "--v=1",
            "version": "stable"
        },
        "services": [
            {
                "name": "notifications",
                "manifestUrl": "https://cdn.example.com/services/notifications/app.json"
            },
            {
                "name": TEST_NAME,
                "manifestUrl": format!("{cdn}/app.json?debug=true"),
                "config": { "features": { "tab": true } }
            }
        ]
    })
}

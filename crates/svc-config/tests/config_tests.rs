//! Integration tests for project configuration loading

use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;
use svc_config::{ConfigResolver, DEFAULT_PORT, Error, Project, ProjectConfig};
use svc_fs::{NormalizedPath, ResourcePath};
use tempfile::TempDir;

fn setup_project(temp: &TempDir, content: &str) -> NormalizedPath {
    fs::write(temp.path().join("service.toml"), content).unwrap();
    NormalizedPath::new(temp.path())
}

#[test]
fn test_load_minimal_config() {
    let temp = TempDir::new().unwrap();
    let root = setup_project(
        &temp,
        r#"
name = "layouts"
cdn_location = "https://cdn.example.com/services/layouts"
"#,
    );

    let config = ConfigResolver::new(root).resolve().unwrap();

    assert_eq!(
        config,
        ProjectConfig {
            name: "layouts".into(),
            port: DEFAULT_PORT,
            cdn_location: "https://cdn.example.com/services/layouts".into(),
            is_service: true,
            version: "0.0.0".into(),
        }
    );
}

#[test]
fn test_load_full_config() {
    let temp = TempDir::new().unwrap();
    let root = setup_project(
        &temp,
        r#"
name = "notifications"
port = 8090
cdn_location = "https://cdn.example.com/services/notifications"
is_service = false
version = "1.2.0"
"#,
    );

    let config = ConfigResolver::new(root).resolve().unwrap();

    assert_eq!(config.port, 8090);
    assert!(!config.is_service);
    assert_eq!(config.version, "1.2.0");
}

#[rstest]
#[case("cdn_location = \"https://cdn\"\n", "name")]
#[case("name = \"layouts\"\n", "cdn_location")]
fn test_missing_required_field(#[case] content: &str, #[case] expected: &str) {
    let temp = TempDir::new().unwrap();
    let root = setup_project(&temp, content);

    match ConfigResolver::new(root).resolve() {
        Err(Error::MissingField { field, .. }) => assert_eq!(field, expected),
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn test_unknown_key_rejected() {
    let temp = TempDir::new().unwrap();
    let root = setup_project(
        &temp,
        "name = \"x\"\ncdn_location = \"https://cdn\"\ncdn = \"typo\"\n",
    );

    assert!(matches!(
        ConfigResolver::new(root).resolve(),
        Err(Error::Fs(svc_fs::Error::ConfigParse { .. }))
    ));
}

#[test]
fn test_project_discover_from_nested_directory() {
    let temp = TempDir::new().unwrap();
    setup_project(&temp, "name = \"layouts\"\ncdn_location = \"https://cdn\"\n");
    let nested = temp.path().join("res/provider");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("app.json"), "{}").unwrap();

    let project = Project::discover(&nested).unwrap();

    assert_eq!(project.config().name, "layouts");
    assert!(project.has(ResourcePath::ProjectConfig));
    assert!(!project.has(ResourcePath::DemoProvider));
    assert!(project.resource("provider/app.json").is_file());
}

#[test]
fn test_project_resource_path() {
    let temp = TempDir::new().unwrap();
    let root = setup_project(&temp, "name = \"layouts\"\ncdn_location = \"https://cdn\"\n");

    let project = Project::open(root.clone()).unwrap();

    assert_eq!(
        project.resource("demo/app.json"),
        root.join("res").join("demo/app.json")
    );
}

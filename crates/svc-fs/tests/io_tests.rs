use pretty_assertions::assert_eq;
use rstest::rstest;
use serde::Deserialize;
use std::fs;
use svc_fs::{ConfigStore, Error, NormalizedPath, io};
use tempfile::TempDir;

#[derive(Debug, Deserialize, PartialEq)]
struct Settings {
    name: String,
    port: u16,
}

#[test]
fn test_write_atomic_creates_file_and_parents() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("dist/provider/app.json"));

    io::write_atomic(&path, b"{}").unwrap();

    assert_eq!(fs::read_to_string(path.to_native()).unwrap(), "{}");
}

#[test]
fn test_write_atomic_overwrites_existing() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("app.json");
    fs::write(&file_path, "original").unwrap();

    io::write_atomic(&NormalizedPath::new(&file_path), b"updated").unwrap();

    assert_eq!(fs::read_to_string(&file_path).unwrap(), "updated");
    let leftovers: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .flatten()
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "temp file left behind");
}

#[test]
fn test_read_text_missing_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("missing.txt"));

    assert!(matches!(io::read_text(&path), Err(Error::Io { .. })));
}

#[test]
fn test_config_store_loads_toml() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("service.toml");
    fs::write(&file, "name = \"layouts\"\nport = 8081\n").unwrap();

    let settings: Settings = ConfigStore::new().load(&NormalizedPath::new(&file)).unwrap();

    assert_eq!(
        settings,
        Settings {
            name: "layouts".into(),
            port: 8081
        }
    );
}

#[test]
fn test_config_store_reports_parse_errors() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("service.toml");
    fs::write(&file, "name = ").unwrap();

    let result: svc_fs::Result<Settings> = ConfigStore::new().load(&NormalizedPath::new(&file));

    match result {
        Err(Error::ConfigParse { format, .. }) => assert_eq!(format, "TOML"),
        other => panic!("expected ConfigParse, got {other:?}"),
    }
}

#[rstest]
#[case("service.ini", "name=x", "ini")]
#[case("service.json", r#"{"name": "a", "port": 1}"#, "json")]
#[case("service.yml", "name: b\nport: 2\n", "yml")]
fn test_config_store_rejects_non_toml(#[case] name: &str, #[case] content: &str, #[case] ext: &str) {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join(name);
    fs::write(&file, content).unwrap();

    let result: svc_fs::Result<Settings> = ConfigStore::new().load(&NormalizedPath::new(&file));

    assert!(matches!(result, Err(Error::UnsupportedFormat { extension }) if extension == ext));
}

//! JSON document reading and writing.
//!
//! Manifest reads are tolerant: a missing or malformed file yields `None`
//! and the caller decides what that means. Writes go through
//! [`io::write_atomic`](crate::io::write_atomic).

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{Error, NormalizedPath, Result, io};

/// Read and parse a JSON file.
///
/// Returns `None` when the file cannot be read or does not deserialize
/// into `T`. The reason is logged at debug level.
pub fn read_json_file<T: DeserializeOwned>(path: &NormalizedPath) -> Option<T> {
    let content = match io::read_text(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!(%path, error = %e, "JSON file not readable");
            return None;
        }
    };

    match serde_json::from_str(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(%path, error = %e, "JSON file did not parse");
            None
        }
    }
}

/// Serialize `value` as pretty-printed JSON and write it atomically.
///
/// The output always ends with a newline.
pub fn write_json_file<T: Serialize>(path: &NormalizedPath, value: &T) -> Result<()> {
    let mut content = serde_json::to_string_pretty(value).map_err(|e| Error::Serialize {
        path: path.to_native(),
        format: "JSON".into(),
        message: e.to_string(),
    })?;
    content.push('\n');
    io::write_text(path, &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    struct Doc {
        name: String,
    }

    #[test]
    fn missing_file_is_none() {
        let temp = TempDir::new().unwrap();
        let path = NormalizedPath::new(temp.path().join("absent.json"));
        assert_eq!(read_json_file::<Doc>(&path), None);
    }

    #[test]
    fn wrong_shape_is_none() {
        let temp = TempDir::new().unwrap();
        let path = NormalizedPath::new(temp.path().join("doc.json"));
        std::fs::write(path.to_native(), r#"{"title": "x"}"#).unwrap();
        assert_eq!(read_json_file::<Doc>(&path), None);
    }

    #[test]
    fn written_file_ends_with_newline() {
        let temp = TempDir::new().unwrap();
        let path = NormalizedPath::new(temp.path().join("out/doc.json"));
        let doc = Doc {
            name: "svc".into(),
        };

        write_json_file(&path, &doc).unwrap();

        let text = std::fs::read_to_string(path.to_native()).unwrap();
        assert!(text.ends_with("}\n"));
        assert_eq!(read_json_file::<Doc>(&path), Some(doc));
    }
}

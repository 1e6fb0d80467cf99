//! Configuration file loading

use serde::de::DeserializeOwned;

use crate::{Error, NormalizedPath, Result, io};

/// Configuration store for project config files.
///
/// Only TOML files are accepted; the format is checked from the file
/// extension.
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file.
    ///
    /// Files without a `.toml` extension are rejected before being read.
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let extension = path.extension().unwrap_or("");
        if !extension.eq_ignore_ascii_case("toml") {
            return Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            });
        }

        let content = io::read_text(path)?;
        toml::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.to_native(),
            format: "TOML".into(),
            message: e.to_string(),
        })
    }
}

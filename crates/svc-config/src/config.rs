//! Configuration types for `service.toml`
//!
//! ```toml
//! name = "layouts"
//! port = 8081
//! cdn_location = "https://cdn.example.com/services/layouts"
//! is_service = true
//! version = "1.4.0"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Port used by the local debug server when none is configured.
pub const DEFAULT_PORT: u16 = 8081;

const DEFAULT_VERSION: &str = "0.0.0";

/// One layer of project configuration, as read from a single file.
///
/// Every field is optional so that a local override file can set only the
/// values it changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    /// Name the running service is declared under in manifests
    #[serde(default)]
    pub name: Option<String>,
    /// Port of the local debug server
    #[serde(default)]
    pub port: Option<u16>,
    /// Base URL deployed manifests and assets are served from
    #[serde(default)]
    pub cdn_location: Option<String>,
    /// Whether this project is itself a service (manifests live in per-component folders)
    #[serde(default)]
    pub is_service: Option<bool>,
    /// Version of the service being built
    #[serde(default)]
    pub version: Option<String>,
}

impl ConfigLayer {
    /// Overlay `other` on top of this layer. Values set in `other` win.
    pub fn merge(&mut self, other: &ConfigLayer) {
        if other.name.is_some() {
            self.name.clone_from(&other.name);
        }
        if other.port.is_some() {
            self.port = other.port;
        }
        if other.cdn_location.is_some() {
            self.cdn_location.clone_from(&other.cdn_location);
        }
        if other.is_service.is_some() {
            self.is_service = other.is_service;
        }
        if other.version.is_some() {
            self.version.clone_from(&other.version);
        }
    }
}

/// Fully resolved project configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectConfig {
    pub name: String,
    pub port: u16,
    /// CDN base URL, without a trailing slash
    pub cdn_location: String,
    pub is_service: bool,
    pub version: String,
}

impl ProjectConfig {
    /// Build the final configuration from merged layers.
    ///
    /// `source` is the primary config file, used in error messages.
    pub fn from_layer(layer: ConfigLayer, source: &Path) -> Result<Self> {
        let name = layer.name.ok_or_else(|| Error::MissingField {
            path: source.to_path_buf(),
            field: "name",
        })?;
        let cdn_location = layer.cdn_location.ok_or_else(|| Error::MissingField {
            path: source.to_path_buf(),
            field: "cdn_location",
        })?;

        let cdn_location = cdn_location.trim_end_matches('/').to_string();
        if cdn_location.is_empty() {
            return Err(Error::InvalidConfig {
                path: source.to_path_buf(),
                message: "cdn_location must not be empty".to_string(),
            });
        }
        if name.is_empty() {
            return Err(Error::InvalidConfig {
                path: source.to_path_buf(),
                message: "name must not be empty".to_string(),
            });
        }

        let port = layer.port.unwrap_or(DEFAULT_PORT);
        if port == 0 {
            return Err(Error::InvalidConfig {
                path: source.to_path_buf(),
                message: "port must be non-zero".to_string(),
            });
        }

        Ok(Self {
            name,
            port,
            cdn_location,
            is_service: layer.is_service.unwrap_or(true),
            version: layer.version.unwrap_or_else(|| DEFAULT_VERSION.to_string()),
        })
    }

    /// Base URL of the local debug server, e.g. `http://localhost:8081`.
    pub fn localhost_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(name: &str, cdn: &str) -> ConfigLayer {
        ConfigLayer {
            name: Some(name.into()),
            cdn_location: Some(cdn.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_applied() {
        let config =
            ProjectConfig::from_layer(layer("layouts", "https://cdn/layouts"), Path::new("service.toml"))
                .unwrap();

        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.is_service);
        assert_eq!(config.version, "0.0.0");
        assert_eq!(config.localhost_url(), "http://localhost:8081");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config =
            ProjectConfig::from_layer(layer("layouts", "https://cdn/layouts/"), Path::new("service.toml"))
                .unwrap();
        assert_eq!(config.cdn_location, "https://cdn/layouts");
    }

    #[test]
    fn test_missing_name() {
        let mut l = layer("x", "https://cdn");
        l.name = None;
        let err = ProjectConfig::from_layer(l, Path::new("service.toml")).unwrap_err();
        assert!(matches!(err, Error::MissingField { field: "name", .. }));
    }

    #[test]
    fn test_zero_port_rejected() {
        let mut l = layer("x", "https://cdn");
        l.port = Some(0);
        let err = ProjectConfig::from_layer(l, Path::new("service.toml")).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));
    }

    #[test]
    fn test_merge_overrides_only_set_fields() {
        let mut base = layer("layouts", "https://cdn");
        base.port = Some(9000);
        let local = ConfigLayer {
            port: Some(9001),
            is_service: Some(false),
            ..Default::default()
        };

        base.merge(&local);

        assert_eq!(base.name.as_deref(), Some("layouts"));
        assert_eq!(base.port, Some(9001));
        assert_eq!(base.is_service, Some(false));
    }
}

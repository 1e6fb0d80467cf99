//! Application manifest (`app.json`) types.
//!
//! Only the fields the rewriter touches are modelled. Everything else is
//! carried through the `extra` maps so that a rewritten manifest keeps every
//! key of the original.
//!
//! # Example JSON
//!
//! ```json
//! {
//!     "licenseKey": "...",
//!     "startup_app": {
//!         "uuid": "layouts-demo",
//!         "name": "layouts-demo",
//!         "url": "https://cdn.example.com/services/layouts/demo/index.html",
//!         "autoShow": true,
//!         "icon": "https://cdn.example.com/services/layouts/favicon.ico"
//!     },
//!     "runtime": { "version": "stable" },
//!     "services": [
//!         { "name": "layouts", "manifestUrl": "https://cdn.example.com/services/layouts/app.json?debug=1" }
//!     ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// A key that can be absent, explicitly `null`, or set. Absent keys stay
/// absent and `null` stays `null` when the manifest is written back.
pub type Nullable<T> = Option<Option<T>>;

mod nullable {
    use serde::{Deserialize, Deserializer};

    /// A present key is always `Some`, so `null` becomes `Some(None)`.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

/// A parsed application manifest.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ManifestFile {
    /// The application launched by the manifest. Required.
    pub startup_app: StartupApp,
    #[serde(default, deserialize_with = "nullable::deserialize", skip_serializing_if = "Option::is_none")]
    pub shortcut: Nullable<Shortcut>,
    #[serde(default, deserialize_with = "nullable::deserialize", skip_serializing_if = "Option::is_none")]
    pub runtime: Nullable<Runtime>,
    #[serde(default, deserialize_with = "nullable::deserialize", skip_serializing_if = "Option::is_none")]
    pub services: Nullable<Vec<ServiceDeclaration>>,
    /// `licenseKey` and any other top-level keys.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct StartupApp {
    /// Location of the entry HTML page.
    #[serde(default, deserialize_with = "nullable::deserialize", skip_serializing_if = "Option::is_none")]
    pub url: Nullable<String>,
    #[serde(default, deserialize_with = "nullable::deserialize", skip_serializing_if = "Option::is_none")]
    pub icon: Nullable<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StartupApp {
    pub fn url(&self) -> Option<&str> {
        self.url.as_ref()?.as_deref()
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_ref()?.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Shortcut {
    #[serde(default, deserialize_with = "nullable::deserialize", skip_serializing_if = "Option::is_none")]
    pub icon: Nullable<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Shortcut {
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_ref()?.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Runtime {
    #[serde(default, deserialize_with = "nullable::deserialize", skip_serializing_if = "Option::is_none")]
    pub version: Nullable<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A service the application depends on.
///
/// Entries without a `name` are kept but never match a lookup.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ServiceDeclaration {
    /// Service type identifier, matched against the project's own name.
    #[serde(default, deserialize_with = "nullable::deserialize", skip_serializing_if = "Option::is_none")]
    pub name: Nullable<String>,
    #[serde(rename = "manifestUrl", default, deserialize_with = "nullable::deserialize", skip_serializing_if = "Option::is_none")]
    pub manifest_url: Nullable<String>,
    /// `config` and any other service keys, passed through unmodified.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ServiceDeclaration {
    pub fn name(&self) -> Option<&str> {
        self.name.as_ref()?.as_deref()
    }

    pub fn manifest_url(&self) -> Option<&str> {
        self.manifest_url.as_ref()?.as_deref()
    }

    /// Service-specific configuration.
    pub fn config(&self) -> Option<&Value> {
        self.extra.get("config")
    }
}

impl ManifestFile {
    /// The first service declared under `name`, if any.
    pub fn service(&self, name: &str) -> Option<&ServiceDeclaration> {
        self.services
            .as_ref()?
            .as_deref()?
            .iter()
            .find(|s| s.name() == Some(name))
    }

    /// Mutable access to the first service declared under `name`.
    pub fn service_mut(&mut self, name: &str) -> Option<&mut ServiceDeclaration> {
        self.services
            .as_mut()?
            .as_mut()?
            .iter_mut()
            .find(|s| s.name() == Some(name))
    }

    /// Set `runtime.version`, creating the `runtime` section if it is absent
    /// or `null`.
    pub fn set_runtime_version(&mut self, version: &str) {
        let runtime = self.runtime.get_or_insert(None).get_or_insert_with(Runtime::default);
        runtime.version = Some(Some(version.to_string()));
    }

    /// The runtime version, if declared.
    pub fn runtime_version(&self) -> Option<&str> {
        self.runtime.as_ref()?.as_ref()?.version.as_ref()?.as_deref()
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

//! Provider manifest URL resolution.
//!
//! The first URL a resolver produces is kept for the rest of its life: every
//! later call returns it, whatever arguments are passed. One resolver is
//! created per process so that every manifest served or built in that
//! process points at the same provider.

use std::sync::OnceLock;

use svc_config::Project;
use svc_fs::{NormalizedPath, ResourcePath};

use crate::error::Result;
use crate::version::VersionToken;

/// Fallback provider manifest served by the local debug server.
const LOCAL_PROVIDER_PATH: &str = "provider/app.json";

pub struct ProviderUrlResolver {
    root: NormalizedPath,
    localhost: String,
    cdn_location: String,
    cache: OnceLock<String>,
}

impl ProviderUrlResolver {
    pub fn new(project: &Project) -> Self {
        Self {
            root: project.root().clone(),
            localhost: project.config().localhost_url(),
            cdn_location: project.config().cdn_location.clone(),
            cache: OnceLock::new(),
        }
    }

    /// Resolve the provider manifest URL for `version`.
    ///
    /// `manifest_url` is the URL currently declared in the application
    /// manifest. Only its query string is used: it is appended to the
    /// resolved URL, except when `version` is itself an absolute URL.
    pub fn resolve(&self, version: &str, manifest_url: Option<&str>) -> Result<String> {
        if let Some(url) = self.cache.get() {
            tracing::debug!(%url, requested = version, "Using cached provider URL");
            return Ok(url.clone());
        }

        let token = VersionToken::parse(version)?;
        let url = self.url_for(&token, query_suffix(manifest_url));
        tracing::debug!(%url, %token, "Resolved provider URL");

        // A concurrent first caller may have won; its value is kept.
        Ok(self.cache.get_or_init(|| url).clone())
    }

    /// The cached URL, if one has been resolved.
    pub fn cached(&self) -> Option<&str> {
        self.cache.get().map(String::as_str)
    }

    /// Forget the cached URL so the next call resolves afresh.
    pub fn reset(&mut self) {
        self.cache.take();
    }

    fn url_for(&self, token: &VersionToken, query: &str) -> String {
        match token {
            VersionToken::Local => self.local_resource_or_fallback(ResourcePath::DemoProvider, query),
            VersionToken::Stable => format!("{}/app.json{query}", self.cdn_location),
            VersionToken::Staging => format!("{}/app.staging.json{query}", self.cdn_location),
            VersionToken::Testing => {
                self.local_resource_or_fallback(ResourcePath::TestingProvider, query)
            }
            VersionToken::Url(url) => url.clone(),
            VersionToken::Release(version) => {
                format!("{}/{version}/app.json{query}", self.cdn_location)
            }
        }
    }

    /// Serve `resource` from the debug server if it exists in the project,
    /// otherwise the locally built provider.
    fn local_resource_or_fallback(&self, resource: ResourcePath, query: &str) -> String {
        let served = if self.root.join(resource.as_str()).exists() {
            served_path(resource)
        } else {
            tracing::debug!(%resource, "Local provider resource missing, using built provider");
            LOCAL_PROVIDER_PATH
        };
        format!("{}/{served}{query}", self.localhost)
    }
}

/// Path a resource under `res/` is served at by the debug server.
fn served_path(resource: ResourcePath) -> &'static str {
    let path = resource.as_str();
    path.strip_prefix(ResourcePath::ResourcesRoot.as_str())
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(path)
}

/// Query string of `manifest_url`, including the leading `?`.
///
/// A `?` in first position is not treated as a query.
fn query_suffix(manifest_url: Option<&str>) -> &str {
    manifest_url
        .and_then(|url| url.find('?').filter(|&idx| idx > 0).map(|idx| &url[idx..]))
        .unwrap_or("")
}

//! Manifest loading and rewriting.
//!
//! Manifests under `res/` are written against the CDN. When the debug server
//! serves them, CDN URLs are pointed at localhost instead; when a build
//! prepares them for upload they keep the CDN. In both cases template
//! placeholders are expanded, the provider service URL can be redirected to a
//! specific version, and the runtime version can be overridden.

use svc_config::Project;
use svc_fs::{NormalizedPath, read_json_file};

use crate::context::RewriteContext;
use crate::error::{Error, Result};
use crate::manifest::{ManifestFile, Nullable};
use crate::provider::ProviderUrlResolver;
use crate::template::{TemplateContext, expand_url_template};
use crate::version::DEFAULT_PROVIDER_VERSION;

/// Loads manifests from a project and rewrites them for a [`RewriteContext`].
pub struct ManifestLoader {
    project: Project,
    resolver: ProviderUrlResolver,
    templates: TemplateContext,
}

impl ManifestLoader {
    pub fn new(project: Project) -> Self {
        let resolver = ProviderUrlResolver::new(&project);
        let templates = TemplateContext::from(project.config());
        Self {
            project,
            resolver,
            templates,
        }
    }

    /// Read `res/<config_path>` and rewrite it for `context`.
    ///
    /// * `config_path` - path relative to the resources root; must not be a URL
    /// * `context` - decides where CDN URLs point, see [`RewriteContext`]
    /// * `provider_version` - token for the provider service URL, or `"default"`
    ///   to keep the declared URL
    /// * `runtime_version` - replaces `runtime.version` when given
    pub fn load_manifest(
        &self,
        config_path: &str,
        context: RewriteContext,
        provider_version: &str,
        runtime_version: Option<&str>,
    ) -> Result<ManifestFile> {
        let config = self.project.config();
        let invalid = || Error::InvalidManifest {
            path: config_path.to_string(),
        };

        if config_path.contains("://") {
            return Err(invalid());
        }

        let base_url = self.base_url(config_path, context);
        let path = self.project.resource(config_path);
        let mut manifest: ManifestFile = read_json_file(&path).ok_or_else(invalid)?;
        tracing::debug!(%path, %context, %base_url, "Rewriting manifest");

        rewrite_url(&mut manifest.startup_app.url, &config.cdn_location, &base_url, &self.templates);
        rewrite_url(&mut manifest.startup_app.icon, &config.cdn_location, &base_url, &self.templates);
        if let Some(Some(shortcut)) = manifest.shortcut.as_mut() {
            rewrite_url(&mut shortcut.icon, &config.cdn_location, &base_url, &self.templates);
        }

        if provider_version != DEFAULT_PROVIDER_VERSION {
            if let Some(service) = manifest.service_mut(&config.name) {
                let url = self.resolver.resolve(provider_version, service.manifest_url())?;
                tracing::debug!(service = %config.name, %url, "Redirected provider manifest");
                service.manifest_url = Some(Some(url));
            }
        }

        if let Some(version) = runtime_version.filter(|v| !v.is_empty()) {
            manifest.set_runtime_version(version);
        }

        Ok(manifest)
    }

    /// Base URL that CDN references are rewritten to.
    ///
    /// For services, manifests live in one folder per component (`provider`,
    /// `client`, `demo`, ...) which the debug server mounts under the same
    /// name, so the first segment of `config_path` becomes a path prefix.
    /// A leading `/` is ignored, as it is when the manifest is read.
    pub fn base_url(&self, config_path: &str, context: RewriteContext) -> String {
        let config = self.project.config();
        match context {
            RewriteContext::Debug => {
                let normalized = NormalizedPath::new(config_path);
                let component = if config.is_service {
                    let folder = normalized
                        .as_str()
                        .trim_start_matches('/')
                        .split('/')
                        .next()
                        .unwrap_or_default();
                    format!("/{folder}")
                } else {
                    String::new()
                };
                format!("{}{component}", config.localhost_url())
            }
            RewriteContext::Deploy => config.cdn_location.clone(),
        }
    }
}

/// Point the first CDN reference in `field` at `base_url`, then expand
/// placeholders. Absent, `null` and empty fields are left alone.
fn rewrite_url(field: &mut Nullable<String>, cdn_location: &str, base_url: &str, ctx: &TemplateContext) {
    if let Some(url) = field
        .as_mut()
        .and_then(Option::as_mut)
        .filter(|url| !url.is_empty())
    {
        let replaced = url.replacen(cdn_location, base_url, 1);
        *url = expand_url_template(&replaced, ctx);
    }
}

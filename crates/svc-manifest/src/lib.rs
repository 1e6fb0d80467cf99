//! Application manifest rewriting for service projects.
//!
//! [`ManifestLoader`] reads an `app.json` from a project's `res/` tree and
//! points its URLs at either the local debug server or the CDN.
//! [`ProviderUrlResolver`] decides which provider manifest an application
//! loads, from a channel name, release number, absolute URL or `local`.

pub mod context;
pub mod error;
pub mod loader;
pub mod manifest;
pub mod provider;
pub mod template;
pub mod version;

pub use context::RewriteContext;
pub use error::{Error, Result};
pub use loader::ManifestLoader;
pub use manifest::{ManifestFile, Nullable, Runtime, ServiceDeclaration, Shortcut, StartupApp};
pub use provider::ProviderUrlResolver;
pub use template::{TemplateContext, expand_url_template};
pub use version::{DEFAULT_PROVIDER_VERSION, VersionToken};

//! URL template expansion.
//!
//! Manifest URLs may embed build-time placeholders which are filled from the
//! project configuration:
//!
//! | Placeholder        | Resolved to                          |
//! |--------------------|--------------------------------------|
//! | `{{NAME}}`         | The service name                     |
//! | `{{VERSION}}`      | The version of the service being built |
//! | `{{PORT}}`         | Port of the local debug server       |
//! | `{{CDN_LOCATION}}` | CDN base URL                         |

use svc_config::ProjectConfig;

/// Values substituted into URL templates.
#[derive(Debug, Clone)]
pub struct TemplateContext {
    pub name: String,
    pub version: String,
    pub port: String,
    pub cdn_location: String,
}

impl From<&ProjectConfig> for TemplateContext {
    fn from(config: &ProjectConfig) -> Self {
        Self {
            name: config.name.clone(),
            version: config.version.clone(),
            port: config.port.to_string(),
            cdn_location: config.cdn_location.clone(),
        }
    }
}

impl TemplateContext {
    fn lookup(&self, var: &str) -> Option<&str> {
        match var {
            "NAME" => Some(&self.name),
            "VERSION" => Some(&self.version),
            "PORT" => Some(&self.port),
            "CDN_LOCATION" => Some(&self.cdn_location),
            _ => None,
        }
    }
}

/// Expand `{{...}}` placeholders in a URL.
///
/// A single left-to-right scan, so a substituted value is never expanded a
/// second time. Unknown placeholders are kept as written.
pub fn expand_url_template(url: &str, ctx: &TemplateContext) -> String {
    let mut result = String::with_capacity(url.len());
    let mut remaining = url;

    while let Some(start) = remaining.find("{{") {
        result.push_str(&remaining[..start]);

        let Some(end) = remaining[start..].find("}}") else {
            // Unterminated marker
            result.push_str(&remaining[start..]);
            return result;
        };
        let end_abs = start + end + 2;
        let var_name = remaining[start + 2..start + end].trim();

        match ctx.lookup(var_name) {
            Some(value) => result.push_str(value),
            None => {
                tracing::warn!(placeholder = var_name, url, "Unknown URL template placeholder");
                result.push_str(&remaining[start..end_abs]);
            }
        }

        remaining = &remaining[end_abs..];
    }

    result.push_str(remaining);
    result
}

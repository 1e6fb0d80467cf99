//! Provider version tokens.
//!
//! A token selects which provider manifest an application should load. It is
//! one of:
//!
//! - a channel: `stable`, `staging` or `testing`
//! - `local`, the provider built by the local debug server
//! - an absolute URL to an `app.json`
//! - a release number such as `1.2.3`
//!
//! Rules are checked in that order, so `local` always wins and a URL that
//! happens to contain a version number is still treated as a URL.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Error;

/// Token meaning "leave the provider URL declared in the manifest alone".
pub const DEFAULT_PROVIDER_VERSION: &str = "default";

static RELEASE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.[0-9]+\.[0-9]+").expect("release pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionToken {
    Local,
    Stable,
    Staging,
    Testing,
    /// Absolute URL to a provider manifest, used as-is.
    Url(String),
    /// A published release, e.g. `1.2.3` or `2.0.0-alpha.1`.
    Release(String),
}

impl VersionToken {
    pub fn parse(token: &str) -> Result<Self, Error> {
        match token {
            "local" => Ok(Self::Local),
            "stable" => Ok(Self::Stable),
            "staging" => Ok(Self::Staging),
            "testing" => Ok(Self::Testing),
            _ if token.find("://").is_some_and(|idx| idx > 0) => Ok(Self::Url(token.to_string())),
            _ if RELEASE_PATTERN.is_match(token) => Ok(Self::Release(token.to_string())),
            _ => Err(Error::InvalidVersionToken {
                token: token.to_string(),
            }),
        }
    }
}

impl FromStr for VersionToken {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for VersionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Stable => f.write_str("stable"),
            Self::Staging => f.write_str("staging"),
            Self::Testing => f.write_str("testing"),
            Self::Url(url) => f.write_str(url),
            Self::Release(version) => f.write_str(version),
        }
    }
}

use std::fmt;
use std::str::FromStr;

/// Why a manifest is being rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RewriteContext {
    /// Served by the local debug server.
    ///
    /// References to the CDN location are replaced with localhost URLs.
    #[default]
    Debug,

    /// Prepared for upload as part of a build.
    ///
    /// CDN URLs stay in place; only template placeholders are expanded.
    Deploy,
}

/// Error returned when parsing an unknown context name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid rewrite context: {0} (expected `debug` or `deploy`)")]
pub struct ParseContextError(String);

impl FromStr for RewriteContext {
    type Err = ParseContextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" | "dev" => Ok(Self::Debug),
            "deploy" | "build" => Ok(Self::Deploy),
            _ => Err(ParseContextError(s.to_string())),
        }
    }
}

impl fmt::Display for RewriteContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "debug"),
            Self::Deploy => write!(f, "deploy"),
        }
    }
}

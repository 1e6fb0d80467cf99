//! Project root discovery

use std::path::Path;

use crate::{Error, NormalizedPath, ResourcePath, Result};

/// Find the project root for `start`.
///
/// Walks `start` and its ancestors looking for the project configuration
/// file. When none of them has one, `start` itself is the root.
pub fn find_root_directory(start: impl AsRef<Path>) -> Result<NormalizedPath> {
    let start = start.as_ref();
    let canonical = dunce::canonicalize(start).map_err(|e| Error::io(start, e))?;

    for dir in canonical.ancestors() {
        if dir.join(ResourcePath::ProjectConfig).is_file() {
            tracing::debug!(root = %dir.display(), "Found project root");
            return Ok(NormalizedPath::new(dir));
        }
    }

    tracing::debug!(
        start = %canonical.display(),
        "No {} found in ancestors, using start directory",
        ResourcePath::ProjectConfig
    );
    Ok(NormalizedPath::new(canonical))
}

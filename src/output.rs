//! Output file writing.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Write the rendered document, truncating any previous contents.
///
/// Creates the parent directory if missing. Not atomic: a failure mid-write
/// can leave a partial file behind.
pub fn write_readme(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))
}

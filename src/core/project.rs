// Synaptik - core/project.rs
//
// Project file I/O. There is no project format yet: saving writes a fixed
// placeholder and opening only checks that the file is readable text.

use crate::util::constants;
use crate::util::error::ProjectError;
use std::path::{Path, PathBuf};

/// Append the `.syn` extension when the chosen path has none.
///
/// A path that already carries any extension is returned unchanged, matching
/// how native save dialogs treat a default extension.
pub fn with_default_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(constants::PROJECT_EXTENSION)
    }
}

/// Write the placeholder project content to `path`, replacing any existing file.
pub fn save_placeholder(path: &Path) -> Result<(), ProjectError> {
    std::fs::write(path, constants::PROJECT_PLACEHOLDER_CONTENT).map_err(|e| {
        ProjectError::Write {
            path: path.to_path_buf(),
            source: e,
        }
    })?;
    tracing::debug!(
        path = %path.display(),
        bytes = constants::PROJECT_PLACEHOLDER_CONTENT.len(),
        "Project placeholder written"
    );
    Ok(())
}

/// Read a project file as UTF-8 text.
///
/// The content is returned so callers can inspect it, but nothing in the
/// application interprets it yet.
pub fn read_project(path: &Path) -> Result<String, ProjectError> {
    let content = std::fs::read_to_string(path).map_err(|e| ProjectError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "Project file read");
    Ok(content)
}

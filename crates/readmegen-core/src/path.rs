//! Path helpers for destinations
//!
//! Destinations are compared against `git diff --name-only` output, which
//! always uses repository-relative paths with forward slashes. Rooted paths
//! can never show up there, so they are rejected up front.

use crate::error::{ReadmegenError, Result};
use std::path::{Component, Path};

/// Check if path is absolute OR rooted (cross-platform)
///
/// `Path::is_absolute()` is false for `/tmp` on Windows, so the components
/// are inspected as well.
///
/// ```rust
/// use std::path::Path;
/// use readmegen_core::path::has_absolute_or_rooted_component;
///
/// assert!(has_absolute_or_rooted_component(Path::new("/tmp/README.md")));
/// assert!(!has_absolute_or_rooted_component(Path::new("docs/index.md")));
/// ```
pub fn has_absolute_or_rooted_component(path: &Path) -> bool {
    if path.is_absolute() {
        return true;
    }

    path.components()
        .any(|c| matches!(c, Component::RootDir | Component::Prefix(_)))
}

/// Render a workspace-relative path the way git prints it
///
/// # Errors
///
/// Returns `OutputPathInvalid` for rooted paths, paths with `..`, and empty paths.
pub fn to_vcs_path(path: &Path) -> Result<String> {
    let rooted = || {
        ReadmegenError::OutputPathInvalid(format!(
            "path must be relative to the repository root: '{}'",
            path.display()
        ))
    };
    if has_absolute_or_rooted_component(path) {
        return Err(rooted());
    }

    let mut parts = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::CurDir => {}
            Component::ParentDir => {
                return Err(ReadmegenError::OutputPathInvalid(format!(
                    "path cannot contain parent directory (..): '{}'",
                    path.display()
                )))
            }
            Component::RootDir | Component::Prefix(_) => return Err(rooted()),
        }
    }

    if parts.is_empty() {
        return Err(ReadmegenError::OutputPathInvalid(format!(
            "path does not name a file: '{}'",
            path.display()
        )));
    }

    Ok(parts.join("/"))
}

//! Dirty-file guard
//!
//! Refuses to overwrite a generated file that version control reports as
//! modified, unless its current contents already equal what would be
//! written. This catches edits made to README.md or index.md directly
//! instead of to the template.

use crate::error::{ReadmegenError, Result};
use crate::lines::lines_equal;
use crate::path::to_vcs_path;
use crate::workspace::Workspace;
use log::{debug, warn};
use std::io;
use std::path::Path;

/// Source of the "which files have uncommitted changes" listing
pub trait ChangedFiles {
    fn changed_paths(&self) -> Result<ChangedPaths>;
}

/// Raw changed-files listing as printed by the version control tool
///
/// Membership is a substring test against the whole listing, so `README.md`
/// is also considered changed when `docs/README.md` is listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangedPaths {
    listing: String,
}

impl ChangedPaths {
    pub fn from_listing(listing: impl Into<String>) -> Self {
        Self {
            listing: listing.into(),
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.listing.contains(path)
    }

    pub fn is_empty(&self) -> bool {
        self.listing.trim().is_empty()
    }
}

/// Ensure writing `contents` to `path` cannot clobber a manual edit
///
/// A listed destination that no longer exists counts as dirty.
pub fn check_destination(
    changed: &ChangedPaths,
    workspace: &impl Workspace,
    path: &Path,
    contents: &str,
) -> Result<()> {
    let vcs_path = to_vcs_path(path)?;
    if !changed.contains(&vcs_path) {
        debug!("{vcs_path} has no local changes");
        return Ok(());
    }

    warn!("{vcs_path} has local changes, comparing with generated content");
    let on_disk = match workspace.read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ReadmegenError::OutputDirty {
                path: path.to_path_buf(),
            })
        }
        Err(source) => {
            return Err(ReadmegenError::OutputRead {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    if lines_equal(&on_disk, contents) {
        debug!("{vcs_path} already matches generated content");
        Ok(())
    } else {
        Err(ReadmegenError::OutputDirty {
            path: path.to_path_buf(),
        })
    }
}

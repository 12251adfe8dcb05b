//! Filesystem access for a generator run
//!
//! All reads and writes go through [`Workspace`] so the run can be exercised
//! against an in-memory tree. Paths handed to a workspace are relative to its
//! root.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub trait Workspace {
    /// Read a file fully into a string
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Replace the file's contents, creating it if needed
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// Workspace backed by the real filesystem under `root`
#[derive(Debug, Clone)]
pub struct FsWorkspace {
    root: PathBuf,
}

impl FsWorkspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Workspace for FsWorkspace {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(self.root.join(path))
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(self.root.join(path), contents)
    }
}

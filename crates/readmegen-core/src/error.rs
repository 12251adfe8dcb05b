use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadmegenError {
    // Template errors
    #[error("TEMPLATE_READ_ERROR: failed to read template '{}': {source}", .path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Output errors
    #[error("OUTPUT_READ_ERROR: failed to read '{}': {source}", .path.display())]
    OutputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("OUTPUT_WRITE_ERROR: failed to write '{}': {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("OUTPUT_DIRTY: '{}' has local changes that differ from the generated content", .path.display())]
    OutputDirty { path: PathBuf },

    #[error("OUTPUT_PATH_INVALID: {0}")]
    OutputPathInvalid(String),

    // Version control errors
    #[error("VCS_COMMAND_FAILED: {0}")]
    VcsCommandFailed(String),
}

impl ReadmegenError {
    /// Path of the destination that tripped the dirty-file guard, if this is that error
    pub fn dirty_path(&self) -> Option<&PathBuf> {
        match self {
            ReadmegenError::OutputDirty { path } => Some(path),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReadmegenError>;

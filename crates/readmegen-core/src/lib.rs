// Core modules
pub mod config;
pub mod error;
pub mod generate;
pub mod guard;
pub mod lines;
pub mod magic;
pub mod path;
pub mod preamble;
pub mod substitute;
pub mod workspace;

// Re-export commonly used types
pub use config::DocsConfig;
pub use error::{ReadmegenError, Result};
pub use generate::{generate, Report};
pub use guard::{ChangedFiles, ChangedPaths};
pub use magic::{MagicEntry, MagicTable};
pub use preamble::Preambles;
pub use substitute::{substitute, Rendered};
pub use workspace::{FsWorkspace, Workspace};

//! Fixed paths used by the generator
//!
//! There is no configuration file and no flag: the template and both
//! destinations live at known locations relative to the repository root.
//! `DocsConfig` only exists so tests can point a run somewhere else.

use std::path::PathBuf;

/// Markdown template containing the magic placeholder lines
pub const TEMPLATE_PATH: &str = "docs/readme-generator.md";

/// Plain markdown for static hosting (images instead of includes)
pub const STATIC_OUTPUT_PATH: &str = "README.md";

/// Jekyll-ready markdown for dynamic hosting (captures and includes)
pub const DYNAMIC_OUTPUT_PATH: &str = "index.md";

/// Locations of the template and the two generated files, relative to the workspace root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsConfig {
    pub template: PathBuf,
    pub static_output: PathBuf,
    pub dynamic_output: PathBuf,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            template: PathBuf::from(TEMPLATE_PATH),
            static_output: PathBuf::from(STATIC_OUTPUT_PATH),
            dynamic_output: PathBuf::from(DYNAMIC_OUTPUT_PATH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = DocsConfig::default();
        assert_eq!(config.template, PathBuf::from("docs/readme-generator.md"));
        assert_eq!(config.static_output, PathBuf::from("README.md"));
        assert_eq!(config.dynamic_output, PathBuf::from("index.md"));
    }
}

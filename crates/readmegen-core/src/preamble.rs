//! Fixed header blocks that open each generated file

/// Title, project link and coverage badge for the static README.
/// The badge has no newline of its own; the template's first line ends it.
pub const STATIC_PREAMBLE: [&str; 3] = [
    "# A lightweight HTML+JS library for inputting two-dimensional form data\n\n",
    "See this project at [https://brmighell.github.io/rcv-entry/]\n\n",
    "[![Coverage Status](https://coveralls.io/repos/github/brmighell/rcv-entry/badge.svg?branch=main)](https://coveralls.io/github/brmighell/rcv-entry?branch=main)",
];

/// Jekyll front matter for the dynamic page
pub const DYNAMIC_PREAMBLE: [&str; 3] = ["---\n", "layout: default\n", "---\n"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preambles {
    pub static_lines: Vec<String>,
    pub dynamic_lines: Vec<String>,
}

impl Preambles {
    pub fn new(static_lines: Vec<String>, dynamic_lines: Vec<String>) -> Self {
        Self {
            static_lines,
            dynamic_lines,
        }
    }
}

impl Default for Preambles {
    fn default() -> Self {
        Self::new(
            STATIC_PREAMBLE.iter().map(|s| s.to_string()).collect(),
            DYNAMIC_PREAMBLE.iter().map(|s| s.to_string()).collect(),
        )
    }
}

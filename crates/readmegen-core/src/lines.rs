//! Line-oriented view of text files
//!
//! Lines keep their terminators so that joining them back yields the exact
//! bytes that were read. A final line without a newline stays as it is.

use crate::error::{ReadmegenError, Result};
use crate::workspace::Workspace;
use std::path::Path;

/// Split text into lines, each keeping its trailing `\n` if it had one
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_owned).collect()
}

/// Concatenate lines back into file contents
pub fn join_lines(lines: &[String]) -> String {
    lines.concat()
}

/// Compare two file contents line by line
pub fn lines_equal(left: &str, right: &str) -> bool {
    left.split_inclusive('\n').eq(right.split_inclusive('\n'))
}

/// Read the whole template into memory as an ordered sequence of lines
pub fn read_template(workspace: &impl Workspace, path: &Path) -> Result<Vec<String>> {
    let text = workspace
        .read_to_string(path)
        .map_err(|source| ReadmegenError::TemplateRead {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(split_lines(&text))
}

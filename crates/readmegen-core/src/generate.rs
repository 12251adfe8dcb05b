//! Run orchestration: read, transform, check, write
//!
//! [`generate`] is the whole program minus process concerns. The caller
//! supplies the filesystem and the changed-files source, so nothing here
//! touches the real disk or spawns git on its own.

use crate::config::DocsConfig;
use crate::error::{ReadmegenError, Result};
use crate::guard::{check_destination, ChangedFiles};
use crate::lines::read_template;
use crate::magic::MagicTable;
use crate::preamble::Preambles;
use crate::substitute::substitute;
use crate::workspace::Workspace;
use log::info;
use std::path::{Path, PathBuf};

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub static_output: PathBuf,
    pub dynamic_output: PathBuf,
    pub template_lines: usize,
    pub expansions: usize,
}

/// Regenerate both outputs from the template
///
/// Both destinations are checked before either is written, so a dirty
/// destination aborts with `OutputDirty` and leaves the disk untouched.
/// Once the check passes both files are always rewritten, in the order
/// static then dynamic.
pub fn generate(
    config: &DocsConfig,
    table: &MagicTable,
    preambles: &Preambles,
    changed: &impl ChangedFiles,
    workspace: &impl Workspace,
) -> Result<Report> {
    info!("Reading template {}", config.template.display());
    let template = read_template(workspace, &config.template)?;

    let rendered = substitute(&template, table, preambles);
    let static_contents = rendered.static_contents();
    let dynamic_contents = rendered.dynamic_contents();
    info!(
        "Expanded {} magic line(s) from {} template line(s)",
        rendered.expansions,
        template.len()
    );

    let changed_paths = changed.changed_paths()?;
    check_destination(
        &changed_paths,
        workspace,
        &config.dynamic_output,
        &dynamic_contents,
    )?;
    check_destination(
        &changed_paths,
        workspace,
        &config.static_output,
        &static_contents,
    )?;

    write_output(workspace, &config.static_output, &static_contents)?;
    write_output(workspace, &config.dynamic_output, &dynamic_contents)?;

    Ok(Report {
        static_output: config.static_output.clone(),
        dynamic_output: config.dynamic_output.clone(),
        template_lines: template.len(),
        expansions: rendered.expansions,
    })
}

fn write_output(workspace: &impl Workspace, path: &Path, contents: &str) -> Result<()> {
    workspace
        .write(path, contents)
        .map_err(|source| ReadmegenError::OutputWrite {
            path: path.to_path_buf(),
            source,
        })?;
    info!("Wrote {}", path.display());
    Ok(())
}

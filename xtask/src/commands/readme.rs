use crate::commands::git::GitChanges;
use anyhow::{Context, Result};
use log::info;
use readmegen_core::{DocsConfig, FsWorkspace, MagicTable, Preambles, generate};
use xshell::Shell;

/// Rebuilds the static and dynamic landing pages from the markdown template
#[derive(Default)]
pub struct ReadmeCommand {
    pub config: DocsConfig,
}

impl crate::commands::Command for ReadmeCommand {
    fn run(&self) -> Result<()> {
        let sh = Shell::new().context("Failed to create shell")?;
        let repo_root = sh.current_dir(); // Assuming we run from repo root

        let workspace = FsWorkspace::new(&repo_root);
        let changes = GitChanges { sh: &sh };
        let report = generate(
            &self.config,
            &MagicTable::builtin(),
            &Preambles::default(),
            &changes,
            &workspace,
        )?;

        info!(
            "Generated {} and {} ({} magic line(s) expanded)",
            report.static_output.display(),
            report.dynamic_output.display(),
            report.expansions
        );
        Ok(())
    }
}

impl ReadmeCommand {
    pub fn new() -> Self {
        Self::default()
    }
}

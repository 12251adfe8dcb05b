use readmegen_core::{ChangedFiles, ChangedPaths, ReadmegenError};
use xshell::{Shell, cmd};

/// Changed-files source backed by `git diff --name-only` in the shell's current directory
pub struct GitChanges<'a> {
    pub sh: &'a Shell,
}

impl ChangedFiles for GitChanges<'_> {
    fn changed_paths(&self) -> readmegen_core::Result<ChangedPaths> {
        let sh = self.sh;
        let listing = cmd!(sh, "git diff --name-only")
            .quiet()
            .read()
            .map_err(|e| ReadmegenError::VcsCommandFailed(e.to_string()))?;
        Ok(ChangedPaths::from_listing(listing))
    }
}

//! Throwaway git repositories for exercising the dirty-file guard

use std::path::{Path, PathBuf};
use xshell::{Shell, cmd};

/// A git repository rooted in a test directory
///
/// Every helper panics on failure; this is test-only code.
pub struct GitRepo {
    sh: Shell,
    root: PathBuf,
}

impl GitRepo {
    /// Run `git init` in `root` with a local identity so commits work on bare CI machines
    pub fn init(root: &Path) -> Self {
        let sh = Shell::new().expect("Failed to create shell");
        sh.change_dir(root);

        cmd!(sh, "git init --quiet")
            .quiet()
            .run()
            .expect("git init failed");
        for (key, value) in [
            ("user.name", "readmegen tests"),
            ("user.email", "tests@readmegen.invalid"),
            ("commit.gpgsign", "false"),
            ("core.autocrlf", "false"),
        ] {
            cmd!(sh, "git config {key} {value}")
                .quiet()
                .run()
                .expect("git config failed");
        }

        Self {
            sh,
            root: root.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Write a file relative to the repository root, creating parent directories
    pub fn write(&self, rel_path: &str, contents: &str) {
        self.sh
            .write_file(self.root.join(rel_path), contents)
            .unwrap_or_else(|e| panic!("Failed to write {rel_path}: {e}"));
    }

    pub fn read(&self, rel_path: &str) -> String {
        self.sh
            .read_file(self.root.join(rel_path))
            .unwrap_or_else(|e| panic!("Failed to read {rel_path}: {e}"))
    }

    /// Stage everything and commit it
    pub fn commit_all(&self, message: &str) {
        let sh = &self.sh;
        cmd!(sh, "git add -A").quiet().run().expect("git add failed");
        cmd!(sh, "git commit --quiet -m {message}")
            .quiet()
            .run()
            .expect("git commit failed");
    }

    /// Output of `git diff --name-only`
    pub fn changed_files(&self) -> String {
        let sh = &self.sh;
        cmd!(sh, "git diff --name-only")
            .quiet()
            .read()
            .expect("git diff failed")
    }
}

use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use std::process::{Command, Output};

/// Read-only queries against the repository the workspace lives in.
#[derive(Debug)]
pub struct Git {
    workdir: PathBuf,
}

impl Git {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self { workdir: workdir.into() }
    }

    /// Tag pointing exactly at `HEAD` (`git describe --tags --exact-match HEAD`).
    ///
    /// # Result
    /// Returns `None` when `HEAD` carries no tag.
    ///
    /// # Errors
    /// Returns an error if git cannot be executed or prints a non-UTF-8 tag.
    pub fn exact_tag(&self) -> Result<Option<String>> {
        let output = self.run(&["describe", "--tags", "--exact-match", "HEAD"])?;
        if !output.status.success() {
            return Ok(None);
        }

        let tag = String::from_utf8(output.stdout).context("git describe printed a non-UTF-8 tag")?;
        let tag = tag.trim();
        Ok((!tag.is_empty()).then(|| tag.to_owned()))
    }

    /// Uncommitted changes, one `git status --porcelain` line each.
    ///
    /// # Errors
    /// Returns an error if git cannot be executed or the status query fails.
    pub fn uncommitted_changes(&self) -> Result<Vec<String>> {
        let output = self.run(&["status", "--porcelain"])?;
        if !output.status.success() {
            bail!("git status failed: {}", String::from_utf8_lossy(&output.stderr).trim());
        }

        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_owned)
            .collect())
    }

    fn run(&self, args: &[&str]) -> Result<Output> {
        Command::new("git")
            .arg("-C")
            .arg(&self.workdir)
            .args(args)
            .output()
            .with_context(|| "Failed to execute git. Is Git installed and in your PATH?")
    }
}

//! Resolved settings for a single scaffold run.

use crate::error::{Result, ScaffoldError};
use crate::variant::Variant;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the remote registered when a repository URL is given.
pub const REMOTE_NAME: &str = "origin";

/// Branch the local repository is renamed to before pushing.
pub const MAIN_BRANCH: &str = "main";

/// Everything the pipeline needs to know, fixed before the first step runs.
#[derive(Debug, Clone)]
pub struct ScaffoldConfig {
    pub project_name: String,
    pub repo_url: Option<String>,
    pub variant: Variant,
    /// Directory the generator runs in
    pub base_dir: PathBuf,
}

impl ScaffoldConfig {
    /// Build a config from raw arguments.
    ///
    /// An absent or blank project name is a usage error. An empty repository
    /// URL is treated as absent.
    pub fn new(
        project_name: Option<String>,
        repo_url: Option<String>,
        variant: Variant,
        base_dir: PathBuf,
    ) -> Result<Self> {
        let project_name = project_name
            .filter(|name| !name.trim().is_empty())
            .ok_or(ScaffoldError::Usage)?;

        Ok(Self {
            project_name,
            repo_url: repo_url.filter(|url| !url.is_empty()),
            variant,
            base_dir,
        })
    }

    /// Directory created by the generator; every later step is relative to it.
    #[must_use]
    pub fn project_root(&self) -> PathBuf {
        self.base_dir.join(&self.project_name)
    }

    /// Refuse to run over an existing, non-empty project directory.
    pub fn check_target_is_free(&self) -> Result<()> {
        if dir_has_entries(&self.project_root()) {
            return Err(ScaffoldError::ProjectExists(self.project_name.clone()));
        }
        Ok(())
    }

    #[must_use]
    pub fn commit_message(&self) -> String {
        format!(
            "Initial commit: Set up React project {} with react-setup",
            self.project_name
        )
    }
}

fn dir_has_entries(path: &Path) -> bool {
    match fs::read_dir(path) {
        Ok(mut entries) => entries.next().is_some(),
        // A plain file in the way counts as occupied too
        Err(_) => path.exists(),
    }
}

/// Current directory, or `.` when it cannot be determined.
#[must_use]
pub fn default_base_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

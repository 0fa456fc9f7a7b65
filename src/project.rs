use crate::error::{Result, SubagentError};
use std::path::{Path, PathBuf};
use std::process::Command;

/// The project a project-scoped deploy targets.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
}

impl Project {
    /// Detect the enclosing project.
    ///
    /// Prefers the git toplevel (worktree-aware), canonicalized; outside
    /// any repository the current directory serves as the project root.
    pub fn detect() -> Result<Self> {
        if let Some(root) = git_toplevel() {
            return Ok(Self { root });
        }

        let cwd = std::env::current_dir().map_err(|e| {
            SubagentError::ProjectDetection(format!("failed to get current directory: {}", e))
        })?;
        Ok(Self { root: cwd })
    }

    pub fn at(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn git_toplevel() -> Option<PathBuf> {
    let output = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let root = String::from_utf8_lossy(&output.stdout).trim().to_string();
    // Canonicalize to resolve symlinks and any ..
    PathBuf::from(root).canonicalize().ok()
}

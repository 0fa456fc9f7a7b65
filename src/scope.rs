//! Deployment scopes and the resolved filesystem layout for one scope.
//!
//! Core components never consult the environment; everything they touch
//! is a path carried in a [`ScopeLayout`], resolved once here at the CLI
//! boundary.

use crate::config::Config;
use crate::error::{Result, SubagentError};
use crate::project::Project;
use crate::utils::path::expand_tilde_with;
use std::path::{Path, PathBuf};

pub const SUBAGENTS_DIR_NAME: &str = ".subagents";
pub const MANIFEST_FILE_NAME: &str = "manifest.json";
pub const LOG_FILE_NAME: &str = "subagent.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Project,
    Global,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Project => "project",
            Scope::Global => "global",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All paths one deploy/undeploy needs, resolved to absolutes.
#[derive(Debug, Clone)]
pub struct ScopeLayout {
    pub scope: Scope,
    /// Project root, or the home directory for the global scope
    pub root: PathBuf,
    /// The user's home; vendor isolation links credentials from here
    pub home: PathBuf,
    /// `<root>/.subagents` - manifest, control scripts, agent dirs
    pub subagents_dir: PathBuf,
    pub manifest_file: PathBuf,
    pub log_file: PathBuf,
    /// Where this scope's workflow documents go
    pub workflows_dir: PathBuf,
    /// Shared host config file carrying the routing section
    pub routing_file: PathBuf,
}

impl ScopeLayout {
    /// Build the layout from explicit roots. Pure: no environment or
    /// filesystem access, so tests can point everything at a tempdir.
    pub fn from_roots(
        scope: Scope,
        project_root: Option<&Path>,
        home: &Path,
        config: &Config,
    ) -> Result<Self> {
        let root = match scope {
            Scope::Project => project_root
                .ok_or_else(|| {
                    SubagentError::ProjectDetection(
                        "no project root resolved for a project-scoped operation".to_string(),
                    )
                })?
                .to_path_buf(),
            Scope::Global => home.to_path_buf(),
        };

        let subagents_dir = root.join(SUBAGENTS_DIR_NAME);

        let workflows_dir = match scope {
            Scope::Project => {
                let dir = Path::new(&config.workflows.project_dir);
                if dir.is_absolute() {
                    dir.to_path_buf()
                } else {
                    root.join(dir)
                }
            }
            Scope::Global => expand_tilde_with(&config.workflows.global_dir, home),
        };

        let routing_file = expand_tilde_with(&config.routing.config_file, home);

        Ok(Self {
            scope,
            home: home.to_path_buf(),
            manifest_file: subagents_dir.join(MANIFEST_FILE_NAME),
            log_file: subagents_dir.join(LOG_FILE_NAME),
            subagents_dir,
            workflows_dir,
            routing_file,
            root,
        })
    }

    /// Resolve the layout from the environment: project detection for
    /// the project scope, HOME for everything tied to the user.
    pub fn resolve(scope: Scope, config: &Config) -> Result<Self> {
        let home = home_dir()?;
        let project = match scope {
            Scope::Project => Some(Project::detect()?),
            Scope::Global => None,
        };
        Self::from_roots(scope, project.as_ref().map(|p| p.root()), &home, config)
    }

    /// Directory holding one agent's instructions and isolation state
    pub fn agent_dir(&self, name: &str) -> PathBuf {
        self.subagents_dir.join(name)
    }

    pub fn instructions_file(&self, name: &str) -> PathBuf {
        self.agent_dir(name).join(format!("{}.md", name))
    }
}

pub fn home_dir() -> Result<PathBuf> {
    match std::env::var("HOME") {
        Ok(home) if !home.is_empty() => Ok(PathBuf::from(home)),
        _ => Err(SubagentError::NoHomeDir),
    }
}

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional overrides for where delegation state lands.
///
/// Loaded with the usual precedence: project `.subagents.toml` over
/// global `~/.subagents.toml` over built-in defaults. Most users never
/// write this file; it exists for host assistants that read a different
/// config file than the Gemini CLI.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub routing: RoutingConfig,

    #[serde(default)]
    pub workflows: WorkflowsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Shared host config file the routing section is merged into.
    /// Tilde paths are expanded at layout resolution.
    #[serde(default = "default_routing_file")]
    pub config_file: String,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            config_file: default_routing_file(),
        }
    }
}

fn default_routing_file() -> String {
    "~/.gemini/GEMINI.md".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowsConfig {
    /// Workflow documents for project-scoped agents, relative to the
    /// project root unless absolute
    #[serde(default = "default_project_workflows")]
    pub project_dir: String,

    /// Workflow documents for global agents
    #[serde(default = "default_global_workflows")]
    pub global_dir: String,
}

impl Default for WorkflowsConfig {
    fn default() -> Self {
        Self {
            project_dir: default_project_workflows(),
            global_dir: default_global_workflows(),
        }
    }
}

fn default_project_workflows() -> String {
    ".agent/workflows".to_string()
}

fn default_global_workflows() -> String {
    "~/.gemini/antigravity/global_workflows".to_string()
}

impl Config {
    /// Load configuration with precedence:
    /// 1. Project config (.subagents.toml in project root)
    /// 2. Global config (~/.subagents.toml)
    /// 3. Built-in defaults
    pub fn load(project_root: Option<&Path>, home: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(home) = home {
            let global = home.join(".subagents.toml");
            if global.exists() {
                config = config.merge(Self::from_file(&global)?);
            }
        }

        if let Some(root) = project_root {
            let project = root.join(".subagents.toml");
            if project.exists() {
                config = config.merge(Self::from_file(&project)?);
            }
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence for
    /// any field it set away from the default).
    fn merge(mut self, other: Self) -> Self {
        if other.routing.config_file != default_routing_file() {
            self.routing.config_file = other.routing.config_file;
        }
        if other.workflows.project_dir != default_project_workflows() {
            self.workflows.project_dir = other.workflows.project_dir;
        }
        if other.workflows.global_dir != default_global_workflows() {
            self.workflows.global_dir = other.workflows.global_dir;
        }
        self
    }
}

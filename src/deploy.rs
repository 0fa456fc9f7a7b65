//! Deploy and undeploy orchestration.
//!
//! A deploy is a straight-line sequence; any failing step aborts the
//! rest and surfaces to the caller. There is no rollback - partially
//! deployed state is repaired by simply deploying again.

use crate::agent::SubAgent;
use crate::error::{Result, SubagentError};
use crate::invocation::generate_commands;
use crate::manifest::Manifest;
use crate::routing::{self, RemoveOutcome};
use crate::scope::ScopeLayout;
use crate::scripts;
use crate::workflows;
use std::fs;

/// What an undeploy did, for the CLI to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndeployOutcome {
    /// No agents left in this scope afterwards
    pub scope_emptied: bool,
    /// Result of routing-section removal; None when other agents remain
    /// and the section was deliberately kept
    pub routing: Option<RemoveOutcome>,
}

/// Install or refresh one agent in the given scope.
pub fn deploy(agent: &SubAgent, layout: &ScopeLayout) -> Result<()> {
    agent.validate()?;

    let agent_dir = layout.agent_dir(&agent.name);
    fs::create_dir_all(&agent_dir)?;

    scripts::ensure_scripts(&layout.subagents_dir)?;
    if agent.vendor.needs_isolation() {
        scripts::setup_codex_isolation(&agent_dir, &layout.home)?;
    }

    fs::write(layout.instructions_file(&agent.name), &agent.instructions)?;

    let mut manifest = Manifest::load_or_create(&layout.manifest_file)?;
    manifest.upsert(agent, &layout.subagents_dir);
    manifest.save(&layout.manifest_file)?;

    let commands = generate_commands(&agent.name, agent.vendor, &layout.subagents_dir);
    workflows::write_workflows(&layout.workflows_dir, agent, &commands, &agent_dir)?;

    routing::ensure_section(&layout.routing_file)?;

    Ok(())
}

/// Remove one agent from the given scope.
///
/// The routing section in the shared host config file is only removed
/// once the scope's last agent is gone; while any agent remains the
/// section must stay. The agent's directory (instructions, isolation
/// state) is left on disk for the caller to delete.
pub fn undeploy(name: &str, layout: &ScopeLayout) -> Result<UndeployOutcome> {
    let mut manifest = Manifest::load_or_create(&layout.manifest_file)?;
    if !manifest.remove(name) {
        return Err(SubagentError::AgentNotDeployed(name.to_string()));
    }
    manifest.save(&layout.manifest_file)?;

    let scope_emptied = manifest.is_empty();
    workflows::remove_workflows(&layout.workflows_dir, name, scope_emptied)?;

    let routing = if scope_emptied {
        Some(routing::remove_section(&layout.routing_file)?)
    } else {
        None
    };

    Ok(UndeployOutcome {
        scope_emptied,
        routing,
    })
}

use crate::error::Result;
use crate::manifest::Manifest;
use crate::routing::{self, MARKER_END, MARKER_START};
use crate::scope::ScopeLayout;
use crate::scripts::{script_status, ScriptStatus};
use std::fs;

pub fn execute(layout: &ScopeLayout) -> Result<()> {
    println!("Scope: {}", layout.scope);
    println!("  Root:      {}", layout.root.display());
    println!("  State:     {}", layout.subagents_dir.display());
    println!("  Workflows: {}", layout.workflows_dir.display());
    println!("  Routing:   {}", layout.routing_file.display());

    let manifest = Manifest::load_or_create(&layout.manifest_file)?;
    println!("\nAgents: {}", manifest.agents.len());
    for agent in &manifest.agents {
        println!("  - {}", agent.name);
    }

    let scripts = match script_status(&layout.subagents_dir) {
        ScriptStatus::UpToDate => "up to date",
        ScriptStatus::Stale => "stale (refreshed on next deploy)",
        ScriptStatus::Missing => "missing (written on first deploy)",
    };
    println!("\nControl scripts: {}", scripts);

    println!("Routing instructions: {}", routing_state(layout));

    if manifest.agents.is_empty() {
        println!("\nRun 'subagents deploy <definition.toml>' to deploy an agent.");
    }

    Ok(())
}

fn routing_state(layout: &ScopeLayout) -> &'static str {
    let content = match fs::read_to_string(&layout.routing_file) {
        Ok(content) => content,
        Err(_) => return "absent (file not created yet)",
    };

    match content.find(MARKER_START) {
        Some(start) if content[start..].contains(MARKER_END) => {
            if content.contains(routing::ROUTING_SECTION.trim_end()) {
                "present"
            } else {
                "present (older text; undeploy all agents and redeploy to refresh)"
            }
        }
        Some(_) => "malformed (start marker without end marker)",
        None => "absent",
    }
}

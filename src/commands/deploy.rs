use crate::agent::SubAgent;
use crate::deploy;
use crate::error::Result;
use crate::manifest::Manifest;
use crate::scope::ScopeLayout;
use std::path::Path;

pub fn execute(definition: &Path, layout: &ScopeLayout, verbose: bool) -> Result<()> {
    let agent = SubAgent::load(definition)?;

    println!(
        "Deploying SubAgent: {} ({}, {} scope)",
        agent.name, agent.vendor, layout.scope
    );
    if verbose {
        println!("  Agent directory: {}", layout.agent_dir(&agent.name).display());
        println!("  Manifest:        {}", layout.manifest_file.display());
        println!("  Workflows:       {}", layout.workflows_dir.display());
        println!("  Routing file:    {}", layout.routing_file.display());
    }

    // The vendor CLI is only needed when the agent actually runs, so a
    // missing binary is a warning, not a failure
    if which::which(agent.vendor.cli_binary()).is_err() {
        eprintln!(
            "⚠ Warning: '{}' not found in PATH. Install and authenticate it before running this agent.",
            agent.vendor.cli_binary()
        );
    }

    deploy::deploy(&agent, layout)?;

    let manifest = Manifest::load_or_create(&layout.manifest_file)?;
    println!("✓ Control scripts refreshed");
    println!(
        "✓ Manifest updated ({} agent{})",
        manifest.agents.len(),
        if manifest.agents.len() == 1 { "" } else { "s" }
    );
    println!("✓ Workflow commands written");
    println!(
        "✓ Routing instructions present in {}",
        layout.routing_file.display()
    );

    Ok(())
}

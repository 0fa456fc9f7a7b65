use crate::deploy;
use crate::error::Result;
use crate::routing::RemoveOutcome;
use crate::scope::ScopeLayout;
use std::io::{self, Write};

pub fn execute(name: &str, layout: &ScopeLayout, yes: bool, verbose: bool) -> Result<()> {
    println!("SubAgent: {} ({} scope)", name, layout.scope);
    if verbose {
        println!("  Manifest:  {}", layout.manifest_file.display());
        println!("  Workflows: {}", layout.workflows_dir.display());
    }

    // Prompt for confirmation unless --yes was provided
    if !yes {
        print!("Undeploy this agent? [y/N] ");
        io::stdout().flush().ok();

        let mut input = String::new();
        io::stdin().read_line(&mut input).ok();
        let input = input.trim().to_lowercase();

        if input != "y" && input != "yes" {
            println!("Aborted.");
            return Ok(());
        }
    }

    let outcome = deploy::undeploy(name, layout)?;

    println!("✓ Removed '{}' from the manifest", name);
    println!("✓ Workflow command removed");

    match outcome.routing {
        Some(RemoveOutcome::Removed) => {
            println!(
                "✓ Last agent in scope; routing instructions removed from {}",
                layout.routing_file.display()
            );
        }
        Some(RemoveOutcome::NotPresent) => {
            println!("  No routing instructions found to remove.");
        }
        Some(RemoveOutcome::Malformed) => {
            eprintln!(
                "⚠ Warning: routing section in {} is missing its end marker; file left untouched",
                layout.routing_file.display()
            );
        }
        None => {
            println!("  Other agents remain deployed; routing instructions kept.");
        }
    }

    let agent_dir = layout.agent_dir(name);
    if agent_dir.exists() {
        println!(
            "  Agent directory left at {} (delete it manually if unwanted).",
            agent_dir.display()
        );
    }

    Ok(())
}

use crate::config::Config;
use crate::error::Result;
use crate::manifest::Manifest;
use crate::project::Project;
use crate::scope::{home_dir, Scope, ScopeLayout};

pub fn execute(config: &Config, project_only: bool, global_only: bool) -> Result<()> {
    let mut printed_any = false;

    if !global_only {
        // Outside any project the section is silently skipped unless
        // the user asked for project scope explicitly
        match Project::detect() {
            Ok(project) => {
                let layout = ScopeLayout::from_roots(
                    Scope::Project,
                    Some(project.root()),
                    &home_dir()?,
                    config,
                )?;
                print_scope(&layout)?;
                printed_any = true;
            }
            Err(e) if project_only => return Err(e),
            Err(_) => {}
        }
    }

    if !project_only {
        let home = home_dir()?;
        let layout = ScopeLayout::from_roots(Scope::Global, None, &home, config)?;
        if printed_any {
            println!();
        }
        print_scope(&layout)?;
    }

    Ok(())
}

fn print_scope(layout: &ScopeLayout) -> Result<()> {
    let manifest = Manifest::load_or_create(&layout.manifest_file)?;

    println!("{} ({}):", heading(layout.scope), layout.root.display());

    if manifest.agents.is_empty() {
        println!("  (no agents deployed)");
        return Ok(());
    }

    for agent in &manifest.agents {
        println!("  {:<20} {}", agent.name, agent.description);
    }

    Ok(())
}

fn heading(scope: Scope) -> &'static str {
    match scope {
        Scope::Project => "Project agents",
        Scope::Global => "Global agents",
    }
}

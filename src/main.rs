#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;

use subagents::cli::{Cli, Commands};
use subagents::commands;
use subagents::config::Config;
use subagents::project::Project;
use subagents::scope::{home_dir, Scope, ScopeLayout};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // List resolves its own scopes (it may cover both at once)
    if let Commands::List { project, global } = &cli.command {
        let config = load_config()?;
        commands::list::execute(&config, *project, *global)?;
        return Ok(());
    }

    let scope = if scope_is_global(&cli.command) {
        Scope::Global
    } else {
        Scope::Project
    };
    let config = load_config()?;
    let layout = ScopeLayout::resolve(scope, &config)?;

    match &cli.command {
        Commands::Deploy { definition, .. } => {
            commands::deploy::execute(definition, &layout, cli.verbose)?;
        }
        Commands::Undeploy { name, yes, .. } => {
            commands::undeploy::execute(name, &layout, *yes, cli.verbose)?;
        }
        Commands::Info { .. } => {
            commands::info::execute(&layout)?;
        }
        Commands::Log { lines, follow, .. } => {
            commands::log::execute(&layout, *lines, *follow)?;
        }
        Commands::List { .. } => unreachable!(),
    }

    Ok(())
}

fn scope_is_global(command: &Commands) -> bool {
    match command {
        Commands::Deploy { global, .. }
        | Commands::Undeploy { global, .. }
        | Commands::Info { global }
        | Commands::Log { global, .. } => *global,
        Commands::List { global, .. } => *global,
    }
}

fn load_config() -> Result<Config> {
    // Config is optional on both levels; project detection may fail
    // outside a project and that is fine here - the layout resolution
    // will raise it for commands that truly need a project
    let home = home_dir().ok();
    let project = Project::detect().ok();
    let config = Config::load(
        project.as_ref().map(|p| p.root()),
        home.as_deref(),
    )?;
    Ok(config)
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "subagents")]
#[command(about = "Deploy SubAgent delegation configs for AI coding CLIs", long_about = None)]
#[command(version = env!("SUBAGENTS_VERSION"))]
#[command(after_help = "\
SCOPES:
  Agents deploy to the project (./.subagents/) by default, or to your
  user account (~/.subagents/) with --global.

EXAMPLES:
  subagents deploy translator.toml      Deploy to the current project
  subagents deploy reviewer.toml --global
  subagents list                        Show deployed agents in both scopes
  subagents undeploy translator -y      Remove without confirmation
  subagents log --follow                Watch a running codex session

For details about a specific command, use:
  subagents <command> --help")]
pub struct Cli {
    /// Show verbose output including resolved paths
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploy a SubAgent from a TOML definition file
    #[command(long_about = "Deploy a SubAgent from a TOML definition file.\n\n\
        Installs the agent's instructions and control scripts, records it\n\
        in the scope's manifest, writes slash-command workflow documents,\n\
        and makes sure the host assistant's config file carries the\n\
        delegation routing instructions. Re-deploying an existing agent\n\
        updates it in place.")]
    Deploy {
        /// Path to the agent definition (name, description, vendor,
        /// instructions)
        definition: PathBuf,

        /// Deploy for your user account instead of this project
        #[arg(long)]
        global: bool,
    },

    /// Remove a deployed SubAgent
    #[command(long_about = "Remove a deployed SubAgent.\n\n\
        Deletes the agent's manifest entry and workflow document. When the\n\
        last agent in the scope is removed, the routing instructions are\n\
        taken back out of the host assistant's config file. The agent's\n\
        directory is left on disk.")]
    Undeploy {
        /// Name of the deployed agent
        name: String,

        /// Undeploy from your user account instead of this project
        #[arg(long)]
        global: bool,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List deployed SubAgents
    List {
        /// Only list project-scoped agents
        #[arg(long, conflicts_with = "global")]
        project: bool,

        /// Only list globally deployed agents
        #[arg(long)]
        global: bool,
    },

    /// Show the deployment layout and its current state
    Info {
        /// Inspect the global scope instead of this project
        #[arg(long)]
        global: bool,
    },

    /// View the SubAgent session log
    Log {
        /// Number of lines to show (default: 50)
        #[arg(short = 'n', long, default_value = "50")]
        lines: usize,

        /// Follow log output in real-time (like tail -f)
        #[arg(long)]
        follow: bool,

        /// Read the global scope's log instead of this project's
        #[arg(long)]
        global: bool,
    },
}

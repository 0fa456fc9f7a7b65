//! Slash-command workflow documents the host assistant picks up:
//! a shared auto-select document plus one document per deployed agent.

use crate::agent::SubAgent;
use crate::error::Result;
use crate::manifest::AgentCommands;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub const AUTO_WORKFLOW: &str = include_str!("../templates/subagent-auto.md");

pub const AUTO_WORKFLOW_FILE: &str = "subagent-auto.md";

pub fn agent_workflow_file(name: &str) -> String {
    format!("subagent-{}.md", name)
}

/// Render the per-agent workflow document.
///
/// `$AGENT_DIR` in the rendered body is resolved to the absolute agent
/// directory, so the document works from any working directory.
pub fn render_agent_workflow(
    agent: &SubAgent,
    commands: &AgentCommands,
    agent_dir: &Path,
) -> String {
    let body = format!(
        "---\n\
         description: Call SubAgent \"{name}\" - {description}\n\
         ---\n\
         # SubAgent: {name}\n\
         \n\
         Execute this SubAgent with the given task.\n\
         Agent directory: $AGENT_DIR\n\
         \n\
         Start command:\n\
         ```bash\n\
         {start}\n\
         ```\n\
         \n\
         Resume command (if questions are asked):\n\
         ```bash\n\
         {resume}\n\
         ```\n",
        name = agent.name,
        description = agent.description,
        start = commands.start,
        resume = commands.resume,
    );

    body.replace("$AGENT_DIR", &agent_dir.display().to_string())
}

/// Write the auto-select document and this agent's document.
pub fn write_workflows(
    workflows_dir: &Path,
    agent: &SubAgent,
    commands: &AgentCommands,
    agent_dir: &Path,
) -> Result<()> {
    fs::create_dir_all(workflows_dir)?;

    fs::write(workflows_dir.join(AUTO_WORKFLOW_FILE), AUTO_WORKFLOW)?;
    fs::write(
        workflows_dir.join(agent_workflow_file(&agent.name)),
        render_agent_workflow(agent, commands, agent_dir),
    )?;

    Ok(())
}

/// Remove this agent's document; when the scope has emptied, the shared
/// auto-select document goes too.
pub fn remove_workflows(workflows_dir: &Path, name: &str, scope_emptied: bool) -> Result<()> {
    remove_if_present(&workflows_dir.join(agent_workflow_file(name)))?;
    if scope_emptied {
        remove_if_present(&workflows_dir.join(AUTO_WORKFLOW_FILE))?;
    }
    Ok(())
}

fn remove_if_present(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

//! Shell command strings recorded in the manifest.
//!
//! The host assistant substitutes `$TASK`, `$SESSION_ID` and `$ANSWER`
//! itself before running the command, so those stay literal here. The
//! scripts directory may contain spaces; the agent name is validated to a
//! shell-safe alphabet and the vendor tag is a fixed token, so only the
//! script path is quoted.

use crate::agent::Vendor;
use crate::manifest::AgentCommands;
use std::path::Path;

/// Build the start/resume invocations for one agent, pointing at the
/// control scripts under `scripts_dir`.
pub fn generate_commands(name: &str, vendor: Vendor, scripts_dir: &Path) -> AgentCommands {
    AgentCommands {
        start: format!(
            "\"{}\" {} {} \"$TASK\"",
            scripts_dir.join("start.sh").display(),
            vendor.as_str(),
            name
        ),
        resume: format!(
            "\"{}\" {} {} $SESSION_ID \"$ANSWER\"",
            scripts_dir.join("resume.sh").display(),
            vendor.as_str(),
            name
        ),
    }
}

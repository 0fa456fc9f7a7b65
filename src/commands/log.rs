use crate::error::{Result, SubagentError};
use crate::scope::ScopeLayout;
use std::fs;
use std::process::Command;

pub fn execute(layout: &ScopeLayout, lines: usize, follow: bool) -> Result<()> {
    if !layout.log_file.exists() {
        eprintln!("No session log at {}", layout.log_file.display());
        eprintln!();
        eprintln!("The log is written when a codex SubAgent runs via start.sh.");
        eprintln!("Claude agents produce no verbose log in print mode.");
        return Ok(());
    }

    if follow {
        println!("SubAgent log (following): {}", layout.log_file.display());
        println!("Press Ctrl+C to stop");
        println!();

        // Hand the terminal to tail; it already does line-following well
        let status = Command::new("tail")
            .arg("-n")
            .arg(lines.to_string())
            .arg("-f")
            .arg(&layout.log_file)
            .status()
            .map_err(|e| SubagentError::CommandFailed(format!("failed to run tail: {}", e)))?;

        if !status.success() {
            return Err(SubagentError::CommandFailed(
                "log streaming terminated with error".to_string(),
            ));
        }
    } else {
        let content = fs::read_to_string(&layout.log_file)?;

        if content.trim().is_empty() {
            println!("Log is empty. No codex session has run yet.");
            return Ok(());
        }

        let all: Vec<&str> = content.lines().collect();
        let start = all.len().saturating_sub(lines);

        println!("SubAgent log: {}", layout.log_file.display());
        if start > 0 {
            println!("(last {} of {} lines; use -n to see more)", lines, all.len());
        }
        println!();
        for line in &all[start..] {
            println!("{}", line);
        }
    }

    Ok(())
}

//! Control-script installation: the start/resume protocol bridge and the
//! log-view helper, embedded at compile time and written out on every
//! deploy.

use crate::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::os::unix::fs::symlink;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

// Embedded script bodies. The generator is the single source of truth:
// ensure_scripts() overwrites unconditionally, so edits on disk do not
// survive the next deploy.
pub const START_SCRIPT: &str = include_str!("../templates/start.sh");
pub const RESUME_SCRIPT: &str = include_str!("../templates/resume.sh");
pub const WATCH_LOG_SCRIPT: &str = include_str!("../templates/watch-log.sh");

const SCRIPTS: [(&str, &str); 3] = [
    ("start.sh", START_SCRIPT),
    ("resume.sh", RESUME_SCRIPT),
    ("watch-log.sh", WATCH_LOG_SCRIPT),
];

/// Freshness of the installed scripts, as shown by `subagents info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStatus {
    UpToDate,
    /// Present but differing from the current templates
    Stale,
    Missing,
}

/// Write all control scripts into `scripts_dir` and mark them executable.
pub fn ensure_scripts(scripts_dir: &Path) -> Result<()> {
    fs::create_dir_all(scripts_dir)?;

    for (name, body) in SCRIPTS {
        let path = scripts_dir.join(name);
        fs::write(&path, body)?;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
    }

    Ok(())
}

/// Compare installed scripts against the embedded templates.
pub fn script_status(scripts_dir: &Path) -> ScriptStatus {
    let mut all_current = true;

    for (name, body) in SCRIPTS {
        match fs::read_to_string(scripts_dir.join(name)) {
            Ok(installed) if installed == body => {}
            Ok(_) => all_current = false,
            Err(_) => return ScriptStatus::Missing,
        }
    }

    if all_current {
        ScriptStatus::UpToDate
    } else {
        ScriptStatus::Stale
    }
}

/// Prepare a codex agent directory so the CLI runs isolated from the
/// user's global `~/.codex/AGENTS.md` but still authenticated.
///
/// Creates `<agent_dir>/.codex` and links the user's `auth.json` into
/// it. A missing user credential file is fine — codex will prompt for
/// login on first use. An existing link (or file) is left alone.
pub fn setup_codex_isolation(agent_dir: &Path, home: &Path) -> Result<()> {
    let codex_dir = agent_dir.join(".codex");
    fs::create_dir_all(&codex_dir)?;

    let auth_link = codex_dir.join("auth.json");
    if auth_link.symlink_metadata().is_ok() {
        return Ok(());
    }

    // No user credential file means the user authenticates with an API
    // key or will be prompted to log in; either way, nothing to link
    let user_auth = home.join(".codex").join("auth.json");
    if !user_auth.exists() {
        return Ok(());
    }

    match symlink(&user_auth, &auth_link) {
        Ok(()) => Ok(()),
        // Raced with another deploy; the link is there now
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_scripts_writes_all_executable() {
        let dir = tempfile::tempdir().unwrap();
        let scripts_dir = dir.path().join(".subagents");

        ensure_scripts(&scripts_dir).unwrap();

        for (name, body) in SCRIPTS {
            let path = scripts_dir.join(name);
            assert_eq!(fs::read_to_string(&path).unwrap(), body);

            let mode = fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o755, "{} should be executable", name);
        }
    }

    #[test]
    fn test_ensure_scripts_overwrites_edits() {
        let dir = tempfile::tempdir().unwrap();
        let scripts_dir = dir.path().join(".subagents");
        ensure_scripts(&scripts_dir).unwrap();

        fs::write(scripts_dir.join("start.sh"), "#!/bin/bash\necho edited\n").unwrap();
        assert_eq!(script_status(&scripts_dir), ScriptStatus::Stale);

        ensure_scripts(&scripts_dir).unwrap();
        assert_eq!(script_status(&scripts_dir), ScriptStatus::UpToDate);
        assert_eq!(
            fs::read_to_string(scripts_dir.join("start.sh")).unwrap(),
            START_SCRIPT
        );
    }

    #[test]
    fn test_script_status_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(script_status(dir.path()), ScriptStatus::Missing);
    }

    #[test]
    fn test_script_bodies_honor_output_contract() {
        for body in [START_SCRIPT, RESUME_SCRIPT] {
            assert!(body.starts_with("#!/bin/bash"));
            // Both vendor branches exist in the body
            assert!(body.contains("if [ \"$VENDOR\" = \"codex\" ]"));
            assert!(body.contains("claude -p"));
            // Normalized marker preceded by a blank line
            assert!(body.contains("echo \"\"\n  echo \"[SESSION_ID: "));
            // Diagnostic stream goes to the shared per-scope log
            assert!(body.contains("subagent.log"));
        }

        // claude never fabricates a session marker
        assert!(START_SCRIPT.contains("SESSION_ID=\"\""));
        assert!(RESUME_SCRIPT.contains("NEW_SESSION_ID=\"\""));

        // resume carries the id through to codex, and falls back to
        // continue-most-recent for claude
        assert!(RESUME_SCRIPT.contains("resume \"$SESSION_ID\""));
        assert!(RESUME_SCRIPT.contains("--continue"));
    }

    #[test]
    fn test_watch_log_tails_the_session_log() {
        assert!(WATCH_LOG_SCRIPT.contains("tail -n"));
        assert!(WATCH_LOG_SCRIPT.contains("subagent.log"));
    }

    #[test]
    fn test_codex_isolation_links_existing_auth() {
        let dir = tempfile::tempdir().unwrap();
        let home = dir.path().join("home");
        fs::create_dir_all(home.join(".codex")).unwrap();
        fs::write(home.join(".codex/auth.json"), "{}").unwrap();

        let agent_dir = dir.path().join("translator");
        fs::create_dir_all(&agent_dir).unwrap();

        setup_codex_isolation(&agent_dir, &home).unwrap();

        let link = agent_dir.join(".codex/auth.json");
        assert!(link.symlink_metadata().unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&link).unwrap(), "{}");

        // Second run leaves the link in place
        setup_codex_isolation(&agent_dir, &home).unwrap();
    }

    #[test]
    fn test_codex_isolation_without_user_auth() {
        let dir = tempfile::tempdir().unwrap();
        let home = dir.path().join("home");
        fs::create_dir_all(&home).unwrap();

        let agent_dir = dir.path().join("translator");
        fs::create_dir_all(&agent_dir).unwrap();

        // No ~/.codex/auth.json: the deploy still succeeds and no
        // dangling link is left behind
        setup_codex_isolation(&agent_dir, &home).unwrap();
        assert!(agent_dir.join(".codex").is_dir());
        assert!(agent_dir.join(".codex/auth.json").symlink_metadata().is_err());
    }
}

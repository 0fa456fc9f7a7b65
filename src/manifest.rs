//! The per-scope `manifest.json`: the durable record of deployed agents
//! that the host assistant scans when routing a request.

use crate::agent::SubAgent;
use crate::error::Result;
use crate::invocation::generate_commands;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub const MANIFEST_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Manifest {
    pub version: String,
    pub agents: Vec<AgentEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentEntry {
    pub name: String,
    pub description: String,
    pub commands: AgentCommands,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentCommands {
    pub start: String,
    pub resume: String,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            version: MANIFEST_VERSION.to_string(),
            agents: Vec::new(),
        }
    }
}

impl Manifest {
    /// Read the manifest at `path`, falling back to an empty one.
    ///
    /// A missing file is the normal first-deploy case. Unparsable JSON is
    /// recovered as empty too (with a warning) so a hand-edited manifest
    /// can't brick deploys; any other read error propagates.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&contents) {
            Ok(manifest) => Ok(manifest),
            Err(e) => {
                eprintln!(
                    "⚠ Warning: {} is not valid JSON ({}); starting from an empty manifest",
                    path.display(),
                    e
                );
                Ok(Self::default())
            }
        }
    }

    /// Add the agent, or replace its entry in place if the name is
    /// already present. Entry order is otherwise preserved.
    pub fn upsert(&mut self, agent: &SubAgent, scripts_dir: &Path) {
        let entry = AgentEntry {
            name: agent.name.clone(),
            description: agent.description.clone(),
            commands: generate_commands(&agent.name, agent.vendor, scripts_dir),
        };

        match self.agents.iter_mut().find(|a| a.name == agent.name) {
            Some(existing) => *existing = entry,
            None => self.agents.push(entry),
        }
    }

    /// Remove the named agent. Returns false if it was not present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.agents.len();
        self.agents.retain(|a| a.name != name);
        self.agents.len() != before
    }

    pub fn get(&self, name: &str) -> Option<&AgentEntry> {
        self.agents.iter().find(|a| a.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Persist as pretty-printed JSON, overwriting `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Vendor;
    use std::path::PathBuf;

    fn agent(name: &str, description: &str, vendor: Vendor) -> SubAgent {
        SubAgent {
            name: name.to_string(),
            description: description.to_string(),
            vendor,
            instructions: String::new(),
        }
    }

    fn scripts_dir() -> PathBuf {
        PathBuf::from("/x/.subagents")
    }

    #[test]
    fn test_load_or_create_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = Manifest::load_or_create(&dir.path().join("manifest.json")).unwrap();
        assert_eq!(manifest.version, "1.0");
        assert!(manifest.agents.is_empty());
    }

    #[test]
    fn test_load_or_create_corrupt_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.json");
        std::fs::write(&path, "{not json at all").unwrap();

        let manifest = Manifest::load_or_create(&path).unwrap();
        assert_eq!(manifest, Manifest::default());
    }

    #[test]
    fn test_upsert_appends_new_agent() {
        let mut manifest = Manifest::default();
        manifest.upsert(&agent("translator", "Translates text", Vendor::Codex), &scripts_dir());

        assert_eq!(manifest.agents.len(), 1);
        let entry = &manifest.agents[0];
        assert_eq!(entry.name, "translator");
        assert_eq!(entry.description, "Translates text");
        assert_eq!(
            entry.commands.start,
            "\"/x/.subagents/start.sh\" codex translator \"$TASK\""
        );
        assert_eq!(
            entry.commands.resume,
            "\"/x/.subagents/resume.sh\" codex translator $SESSION_ID \"$ANSWER\""
        );
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut manifest = Manifest::default();
        manifest.upsert(&agent("a", "first", Vendor::Codex), &scripts_dir());
        manifest.upsert(&agent("b", "second", Vendor::Claude), &scripts_dir());
        manifest.upsert(&agent("a", "updated", Vendor::Claude), &scripts_dir());

        let names: Vec<&str> = manifest.agents.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(manifest.agents[0].description, "updated");
        assert!(manifest.agents[0].commands.start.contains(" claude a "));
    }

    #[test]
    fn test_upsert_never_duplicates() {
        let mut manifest = Manifest::default();
        for _ in 0..3 {
            manifest.upsert(&agent("translator", "same", Vendor::Codex), &scripts_dir());
        }
        assert_eq!(manifest.agents.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut manifest = Manifest::default();
        manifest.upsert(&agent("a", "first", Vendor::Codex), &scripts_dir());
        manifest.upsert(&agent("b", "second", Vendor::Claude), &scripts_dir());

        assert!(manifest.remove("a"));
        assert!(!manifest.remove("a"));
        assert_eq!(manifest.agents.len(), 1);
        assert_eq!(manifest.agents[0].name, "b");
        assert!(!manifest.is_empty());

        assert!(manifest.remove("b"));
        assert!(manifest.is_empty());
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.json");

        let mut manifest = Manifest::default();
        manifest.upsert(&agent("translator", "Translates text", Vendor::Codex), &scripts_dir());
        manifest.save(&path).unwrap();

        let reloaded = Manifest::load_or_create(&path).unwrap();
        assert_eq!(reloaded, manifest);

        // Pretty-printed, trailing newline
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("{\n"));
        assert!(raw.ends_with("}\n"));
        assert!(raw.contains("\"version\": \"1.0\""));
    }

    #[test]
    fn test_get() {
        let mut manifest = Manifest::default();
        manifest.upsert(&agent("a", "first", Vendor::Codex), &scripts_dir());
        assert!(manifest.get("a").is_some());
        assert!(manifest.get("b").is_none());
    }
}

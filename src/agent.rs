//! SubAgent definitions: the vendor enum and the TOML definition files
//! a deploy starts from.

use crate::error::{Result, SubagentError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The AI CLI a SubAgent runs on top of.
///
/// Each vendor has its own session model; the generated control scripts
/// branch on this value at run time, and the Rust side only consults the
/// capability methods below. Supporting a new CLI means adding a variant
/// and answering these questions for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vendor {
    /// OpenAI Codex CLI: explicit resumable session ids on stderr
    Codex,
    /// Claude Code: print mode with "continue most recent" semantics only
    Claude,
}

impl Vendor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Vendor::Codex => "codex",
            Vendor::Claude => "claude",
        }
    }

    /// Binary expected on PATH when this vendor's agent actually runs
    pub fn cli_binary(&self) -> &'static str {
        match self {
            Vendor::Codex => "codex",
            Vendor::Claude => "claude",
        }
    }

    /// Whether the CLI exposes a session id the scripts can capture
    pub fn supports_session_ids(&self) -> bool {
        match self {
            Vendor::Codex => true,
            Vendor::Claude => false,
        }
    }

    /// Codex reads ~/.codex/AGENTS.md unless pointed at a private
    /// CODEX_HOME, so its agents get an isolation directory on deploy
    pub fn needs_isolation(&self) -> bool {
        matches!(self, Vendor::Codex)
    }
}

impl std::fmt::Display for Vendor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named delegate agent configuration, ready to deploy.
#[derive(Debug, Clone)]
pub struct SubAgent {
    pub name: String,
    pub description: String,
    pub vendor: Vendor,
    /// Written verbatim to `<agent>/<agent>.md`; opaque to this crate
    pub instructions: String,
}

/// On-disk shape of an agent definition file.
#[derive(Debug, Deserialize)]
struct AgentDefinition {
    name: String,
    description: String,
    vendor: Vendor,

    #[serde(default)]
    instructions: Option<String>,

    /// Alternative to inline instructions, relative to the definition file
    #[serde(default)]
    instructions_file: Option<String>,
}

impl SubAgent {
    /// Load and validate an agent definition from a TOML file.
    pub fn load(definition_path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(definition_path)?;
        let def: AgentDefinition = toml::from_str(&contents)?;

        let instructions = match (def.instructions, def.instructions_file) {
            (Some(_), Some(_)) => {
                return Err(SubagentError::InvalidAgent(
                    "set either 'instructions' or 'instructions_file', not both".to_string(),
                ));
            }
            (Some(text), None) => text,
            (None, Some(file)) => {
                let base = definition_path.parent().unwrap_or(Path::new("."));
                fs::read_to_string(base.join(&file)).map_err(|e| {
                    SubagentError::InvalidAgent(format!(
                        "failed to read instructions_file '{}': {}",
                        file, e
                    ))
                })?
            }
            (None, None) => {
                return Err(SubagentError::InvalidAgent(
                    "missing 'instructions' or 'instructions_file'".to_string(),
                ));
            }
        };

        let agent = Self {
            name: def.name,
            description: def.description,
            vendor: def.vendor,
            instructions,
        };
        agent.validate()?;
        Ok(agent)
    }

    /// Check the fields a deploy relies on.
    ///
    /// The name becomes a directory name, a manifest key, and an
    /// unquoted argument in generated shell commands, so it must stay
    /// within a filename- and shell-safe alphabet.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(SubagentError::InvalidAgent(
                "agent name cannot be empty".to_string(),
            ));
        }

        if !self
            .name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
        {
            return Err(SubagentError::InvalidAgent(format!(
                "agent name '{}' must be lowercase alphanumeric with '-' or '_'",
                self.name
            )));
        }

        if self.description.trim().is_empty() {
            return Err(SubagentError::InvalidAgent(format!(
                "agent '{}' has an empty description; routing matches on it",
                self.name
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_definition(dir: &Path, body: &str) -> std::path::PathBuf {
        let path = dir.join("agent.toml");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_load_inline_instructions() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_definition(
            dir.path(),
            r#"
name = "translator"
description = "Translates documents between languages"
vendor = "codex"
instructions = "You are a translator."
"#,
        );

        let agent = SubAgent::load(&path).unwrap();
        assert_eq!(agent.name, "translator");
        assert_eq!(agent.vendor, Vendor::Codex);
        assert_eq!(agent.instructions, "You are a translator.");
    }

    #[test]
    fn test_load_instructions_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("translator.md"), "# Translator\n").unwrap();
        let path = write_definition(
            dir.path(),
            r#"
name = "translator"
description = "Translates documents"
vendor = "claude"
instructions_file = "translator.md"
"#,
        );

        let agent = SubAgent::load(&path).unwrap();
        assert_eq!(agent.vendor, Vendor::Claude);
        assert_eq!(agent.instructions, "# Translator\n");
    }

    #[test]
    fn test_load_rejects_both_instruction_sources() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_definition(
            dir.path(),
            r#"
name = "translator"
description = "Translates documents"
vendor = "codex"
instructions = "inline"
instructions_file = "translator.md"
"#,
        );

        let err = SubAgent::load(&path).unwrap_err();
        assert!(matches!(err, SubagentError::InvalidAgent(_)));
    }

    #[test]
    fn test_load_rejects_missing_instructions() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_definition(
            dir.path(),
            r#"
name = "translator"
description = "Translates documents"
vendor = "codex"
"#,
        );

        assert!(SubAgent::load(&path).is_err());
    }

    #[test]
    fn test_load_missing_instructions_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_definition(
            dir.path(),
            r#"
name = "translator"
description = "Translates documents"
vendor = "codex"
instructions_file = "does-not-exist.md"
"#,
        );

        let err = SubAgent::load(&path).unwrap_err();
        assert!(matches!(err, SubagentError::InvalidAgent(_)));
    }

    #[test]
    fn test_validate_name_alphabet() {
        let mut agent = SubAgent {
            name: "code-reviewer_2".to_string(),
            description: "Reviews code".to_string(),
            vendor: Vendor::Claude,
            instructions: "x".to_string(),
        };
        assert!(agent.validate().is_ok());

        for bad in ["", "Translator", "my agent", "a/b", "../escape", "agent!"] {
            agent.name = bad.to_string();
            assert!(agent.validate().is_err(), "should reject name: {:?}", bad);
        }
    }

    #[test]
    fn test_validate_requires_description() {
        let agent = SubAgent {
            name: "translator".to_string(),
            description: "   ".to_string(),
            vendor: Vendor::Codex,
            instructions: "x".to_string(),
        };
        assert!(agent.validate().is_err());
    }

    #[test]
    fn test_vendor_serde_lowercase() {
        #[derive(Deserialize)]
        struct V {
            vendor: Vendor,
        }
        let v: V = toml::from_str("vendor = \"codex\"").unwrap();
        assert_eq!(v.vendor, Vendor::Codex);
        let v: V = toml::from_str("vendor = \"claude\"").unwrap();
        assert_eq!(v.vendor, Vendor::Claude);
        assert!(toml::from_str::<V>("vendor = \"gemini\"").is_err());
    }

    #[test]
    fn test_vendor_capabilities() {
        assert!(Vendor::Codex.supports_session_ids());
        assert!(Vendor::Codex.needs_isolation());
        assert!(!Vendor::Claude.supports_session_ids());
        assert!(!Vendor::Claude.needs_isolation());
        assert_eq!(Vendor::Codex.as_str(), "codex");
        assert_eq!(Vendor::Claude.cli_binary(), "claude");
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubagentError {
    #[error("Project detection failed: {0}")]
    ProjectDetection(String),

    #[error("Home directory could not be determined (HOME is not set)")]
    NoHomeDir,

    #[error("Invalid agent definition: {0}")]
    InvalidAgent(String),

    #[error("No agent named '{0}' is deployed in this scope")]
    AgentNotDeployed(String),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Manifest serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Command failed: {0}")]
    CommandFailed(String),
}

pub type Result<T> = std::result::Result<T, SubagentError>;

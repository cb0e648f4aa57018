//! Error handling for the skill-gap analyzer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillGapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Role not found: {0}")]
    RoleNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, SkillGapError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for SkillGapError {
    fn from(err: anyhow::Error) -> Self {
        SkillGapError::Catalog(err.to_string())
    }
}

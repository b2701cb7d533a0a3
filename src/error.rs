use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid profile: {}", .0.join("; "))]
    InvalidProfile(Vec<String>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;

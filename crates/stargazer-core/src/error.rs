use thiserror::Error;

/// Unified error type for the Stargazer module.
#[derive(Error, Debug)]
pub enum StargazerError {
    // ── Host registry errors ───────────────────────────────────
    #[error("registry error: {0}")]
    Registry(String),

    #[error("dispatch registration failed: {trigger}: {reason}")]
    Dispatch { trigger: String, reason: String },

    // ── Collaborator errors ────────────────────────────────────
    #[error("render error: {0}")]
    Render(String),

    #[error("reply error: {0}")]
    Reply(String),

    // ── Config errors ──────────────────────────────────────────
    #[error("config error: {0}")]
    Config(String),

    #[error("config validation failed: {field}: {reason}")]
    ConfigValidation { field: String, reason: String },

    // ── Generic wrappers ───────────────────────────────────────
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, StargazerError>;

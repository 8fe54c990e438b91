use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Malformed metadata payload: {0}")]
    MetadataPayload(String),

    #[error("Transform recursion limit exceeded at depth {0}")]
    TransformDepthExceeded(usize),

    #[error("Stream decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Environment variable error: {0}")]
    EnvVarError(#[from] std::env::VarError),
}

pub type Result<T> = std::result::Result<T, SdkError>;

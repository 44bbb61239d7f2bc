use thiserror::Error;

/// Errors a task handler can report through the dispatch boundary.
///
/// Variant messages are user-facing; raw OS error detail is logged at the
/// handler and never carried here verbatim.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Timed out after {0} seconds")]
    Timeout(u64),

    #[error("Operation failed: {0}")]
    ExternalFailure(String),
}

#[derive(Error, Debug)]
pub enum AideError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, AideError>;

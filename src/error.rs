use thiserror::Error;

/// Errors raised by the crate's own fallible operations.
///
/// The async helpers never produce this type: they hand back whatever
/// error the caller's callback produced.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

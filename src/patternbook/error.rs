use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Unknown pattern: {0}")]
    UnknownPattern(String),

    #[error("Unrecognized category: {0}")]
    UnrecognizedCategory(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

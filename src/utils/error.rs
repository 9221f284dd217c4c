use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Repository error: {message}")]
    RepositoryError { message: String },

    #[error("Unknown principle: {name}")]
    UnknownPrincipleError { name: String },
}

pub type Result<T> = std::result::Result<T, DemoError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("configuration error: {0}")]
    ConfigError(String),
    #[error("validation error: {0}")]
    ValidationError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    ParseError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, SlotError>;

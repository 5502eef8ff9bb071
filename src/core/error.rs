use thiserror::Error;

#[derive(Error, Debug)]
pub enum VoicepayError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Contact file error: {0}")]
    ContactFile(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VoicepayError>;

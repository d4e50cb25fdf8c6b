use thiserror::Error;

#[derive(Debug, Error)]
pub enum HelmetError {
    #[error("Invalid value for header {header}: {value:?}")]
    InvalidHeaderValue { header: &'static str, value: String },

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

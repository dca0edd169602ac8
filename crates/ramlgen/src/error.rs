use thiserror::Error;

/// Result type for RAML generation operations
pub type RamlResult<T> = Result<T, RamlError>;

/// Errors that can occur during RAML generation
#[derive(Debug, Error)]
pub enum RamlError {
    /// A required argument was missing or empty
    #[error("Invalid argument `{0}`: {1}")]
    InvalidArgument(String, String),

    /// JSON serialization error (schema bodies)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error (wire format)
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// I/O error (file export)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RamlError {
    /// Create a new invalid-argument error naming the offending argument
    pub fn invalid_argument<T: ToString>(name: &str, msg: T) -> Self {
        Self::InvalidArgument(name.to_string(), msg.to_string())
    }
}

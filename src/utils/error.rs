use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Unexpected response body: {message}")]
    ResponseShapeError { message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl VerifyError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            VerifyError::ApiError(e) if e.is_connect() => {
                "Could not connect to the admin API".to_string()
            }
            VerifyError::ApiError(e) if e.is_timeout() => "The admin API timed out".to_string(),
            VerifyError::ApiError(_) => "The admin API request failed".to_string(),
            VerifyError::IoError(e) => format!("File access failed: {}", e),
            VerifyError::SerializationError(_) => {
                "The admin API returned a body that is not valid JSON".to_string()
            }
            VerifyError::ResponseShapeError { message } => {
                format!("The admin API reply had an unexpected shape: {}", message)
            }
            VerifyError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            VerifyError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            VerifyError::ApiError(_) => {
                "Check that the backend is running and reachable at the configured base URL"
            }
            VerifyError::IoError(_) => "Check that the config file exists and is readable",
            VerifyError::SerializationError(_) => {
                "Inspect the printed response body; the endpoint may not be the admin API"
            }
            VerifyError::ResponseShapeError { .. } => {
                "Compare the printed response body with the expected {\"message\": ...} shape"
            }
            VerifyError::ConfigValidationError { .. } => {
                "Fix the TOML profile file or remove --config to use the built-in profiles"
            }
            VerifyError::InvalidConfigValueError { .. } => {
                "Correct the command line value and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, VerifyError>;

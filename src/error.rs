//! Error types for the SolarZ client

use std::fmt;

use thiserror::Error;

/// Result type alias for SolarZ operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the library and CLI
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl Error {
    /// Failure category for API errors, `None` for local errors.
    pub fn category(&self) -> Option<ErrorCategory> {
        match self {
            Error::Api(err) => Some(err.category()),
            _ => None,
        }
    }
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Broad classification of API failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad credentials, or a missing/rejected session token
    Authentication,
    /// The request never got an HTTP answer (DNS, connect, TLS, timeout)
    Transport,
    /// The vendor answered with an error status or an unusable body
    Vendor,
    /// The caller passed bad arguments or skipped a prerequisite call
    Input,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCategory::Authentication => "authentication",
            ErrorCategory::Transport => "transport",
            ErrorCategory::Vendor => "vendor",
            ErrorCategory::Input => "input",
        };
        f.write_str(name)
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not authenticated. Log in before calling the SolarZ API.")]
    NotAuthenticated,

    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    #[error("Access denied. The session is not allowed to access this resource.")]
    Forbidden,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No plant loaded. Fetch the client context first.")]
    PlantNotLoaded,
}

impl ApiError {
    /// Classify this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ApiError::NotAuthenticated | ApiError::Unauthorized(_) | ApiError::Forbidden => {
                ErrorCategory::Authentication
            }
            ApiError::Network(_) => ErrorCategory::Transport,
            ApiError::NotFound(_)
            | ApiError::BadRequest(_)
            | ApiError::ServerError(_)
            | ApiError::InvalidResponse(_) => ErrorCategory::Vendor,
            ApiError::InvalidInput(_) | ApiError::PlantNotLoaded => ErrorCategory::Input,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `solarz init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Credentials not configured. Run `solarz init` to set up your login.")]
    MissingCredentials,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

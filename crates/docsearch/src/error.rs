use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocsearchError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Controller error: {0}")]
    Controller(#[from] ControllerError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("Config validation failed: {message}")]
    Validation { message: String },
}

/// Errors raised while talking to the remote document/search service.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server returned {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Status { status: u16, message: Option<String> },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Failed to read upload file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ApiError {
    /// The `error` message the server put in its response body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum ControllerError {
    #[error("Not connected to the document service")]
    Disconnected,

    #[error("Upload failed: {0}")]
    Upload(#[source] ApiError),
}

pub type Result<T> = std::result::Result<T, DocsearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display_with_message() {
        let err = ApiError::Status {
            status: 400,
            message: Some("File type .exe is not supported".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Server returned 400: File type .exe is not supported"
        );
        assert_eq!(err.server_message(), Some("File type .exe is not supported"));
    }

    #[test]
    fn test_status_error_display_without_message() {
        let err = ApiError::Status {
            status: 502,
            message: None,
        };
        assert_eq!(err.to_string(), "Server returned 502: no details");
        assert!(err.server_message().is_none());
    }

    #[test]
    fn test_upload_error_wraps_into_umbrella() {
        let err: DocsearchError = ControllerError::Upload(ApiError::Status {
            status: 500,
            message: None,
        })
        .into();
        assert!(matches!(err, DocsearchError::Controller(_)));
    }
}

use std::time::Duration;
use thiserror::Error;

/// Failure of a single dispatch attempt. Nothing here is retried.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Timeout after {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    // Raised before any I/O happens
    #[error("Invalid endpoint '{0}': expected an http or https URL")]
    InvalidEndpoint(String),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("Failed to serialize payload")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),
}

impl DispatchError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, DispatchError::Timeout(_))
    }

    /// Status code for failures that got as far as a response
    pub fn status(&self) -> Option<u16> {
        match self {
            DispatchError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error("Invalid configuration: {message}")]
    Config { message: String },

    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    #[error("Failed to write output")]
    Output(#[from] std::io::Error),

    #[error("Failed to render JSON")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProbeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_message_carries_code_and_body() {
        let err = DispatchError::HttpStatus {
            status: 500,
            body: "server error".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500: server error");
        assert_eq!(err.status(), Some(500));
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_timeout_message() {
        let err = DispatchError::Timeout(Duration::from_secs(10));
        assert!(err.to_string().starts_with("Timeout"));
        assert!(err.is_timeout());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_probe_error_is_transparent_for_dispatch() {
        let err: ProbeError = DispatchError::InvalidEndpoint("ftp://x".into()).into();
        assert_eq!(
            err.to_string(),
            "Invalid endpoint 'ftp://x': expected an http or https URL"
        );
    }
}

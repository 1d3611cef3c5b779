use crate::constants::{
    CLIENT_VERSION_HEADER, DEFAULT_CLIENT_VERSION, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT,
};
use std::time::Duration;

/// Where and how events are posted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchConfig {
    pub endpoint: String,

    /// Deadline covering connect, send and the full response body
    pub timeout: Duration,

    pub version_header: String,
    pub client_version: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            version_header: CLIENT_VERSION_HEADER.to_string(),
            client_version: DEFAULT_CLIENT_VERSION.to_string(),
        }
    }
}

impl DispatchConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_client_version(mut self, version: impl Into<String>) -> Self {
        self.client_version = version.into();
        self
    }
}

//! Single-shot POST of a usage event to the hook endpoint.

pub mod config;

pub use config::DispatchConfig;

use crate::error::DispatchError;
use crate::types::UsageEvent;
use async_trait::async_trait;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE, HeaderName, HeaderValue};
use reqwest::{Client, Url};
use serde::Serialize;
use serde_json::{Value, json};
use std::fmt;
use tracing::{debug, info, warn};

/// Lifecycle of one request. `Succeeded` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    Sent,
    Succeeded,
    Failed,
}

impl RequestState {
    pub fn of<T>(result: &Result<T, DispatchError>) -> Self {
        match result {
            Ok(_) => RequestState::Succeeded,
            Err(_) => RequestState::Failed,
        }
    }
}

impl fmt::Display for RequestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RequestState::Idle => "idle",
            RequestState::Sent => "sent",
            RequestState::Succeeded => "succeeded",
            RequestState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Body of a 2xx response
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Json(Value),
    /// Body that did not parse as JSON
    Raw(String),
}

impl Reply {
    fn from_body(body: String) -> Self {
        match serde_json::from_str(&body) {
            Ok(value) => Reply::Json(value),
            Err(_) => Reply::Raw(body),
        }
    }

    /// JSON view of the reply; raw bodies become `{"success": true, "raw": body}`
    pub fn into_value(self) -> Value {
        match self {
            Reply::Json(value) => value,
            Reply::Raw(raw) => json!({ "success": true, "raw": raw }),
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Json(value) => write!(f, "{}", value),
            Reply::Raw(raw) => write!(f, "{}", json!({ "success": true, "raw": raw })),
        }
    }
}

/// Seam between the run loop and the network
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Dispatch: Send + Sync {
    async fn dispatch(&self, event: &UsageEvent) -> Result<Reply, DispatchError>;
}

#[derive(Debug, Clone)]
pub struct Dispatcher {
    client: Client,
    endpoint: Url,
    version_header: HeaderName,
    client_version: HeaderValue,
    config: DispatchConfig,
}

impl Dispatcher {
    pub fn new(config: DispatchConfig) -> Result<Self, DispatchError> {
        let endpoint = parse_endpoint(&config.endpoint)?;
        let version_header = HeaderName::from_bytes(config.version_header.as_bytes())
            .map_err(|_| DispatchError::InvalidHeader(config.version_header.clone()))?;
        let client_version = HeaderValue::from_str(&config.client_version)
            .map_err(|_| DispatchError::InvalidHeader(config.client_version.clone()))?;
        let client = Client::builder()
            .build()
            .map_err(DispatchError::ClientBuild)?;

        debug!(
            "Creating Dispatcher for {} with timeout: {}ms",
            endpoint,
            config.timeout.as_millis()
        );

        Ok(Self {
            client,
            endpoint,
            version_header,
            client_version,
            config,
        })
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// POST `payload` as JSON. Exactly one attempt; the timeout drops the in-flight request.
    pub async fn send<T: Serialize + ?Sized>(&self, payload: &T) -> Result<Reply, DispatchError> {
        let body = serde_json::to_vec(payload)?;
        let content_length = body.len();

        let request = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(CONTENT_LENGTH, content_length)
            .header(self.version_header.clone(), self.client_version.clone())
            .body(body);

        info!(
            endpoint = %self.endpoint,
            bytes = content_length,
            state = %RequestState::Sent,
            "Posting usage event"
        );

        let exchange = async {
            let response = request.send().await?;
            let status = response.status();
            let headers = response.headers().clone();
            let text = response.text().await?;
            Ok::<_, reqwest::Error>((status, headers, text))
        };

        let (status, headers, text) = match tokio::time::timeout(self.config.timeout, exchange).await
        {
            Ok(Ok(parts)) => parts,
            Ok(Err(e)) if e.is_timeout() => return Err(self.timed_out()),
            Ok(Err(e)) => {
                warn!(state = %RequestState::Failed, "Transport error: {}", e);
                return Err(DispatchError::Transport(e));
            }
            Err(_) => return Err(self.timed_out()),
        };

        info!(status = status.as_u16(), "Status: {}", status);
        info!("Headers: {:?}", headers);
        info!("Response: {}", text);

        let result = classify(status.as_u16(), text);
        debug!(state = %RequestState::of(&result), "Request finished");
        result
    }

    fn timed_out(&self) -> DispatchError {
        warn!(
            state = %RequestState::Failed,
            "Request aborted after {}ms",
            self.config.timeout.as_millis()
        );
        DispatchError::Timeout(self.config.timeout)
    }
}

#[async_trait]
impl Dispatch for Dispatcher {
    async fn dispatch(&self, event: &UsageEvent) -> Result<Reply, DispatchError> {
        self.send(event).await
    }
}

/// One-off send with the default configuration pointed at `endpoint`
pub async fn send<T: Serialize + ?Sized>(
    endpoint: &str,
    payload: &T,
) -> Result<Reply, DispatchError> {
    Dispatcher::new(DispatchConfig::default().with_endpoint(endpoint))?
        .send(payload)
        .await
}

/// Maps a completed exchange onto success or failure
pub fn classify(status: u16, body: String) -> Result<Reply, DispatchError> {
    if (200..300).contains(&status) {
        Ok(Reply::from_body(body))
    } else {
        Err(DispatchError::HttpStatus { status, body })
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url, DispatchError> {
    let url =
        Url::parse(endpoint).map_err(|_| DispatchError::InvalidEndpoint(endpoint.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(DispatchError::InvalidEndpoint(endpoint.to_string())),
    }
}

use super::ids::{InteractionHash, InteractionId};
use crate::constants::{DEFAULT_HANDLE, DEFAULT_USER_ID};
use serde::{Deserialize, Serialize};

/// Synthetic actor the event is attributed to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(rename = "twitter_handle")]
    pub handle: String,
    #[serde(rename = "twitter_user_id")]
    pub user_id: String,
}

impl Identity {
    pub fn new(handle: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            user_id: user_id.into(),
        }
    }

    /// Identity for a bare username; the `@` prefix is added when missing
    pub fn from_username(username: &str) -> Self {
        let handle = if username.starts_with('@') {
            username.to_string()
        } else {
            format!("@{}", username)
        };
        Self::new(handle, DEFAULT_USER_ID)
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::new(DEFAULT_HANDLE, DEFAULT_USER_ID)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenCounts {
    pub input: u32,
    pub output: u32,
    pub cache_creation: u32,
    pub cache_read: u32,
}

impl TokenCounts {
    pub fn total(&self) -> u64 {
        self.input as u64 + self.output as u64 + self.cache_creation as u64 + self.cache_read as u64
    }
}

/// Wire payload for the usage hook. Built once per request and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageEvent {
    #[serde(flatten)]
    pub identity: Identity,
    pub timestamp: String,
    pub tokens: TokenCounts,
    pub model: String,
    pub interaction_id: InteractionId,
    pub interaction_hash: InteractionHash,
}

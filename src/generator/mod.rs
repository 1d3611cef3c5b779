//! Synthetic usage-event generation.

pub mod ranges;
pub mod template;

pub use ranges::{ScaleProfile, TokenRange, profile};
pub use template::UsageTemplate;

use crate::constants::DEFAULT_MODEL;
use crate::types::{
    Identity, InteractionHash, InteractionId, MessageId, RequestId, Scale, UsageEvent,
};
use chrono::{SecondsFormat, Utc};
use rand::Rng;

/// Which inputs feed the interaction hash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashStrategy {
    /// `sha256(timestamp ++ message_id ++ request_id)`; the hash doubles as the id
    #[default]
    MessageRequest,
    /// `sha256(timestamp ++ interaction_id ++ random_float)` with an independent `int_` id
    InteractionNonce,
}

impl HashStrategy {
    /// Draws fresh inputs and returns the `(interaction_id, interaction_hash)` pair
    pub fn stamp<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        timestamp: &str,
    ) -> (InteractionId, InteractionHash) {
        match self {
            HashStrategy::MessageRequest => {
                let message_id = MessageId::random(rng);
                let request_id = RequestId::random(rng);
                let hash = message_request_hash(timestamp, &message_id, &request_id);
                (hash.as_interaction_id(), hash)
            }
            HashStrategy::InteractionNonce => {
                let interaction_id = InteractionId::random(rng);
                let nonce: f64 = rng.random();
                let hash = interaction_nonce_hash(timestamp, &interaction_id, nonce);
                (interaction_id, hash)
            }
        }
    }
}

pub fn message_request_hash(
    timestamp: &str,
    message_id: &MessageId,
    request_id: &RequestId,
) -> InteractionHash {
    InteractionHash::digest(&[timestamp, message_id.as_str(), request_id.as_str()])
}

pub fn interaction_nonce_hash(
    timestamp: &str,
    interaction_id: &InteractionId,
    nonce: f64,
) -> InteractionHash {
    InteractionHash::digest(&[timestamp, interaction_id.as_str(), nonce.to_string().as_str()])
}

/// Current instant as ISO-8601 with millisecond precision, e.g. `2025-08-05T10:00:00.123Z`
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Standalone event for `identity` at `scale`, hashed from message and request ids
pub fn generate(identity: &Identity, scale: Scale) -> UsageEvent {
    generate_with(
        &mut rand::rng(),
        identity,
        scale,
        HashStrategy::MessageRequest,
        now_timestamp(),
    )
}

pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    identity: &Identity,
    scale: Scale,
    strategy: HashStrategy,
    timestamp: String,
) -> UsageEvent {
    let (interaction_id, interaction_hash) = strategy.stamp(rng, &timestamp);
    UsageEvent {
        identity: identity.clone(),
        tokens: profile(scale).sample(rng),
        timestamp,
        model: DEFAULT_MODEL.to_string(),
        interaction_id,
        interaction_hash,
    }
}

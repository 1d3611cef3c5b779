pub mod event;
pub mod ids;
pub mod scale;

pub use event::{Identity, TokenCounts, UsageEvent};
pub use ids::{InteractionHash, InteractionId, MessageId, RequestId};
pub use scale::Scale;

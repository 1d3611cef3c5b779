// Module declarations
pub mod cli;
pub mod constants;
pub mod dispatch;
pub mod error;
pub mod formatting;
pub mod generator;
pub mod logging;
pub mod runner;
pub mod types;

pub use dispatch::{Dispatch, DispatchConfig, Dispatcher, Reply, RequestState, send};
pub use error::{DispatchError, ProbeError, Result};
pub use generator::{HashStrategy, UsageTemplate, generate};
pub use types::{
    Identity, InteractionHash, InteractionId, MessageId, RequestId, Scale, TokenCounts, UsageEvent,
};

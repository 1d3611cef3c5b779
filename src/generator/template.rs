use super::{HashStrategy, now_timestamp};
use crate::types::{Identity, TokenCounts, UsageEvent};
use rand::Rng;

/// Fixed base payload re-stamped with a fresh timestamp and interaction pair per send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageTemplate {
    pub identity: Identity,
    pub tokens: TokenCounts,
    pub model: String,
}

impl Default for UsageTemplate {
    fn default() -> Self {
        Self {
            identity: Identity::new("@AwesomeCC_", "5432109882"),
            tokens: TokenCounts {
                input: 98_980,
                output: 30_990,
                cache_creation: 238_991,
                cache_read: 298_991,
            },
            model: "claude-sonnet-4-20250514".to_string(),
        }
    }
}

impl UsageTemplate {
    pub fn with_identity(mut self, identity: Identity) -> Self {
        self.identity = identity;
        self
    }

    pub fn stamp(&self) -> UsageEvent {
        self.stamp_with(&mut rand::rng(), now_timestamp())
    }

    pub fn stamp_with<R: Rng + ?Sized>(&self, rng: &mut R, timestamp: String) -> UsageEvent {
        let (interaction_id, interaction_hash) =
            HashStrategy::InteractionNonce.stamp(rng, &timestamp);
        UsageEvent {
            identity: self.identity.clone(),
            timestamp,
            tokens: self.tokens,
            model: self.model.clone(),
            interaction_id,
            interaction_hash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_stamp_keeps_base_fields() {
        let template = UsageTemplate::default();
        let event = template.stamp();
        assert_eq!(event.identity.handle, "@AwesomeCC_");
        assert_eq!(event.tokens, template.tokens);
        assert_eq!(event.model, "claude-sonnet-4-20250514");
        assert!(event.interaction_id.as_str().starts_with("int_"));
        assert_eq!(event.interaction_hash.as_str().len(), 64);
    }

    #[test]
    fn test_each_stamp_gets_new_interaction() {
        let template = UsageTemplate::default();
        let mut rng = StdRng::seed_from_u64(2);
        let ts = "2025-08-05T10:00:00.000Z";
        let a = template.stamp_with(&mut rng, ts.to_string());
        let b = template.stamp_with(&mut rng, ts.to_string());
        assert_ne!(a.interaction_id, b.interaction_id);
        assert_ne!(a.interaction_hash, b.interaction_hash);
    }

    #[test]
    fn test_identity_override() {
        let template = UsageTemplate::default().with_identity(Identity::from_username("probe"));
        assert_eq!(template.stamp().identity.handle, "@probe");
    }
}

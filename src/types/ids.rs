use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of the random suffix on message and request ids
const SHORT_TOKEN_LEN: usize = 9;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id! {
    /// Synthetic message id, `msg_` plus a short base36 token
    MessageId
}

string_id! {
    /// Synthetic request id, `req_` plus a short base36 token
    RequestId
}

string_id! {
    /// Interaction id used by template-stamped events, `int_` plus 32 hex chars
    InteractionId
}

string_id! {
    /// Lowercase hex SHA-256 digest used by the receiver as a dedup key
    InteractionHash
}

impl MessageId {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(format!("msg_{}", base36_token(rng, SHORT_TOKEN_LEN)))
    }
}

impl RequestId {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(format!("req_{}", base36_token(rng, SHORT_TOKEN_LEN)))
    }
}

impl InteractionId {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let bytes: [u8; 16] = rng.random();
        Self(format!("int_{}", hex::encode(bytes)))
    }
}

impl InteractionHash {
    /// Digest of the parts concatenated in order, with no separator
    pub fn digest(parts: &[&str]) -> Self {
        let mut hasher = Sha256::new();
        for part in parts {
            hasher.update(part.as_bytes());
        }
        Self(hex::encode(hasher.finalize()))
    }

    /// The wire format reuses the hash as the interaction id
    pub fn as_interaction_id(&self) -> InteractionId {
        InteractionId(self.0.clone())
    }
}

fn base36_token<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn is_lower_hex(s: &str) -> bool {
        s.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    }

    #[test]
    fn test_short_ids_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let msg = MessageId::random(&mut rng);
            let req = RequestId::random(&mut rng);
            assert!(msg.as_str().starts_with("msg_"));
            assert!(req.as_str().starts_with("req_"));
            assert_eq!(msg.as_str().len(), 4 + SHORT_TOKEN_LEN);
            assert_eq!(req.as_str().len(), 4 + SHORT_TOKEN_LEN);
            assert!(
                msg.as_str()[4..]
                    .bytes()
                    .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase())
            );
        }
    }

    #[test]
    fn test_interaction_id_shape() {
        let mut rng = StdRng::seed_from_u64(11);
        let id = InteractionId::random(&mut rng);
        let suffix = id.as_str().strip_prefix("int_").unwrap();
        assert_eq!(suffix.len(), 32);
        assert!(is_lower_hex(suffix));
    }

    #[test]
    fn test_digest_known_value() {
        // sha256("abc")
        let hash = InteractionHash::digest(&["a", "b", "c"]);
        assert_eq!(
            hash.as_str(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_digest_shape_and_determinism() {
        let a = InteractionHash::digest(&["2025-01-01T00:00:00.000Z", "msg_1", "req_1"]);
        let b = InteractionHash::digest(&["2025-01-01T00:00:00.000Z", "msg_1", "req_1"]);
        assert_eq!(a, b);
        assert_eq!(a.as_str().len(), 64);
        assert!(is_lower_hex(a.as_str()));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = MessageId::from("msg_abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"msg_abc\"");
        assert_eq!(id.to_string(), "msg_abc");
    }
}

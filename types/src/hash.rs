//! Block hash type for the vote ledger.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A hex-encoded SHA-256 block digest.
///
/// Stored and transmitted as a string because the genesis block's
/// `previous_hash` is the sentinel `"0"`, which is not a valid digest.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockHash(String);

impl BlockHash {
    /// The `previous_hash` sentinel carried by the genesis block.
    pub const GENESIS_PREVIOUS: &'static str = "0";

    pub fn new(hex: String) -> Self {
        Self(hex)
    }

    /// The sentinel predecessor hash of the genesis block.
    pub fn genesis_previous() -> Self {
        Self(Self::GENESIS_PREVIOUS.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_genesis_previous(&self) -> bool {
        self.0 == Self::GENESIS_PREVIOUS
    }
}

impl fmt::Debug for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix: String = self.0.chars().take(8).collect();
        write!(f, "BlockHash({prefix}\u{2026})")
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genesis_previous_sentinel() {
        let h = BlockHash::genesis_previous();
        assert!(h.is_genesis_previous());
        assert_eq!(h.as_str(), "0");
    }

    #[test]
    fn serializes_as_bare_string() {
        let h = BlockHash::new("abc123".to_string());
        assert_eq!(serde_json::to_string(&h).unwrap(), "\"abc123\"");
        let back: BlockHash = serde_json::from_str("\"abc123\"").unwrap();
        assert_eq!(back, h);
    }
}

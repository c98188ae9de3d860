//! Blocks — immutable-after-seal batches of votes.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use urna_types::{format_timestamp, ledger_now, BlockHash, Vote};
use urna_work::Difficulty;

use crate::canonical;

/// A block in the vote ledger.
///
/// `hash` covers every other field; any post-seal mutation is detectable by
/// [`crate::Chain::is_valid`]. Serialized field order matches the persisted
/// block layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Zero-based position in the chain, genesis = 0.
    pub index: u64,
    /// Construction instant on the ledger clock. Mining does not change it.
    pub timestamp: String,
    /// The sealed batch, empty only for genesis.
    pub votes: Vec<Vote>,
    /// Hash of the predecessor, `"0"` for genesis.
    pub previous_hash: BlockHash,
    /// Proof-of-work counter, incremented during mining.
    pub nonce: u64,
    /// SHA-256 over the canonical encoding of the other five fields.
    pub hash: BlockHash,
}

impl Block {
    /// Construct an unsealed block: timestamp now, nonce 0, hash computed.
    /// Always succeeds.
    pub fn new(index: u64, votes: Vec<Vote>, previous_hash: BlockHash) -> Self {
        Self::at(index, votes, previous_hash, ledger_now())
    }

    /// Construct at a fixed instant. Deterministic, for tests and replay
    /// tooling.
    pub fn at(
        index: u64,
        votes: Vec<Vote>,
        previous_hash: BlockHash,
        instant: DateTime<FixedOffset>,
    ) -> Self {
        let mut block = Self {
            index,
            timestamp: format_timestamp(&instant),
            votes,
            previous_hash,
            nonce: 0,
            hash: BlockHash::new(String::new()),
        };
        block.hash = block.calculate_hash();
        block
    }

    /// Digest the canonical encoding of the current field values. Pure.
    pub fn calculate_hash(&self) -> BlockHash {
        digest_preimage(&canonical::block_preimage(self))
    }

    /// Seal: search nonces from 0 until the digest meets the difficulty
    /// target, then store the winning nonce and hash.
    pub fn mine(&mut self, difficulty: Difficulty) {
        let work = urna_work::mine(difficulty, |nonce| {
            digest_preimage(&canonical::block_preimage_with_nonce(self, nonce))
        });
        self.nonce = work.nonce;
        self.hash = work.hash;
    }

    pub fn is_genesis(&self) -> bool {
        self.index == 0
    }
}

fn digest_preimage(preimage: &str) -> BlockHash {
    BlockHash::new(hex::encode(Sha256::digest(preimage.as_bytes())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use urna_types::ElectionId;
    use urna_work::meets_target;

    fn sample_votes() -> Vec<Vote> {
        vec![
            Vote::new(ElectionId::new(7), "A"),
            Vote::new(ElectionId::new(7), "B"),
        ]
    }

    #[test]
    fn hash_is_deterministic() {
        let block = Block::new(1, sample_votes(), BlockHash::genesis_previous());
        assert_eq!(block.calculate_hash(), block.calculate_hash());
        assert_eq!(block.hash, block.calculate_hash());
    }

    #[test]
    fn hash_changes_with_contents() {
        let mut block = Block::new(1, sample_votes(), BlockHash::genesis_previous());
        let original = block.hash.clone();
        block.nonce += 1;
        assert_ne!(block.calculate_hash(), original);
    }

    #[test]
    fn mining_meets_the_target_and_keeps_the_timestamp() {
        let mut block = Block::new(1, sample_votes(), BlockHash::genesis_previous());
        let timestamp = block.timestamp.clone();
        block.mine(Difficulty::new(2));
        assert!(meets_target(&block.hash, Difficulty::new(2)));
        assert_eq!(block.hash, block.calculate_hash());
        assert_eq!(block.timestamp, timestamp);
    }

    #[test]
    fn serialized_field_names_match_persisted_layout() {
        let block = Block::new(0, Vec::new(), BlockHash::genesis_previous());
        let json = serde_json::to_value(&block).unwrap();
        for key in ["index", "timestamp", "votes", "previous_hash", "nonce", "hash"] {
            assert!(json.get(key).is_some(), "missing field {key}");
        }
        assert_eq!(json["previous_hash"], "0");
        assert_eq!(json["nonce"], 0);
    }
}

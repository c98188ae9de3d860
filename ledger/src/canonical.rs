//! Canonical hash encoding for blocks.
//!
//! The digest pre-image is a compact JSON object with keys in sorted order.
//! Derived serde output follows struct declaration order and may change when
//! fields move, so the pre-image is written out explicitly, key by key —
//! identical field values must always re-encode to identical bytes, both for
//! validation and for mining's incremental recompute to converge.

use urna_types::Vote;

use crate::block::Block;

/// Render the hash pre-image of a block: the canonical encoding of
/// (index, timestamp, votes, previous_hash, nonce). `hash` itself is
/// excluded.
pub fn block_preimage(block: &Block) -> String {
    block_preimage_with_nonce(block, block.nonce)
}

/// Same pre-image with a candidate nonce substituted, so mining can probe
/// successive nonces without mutating the block per attempt.
pub fn block_preimage_with_nonce(block: &Block, nonce: u64) -> String {
    let mut out = String::with_capacity(128 + block.votes.len() * 160);
    out.push('{');
    write_key(&mut out, "index");
    out.push_str(&block.index.to_string());
    out.push(',');
    write_key(&mut out, "nonce");
    out.push_str(&nonce.to_string());
    out.push(',');
    write_key(&mut out, "previous_hash");
    write_str(&mut out, block.previous_hash.as_str());
    out.push(',');
    write_key(&mut out, "timestamp");
    write_str(&mut out, &block.timestamp);
    out.push(',');
    write_key(&mut out, "votes");
    out.push('[');
    for (i, vote) in block.votes.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_vote(&mut out, vote);
    }
    out.push_str("]}");
    out
}

fn write_vote(out: &mut String, vote: &Vote) {
    out.push('{');
    write_key(out, "election_id");
    out.push_str(&vote.election_id.as_i64().to_string());
    out.push(',');
    write_key(out, "option");
    write_str(out, &vote.option);
    out.push(',');
    write_key(out, "timestamp");
    write_str(out, &vote.timestamp);
    out.push(',');
    write_key(out, "vote_id");
    write_str(out, &vote.vote_id);
    out.push('}');
}

fn write_key(out: &mut String, key: &str) {
    out.push('"');
    out.push_str(key);
    out.push_str("\":");
}

fn write_str(out: &mut String, value: &str) {
    // serde_json's escaper keeps the pre-image a valid JSON document.
    out.push_str(&serde_json::to_string(value).expect("string escaping is infallible"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;
    use urna_types::{ledger_offset, BlockHash, ElectionId};

    fn sample_block() -> Block {
        let instant = ledger_offset()
            .with_ymd_and_hms(2025, 6, 1, 9, 0, 0)
            .unwrap();
        let votes = vec![
            Vote::at(ElectionId::new(1), "Sí", instant),
            Vote::at(ElectionId::new(1), "No", instant),
        ];
        Block::at(3, votes, BlockHash::new("ab".repeat(32)), instant)
    }

    #[test]
    fn preimage_is_byte_stable() {
        let block = sample_block();
        assert_eq!(block_preimage(&block), block_preimage(&block));
    }

    #[test]
    fn preimage_is_valid_json_with_sorted_keys() {
        let block = sample_block();
        let raw = block_preimage(&block);
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        let expected = json!({
            "index": 3,
            "nonce": 0,
            "previous_hash": "ab".repeat(32),
            "timestamp": &block.timestamp,
            "votes": &block.votes,
        });
        assert_eq!(value, expected);

        // Keys must appear in sorted order in the raw text, not just parse
        // equal.
        let positions: Vec<usize> = ["\"index\"", "\"nonce\"", "\"previous_hash\"", "\"timestamp\"", "\"votes\""]
            .iter()
            .map(|key| raw.find(key).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn nonce_substitution_changes_only_the_nonce() {
        let block = sample_block();
        let a = block_preimage_with_nonce(&block, 0);
        let b = block_preimage_with_nonce(&block, 42);
        assert_ne!(a, b);
        assert_eq!(a.replace("\"nonce\":0", "\"nonce\":42"), b);
    }

    #[test]
    fn option_strings_are_escaped() {
        let instant = ledger_offset()
            .with_ymd_and_hms(2025, 6, 1, 9, 0, 0)
            .unwrap();
        let votes = vec![Vote::at(ElectionId::new(1), "say \"yes\"", instant)];
        let block = Block::at(1, votes, BlockHash::genesis_previous(), instant);
        let value: serde_json::Value = serde_json::from_str(&block_preimage(&block)).unwrap();
        assert_eq!(value["votes"][0]["option"], "say \"yes\"");
    }
}

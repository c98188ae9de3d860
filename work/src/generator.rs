//! PoW generation.
//!
//! Mining is sequential and deterministic: starting from nonce 0, recompute
//! the block digest for each successive nonce until it meets the target.
//! The expected cost is 16^difficulty attempts with no fixed upper bound,
//! and the loop is not cancellable — the calling thread blocks until it
//! converges.

use urna_types::BlockHash;

use crate::difficulty::Difficulty;
use crate::validator::meets_target;

/// The result of a mining run.
#[derive(Clone, Debug)]
pub struct MinedWork {
    pub nonce: u64,
    pub hash: BlockHash,
}

/// Find the smallest nonce whose digest meets the difficulty target.
///
/// `recompute` must be a pure function of the nonce (re-encode the block
/// with the candidate nonce and digest it); mining converges only when
/// identical field values always re-encode to identical bytes.
pub fn mine<F>(difficulty: Difficulty, mut recompute: F) -> MinedWork
where
    F: FnMut(u64) -> BlockHash,
{
    let mut nonce = 0u64;
    let mut hash = recompute(nonce);
    while !meets_target(&hash, difficulty) {
        nonce += 1;
        hash = recompute(nonce);
    }
    MinedWork { nonce, hash }
}

//! Genesis block creation — the first block of every ledger.

use urna_types::BlockHash;
use urna_work::Difficulty;

use crate::block::Block;

/// Mine the genesis block: index 0, no votes, predecessor `"0"`.
///
/// Every fresh ledger starts here; a restored ledger keeps the genesis it
/// was persisted with, even if that was mined at a different difficulty.
pub fn create_genesis_block(difficulty: Difficulty) -> Block {
    let mut block = Block::new(0, Vec::new(), BlockHash::genesis_previous());
    block.mine(difficulty);
    block
}

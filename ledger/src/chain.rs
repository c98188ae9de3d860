//! The vote chain — sealed blocks plus the current pending batch.

use std::collections::BTreeMap;

use urna_types::{BlockHash, ElectionId, Vote};
use urna_work::Difficulty;

use crate::block::Block;
use crate::genesis::create_genesis_block;
use crate::snapshot::SnapshotDocument;

/// The ordered sequence of sealed blocks and the votes awaiting sealing.
///
/// Single logical writer: callers serialize every mutation (see
/// `urna-node`'s lock discipline). Reads never mutate.
pub struct Chain {
    blocks: Vec<Block>,
    pending: Vec<Vote>,
    difficulty: Difficulty,
}

impl Chain {
    /// Fresh chain with a newly mined genesis block.
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            blocks: vec![create_genesis_block(difficulty)],
            pending: Vec::new(),
            difficulty,
        }
    }

    /// Restore from a persisted snapshot.
    ///
    /// Recorded hashes and nonces are trusted verbatim — a corrupted
    /// snapshot surfaces through [`Chain::is_valid`], never here.
    pub fn from_snapshot(snapshot: SnapshotDocument, difficulty: Difficulty) -> Self {
        Self {
            blocks: snapshot.chain,
            pending: snapshot.pending_votes,
            difficulty,
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn pending(&self) -> &[Vote] {
        &self.pending
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The most recent sealed block.
    pub fn latest_block(&self) -> Option<&Block> {
        self.blocks.last()
    }

    /// Append a vote to the pending batch. Never fails.
    ///
    /// The option string is recorded verbatim — validating it against the
    /// election's declared options is the caller's responsibility.
    pub fn add_vote(&mut self, election_id: ElectionId, option: &str) {
        self.pending.push(Vote::new(election_id, option));
    }

    /// Seal the pending batch into a new mined block and clear it.
    ///
    /// Returns the sealed block, or `None` when there was nothing to seal.
    /// No vote is lost or duplicated across a seal: the batch moves into
    /// the block in one step under the caller's write exclusion.
    pub fn seal_pending(&mut self) -> Option<&Block> {
        if self.pending.is_empty() {
            return None;
        }
        let previous = match self.latest_block() {
            Some(block) => block.hash.clone(),
            None => BlockHash::genesis_previous(),
        };
        let votes = std::mem::take(&mut self.pending);
        let mut block = Block::new(self.blocks.len() as u64, votes, previous);
        block.mine(self.difficulty);
        self.blocks.push(block);
        self.blocks.last()
    }

    /// Every sealed vote for an election, in (block order, within-block
    /// order). Pending votes are not included — seal first for an
    /// authoritative history.
    pub fn votes_for_election(&self, election_id: ElectionId) -> Vec<Vote> {
        self.blocks
            .iter()
            .flat_map(|block| block.votes.iter())
            .filter(|vote| vote.election_id == election_id)
            .cloned()
            .collect()
    }

    /// Count sealed votes per option.
    ///
    /// Options with zero votes are absent from the result — the caller
    /// backfills zeros from the election's declared option list before
    /// display.
    pub fn tally(&self, election_id: ElectionId) -> BTreeMap<String, u64> {
        let mut counts = BTreeMap::new();
        for vote in self.votes_for_election(election_id) {
            *counts.entry(vote.option).or_insert(0) += 1;
        }
        counts
    }

    /// Hash self-consistency and link consistency for every non-genesis
    /// block. True for an empty or single-block chain.
    ///
    /// Proof-of-work depth is intentionally not re-checked: a restored
    /// chain trusts its persisted hashes without re-mining.
    pub fn is_valid(&self) -> bool {
        for i in 1..self.blocks.len() {
            let current = &self.blocks[i];
            if current.hash != current.calculate_hash() {
                return false;
            }
            if current.previous_hash != self.blocks[i - 1].hash {
                return false;
            }
        }
        true
    }

    /// Remove every vote belonging to an election, rebuilding the chain.
    ///
    /// The pending batch is filtered in place. Genesis is kept verbatim;
    /// every later block is re-filtered — a block left empty disappears
    /// entirely (shifting subsequent indices down), a block that keeps
    /// votes is rebuilt at the next sequential index, re-linked to the
    /// last placed block, and re-mined. O(total historical votes) with a
    /// full re-mine per retained block; administrative use only.
    pub fn prune_election(&mut self, election_id: ElectionId) {
        self.pending.retain(|vote| vote.election_id != election_id);

        if self.blocks.is_empty() {
            return;
        }
        let mut rebuilt = vec![self.blocks[0].clone()];
        for block in &self.blocks[1..] {
            let kept: Vec<Vote> = block
                .votes
                .iter()
                .filter(|vote| vote.election_id != election_id)
                .cloned()
                .collect();
            if kept.is_empty() {
                continue;
            }
            let previous = rebuilt[rebuilt.len() - 1].hash.clone();
            let mut next = Block::new(rebuilt.len() as u64, kept, previous);
            next.mine(self.difficulty);
            rebuilt.push(next);
        }
        self.blocks = rebuilt;
    }
}

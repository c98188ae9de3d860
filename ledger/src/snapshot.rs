//! Snapshot documents — the persisted and exported views of a chain.

use serde::{Deserialize, Serialize};

use urna_types::Vote;

use crate::block::Block;
use crate::chain::Chain;

/// Version tag written by current snapshots. Legacy files have no tag and
/// must keep parsing.
pub const SNAPSHOT_VERSION: u32 = 1;

/// The durable on-disk layout: `{ "chain": [...], "pending_votes": [...] }`.
///
/// Field names and nesting round-trip exactly with snapshots written by
/// earlier deployments; `version` is the only addition and is optional on
/// read.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SnapshotDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    pub chain: Vec<Block>,
    pub pending_votes: Vec<Vote>,
}

impl SnapshotDocument {
    /// Capture the chain's current state for persistence.
    pub fn capture(chain: &Chain) -> Self {
        Self {
            version: Some(SNAPSHOT_VERSION),
            chain: chain.blocks().to_vec(),
            pending_votes: chain.pending().to_vec(),
        }
    }
}

/// Read-only export for external collaborators: the full chain, the pending
/// batch, and a validity verdict.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChainExport {
    pub chain: Vec<Block>,
    pub pending_votes: Vec<Vote>,
    pub is_valid: bool,
}

impl ChainExport {
    pub fn capture(chain: &Chain) -> Self {
        Self {
            chain: chain.blocks().to_vec(),
            pending_votes: chain.pending().to_vec(),
            is_valid: chain.is_valid(),
        }
    }
}

//! The ledger service — one chain, one store, one lock.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use urna_ledger::{Chain, ChainExport, SnapshotStore};
use urna_types::{ElectionId, Vote};

use crate::config::NodeConfig;

/// Process-wide ledger access point, constructed once by the composition
/// root and injected into request handlers.
///
/// All mutations (cast, seal, prune) run to completion under the write
/// lock; mining and snapshot I/O block the mutating thread. Read queries
/// share the read lock and may run concurrently.
pub struct LedgerService {
    chain: RwLock<Chain>,
    store: SnapshotStore,
}

impl LedgerService {
    /// Open the ledger: restore the persisted snapshot when one exists,
    /// otherwise mine a fresh genesis. Never fatal — an unreadable
    /// snapshot is logged and treated as absent.
    pub fn open(config: &NodeConfig) -> Self {
        let store = SnapshotStore::new(config.snapshot_path());
        let chain = match store.load() {
            Ok(Some(snapshot)) => {
                tracing::info!(
                    blocks = snapshot.chain.len(),
                    pending = snapshot.pending_votes.len(),
                    "restored ledger snapshot"
                );
                Chain::from_snapshot(snapshot, config.difficulty)
            }
            Ok(None) => {
                tracing::info!(difficulty = %config.difficulty, "no snapshot found, mining genesis");
                Chain::new(config.difficulty)
            }
            Err(err) => {
                tracing::warn!(%err, "snapshot unreadable, starting a fresh ledger");
                Chain::new(config.difficulty)
            }
        };
        Self {
            chain: RwLock::new(chain),
            store,
        }
    }

    /// Append a vote to the pending batch. The option string is recorded
    /// verbatim; callers must validate it against the election's declared
    /// options first.
    pub fn add_vote(&self, election_id: ElectionId, option: &str) {
        self.write().add_vote(election_id, option);
        tracing::debug!(%election_id, "vote added to pending batch");
    }

    /// Seal the pending batch into a new mined block and persist the chain.
    pub fn seal_pending_votes(&self) {
        let mut chain = self.write();
        let sealed = match chain.seal_pending() {
            Some(block) => (block.index, block.votes.len()),
            None => return,
        };
        tracing::info!(index = sealed.0, votes = sealed.1, "sealed pending votes");
        self.persist(&chain);
    }

    /// Every sealed vote for an election, in chain order.
    pub fn votes_for_election(&self, election_id: ElectionId) -> Vec<Vote> {
        self.read().votes_for_election(election_id)
    }

    /// Sealed vote counts per option; zero-vote options are absent and the
    /// caller backfills them from the election's declared option list.
    pub fn vote_count(&self, election_id: ElectionId) -> BTreeMap<String, u64> {
        self.read().tally(election_id)
    }

    /// Hash and link consistency over the whole chain.
    pub fn is_chain_valid(&self) -> bool {
        self.read().is_valid()
    }

    /// Remove every vote for an election, rebuild the chain, and persist.
    pub fn remove_votes_for_election(&self, election_id: ElectionId) {
        let mut chain = self.write();
        chain.prune_election(election_id);
        tracing::info!(%election_id, blocks = chain.blocks().len(), "pruned election from ledger");
        self.persist(&chain);
    }

    /// Full chain view for external collaborators.
    pub fn export(&self) -> ChainExport {
        ChainExport::capture(&self.read())
    }

    /// Write the snapshot, logging failures without rolling back. Memory
    /// and disk may diverge until the next successful save.
    fn persist(&self, chain: &Chain) {
        if let Err(err) = self.store.save(chain) {
            tracing::error!(
                %err,
                path = %self.store.path().display(),
                "failed to persist ledger snapshot"
            );
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Chain> {
        self.chain.read().expect("ledger lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, Chain> {
        self.chain.write().expect("ledger lock poisoned")
    }
}

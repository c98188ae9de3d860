//! Hash-chained vote ledger.
//!
//! Sealed blocks of votes linked by SHA-256, a pending batch awaiting the
//! next seal, and JSON snapshot persistence. Single writer — tamper evidence
//! comes from hash self-consistency, not from any consensus protocol.

pub mod block;
pub mod canonical;
pub mod chain;
pub mod error;
pub mod genesis;
pub mod snapshot;
pub mod store;

pub use block::Block;
pub use chain::Chain;
pub use error::SnapshotError;
pub use genesis::create_genesis_block;
pub use snapshot::{ChainExport, SnapshotDocument, SNAPSHOT_VERSION};
pub use store::SnapshotStore;

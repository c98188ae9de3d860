//! Fundamental types for the Urna vote ledger.
//!
//! This crate defines the value types shared across every other crate in the
//! workspace: election identifiers, votes, block hashes, and the ledger clock.

pub mod election;
pub mod hash;
pub mod time;
pub mod vote;

pub use election::ElectionId;
pub use hash::BlockHash;
pub use time::{format_timestamp, ledger_now, ledger_offset};
pub use vote::{Vote, VOTE_ID_LEN};

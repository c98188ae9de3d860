//! Proof-of-work sealing.
//!
//! Not a security mechanism — a format constraint inherited from the ledger's
//! block format. A sealed block's hash must start with a fixed number of hex
//! zero characters; the miner increments the block nonce until it does.

pub mod difficulty;
pub mod error;
pub mod generator;
pub mod validator;

pub use difficulty::Difficulty;
pub use error::WorkError;
pub use generator::{mine, MinedWork};
pub use validator::{leading_zero_chars, meets_target, validate_work};

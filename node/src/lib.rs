//! The Urna ledger service — the only thing external collaborators touch.
//!
//! Wires one [`urna_ledger::Chain`] to its snapshot store behind an explicit
//! lock discipline, owned by the composition root rather than a process-wide
//! singleton. The request-handling layer (web forms, admin panels) stays
//! outside this workspace and calls in through [`LedgerService`].

pub mod config;
pub mod error;
pub mod logging;
pub mod service;

pub use config::NodeConfig;
pub use error::NodeError;
pub use logging::{init_logging, LogFormat};
pub use service::LedgerService;

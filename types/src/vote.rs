//! A single recorded vote.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::election::ElectionId;
use crate::time::{format_timestamp, ledger_now};

/// Length of a vote identifier in hex characters.
pub const VOTE_ID_LEN: usize = 16;

/// An immutable vote, embedded in blocks once sealed.
///
/// The `option` string is NOT validated against the election's declared
/// option set here — that is the caller's responsibility, and an invalid
/// option becomes a permanently recorded vote.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    /// The election this vote belongs to.
    pub election_id: ElectionId,
    /// The chosen option, verbatim.
    pub option: String,
    /// Creation instant on the ledger clock (ISO-8601, UTC-5 offset).
    pub timestamp: String,
    /// Truncated SHA-256 over election, option, and creation instant.
    /// A diagnostic identifier — collisions are unlikely but permitted,
    /// so never treat this as a primary key.
    pub vote_id: String,
}

impl Vote {
    /// Create a vote timestamped now.
    pub fn new(election_id: ElectionId, option: impl Into<String>) -> Self {
        Self::at(election_id, option, ledger_now())
    }

    /// Create a vote at a fixed instant. Deterministic, for tests and
    /// replay tooling.
    pub fn at(
        election_id: ElectionId,
        option: impl Into<String>,
        instant: DateTime<FixedOffset>,
    ) -> Self {
        let option = option.into();
        let vote_id = derive_vote_id(election_id, &option, &instant);
        Self {
            election_id,
            option,
            timestamp: format_timestamp(&instant),
            vote_id,
        }
    }
}

/// First [`VOTE_ID_LEN`] hex characters of
/// SHA-256(election_id || option || creation instant).
fn derive_vote_id(
    election_id: ElectionId,
    option: &str,
    instant: &DateTime<FixedOffset>,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(election_id.as_i64().to_string().as_bytes());
    hasher.update(option.as_bytes());
    hasher.update(instant.to_rfc3339().as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)[..VOTE_ID_LEN].to_string()
}

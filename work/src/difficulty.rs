//! Mining difficulty.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of leading hex zero characters required of a sealed block's hash.
///
/// Fixed per process; loaded blocks are never re-checked against it, so a
/// snapshot mined at a different difficulty still validates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Difficulty(u32);

impl Difficulty {
    /// The ledger default: four leading hex zeros (~65k expected attempts).
    pub const DEFAULT: Self = Self(4);

    pub fn new(leading_zeros: u32) -> Self {
        Self(leading_zeros)
    }

    pub fn leading_zeros(&self) -> u32 {
        self.0
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

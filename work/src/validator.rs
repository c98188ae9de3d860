//! PoW validation.

use urna_types::BlockHash;

use crate::difficulty::Difficulty;
use crate::error::WorkError;

/// Count the leading `'0'` characters of a hex digest.
pub fn leading_zero_chars(hash: &BlockHash) -> u32 {
    hash.as_str().bytes().take_while(|b| *b == b'0').count() as u32
}

/// Whether a digest satisfies the difficulty target.
pub fn meets_target(hash: &BlockHash, difficulty: Difficulty) -> bool {
    leading_zero_chars(hash) >= difficulty.leading_zeros()
}

/// Validate a sealed digest against the difficulty target, reporting the
/// achieved depth on failure.
pub fn validate_work(hash: &BlockHash, difficulty: Difficulty) -> Result<(), WorkError> {
    let actual = leading_zero_chars(hash);
    if actual >= difficulty.leading_zeros() {
        Ok(())
    } else {
        Err(WorkError::InsufficientDifficulty {
            actual,
            minimum: difficulty.leading_zeros(),
        })
    }
}

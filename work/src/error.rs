use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkError {
    #[error("hash has {actual} leading zero chars, difficulty requires {minimum}")]
    InsufficientDifficulty { actual: u32, minimum: u32 },
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot could not be serialized: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("snapshot file is malformed: {0}")]
    Deserialize(#[source] serde_json::Error),
}

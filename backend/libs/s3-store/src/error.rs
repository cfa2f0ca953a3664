//! Typed errors for object storage operations
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage operation errors.
///
/// Every operation reports failures through this enum so callers can tell
/// "storage was never configured" apart from "the provider rejected the
/// request".
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("S3 client not initialized: AWS credentials not configured")]
    NotConfigured,

    #[error("S3 provider error: {0}")]
    Provider(String),
}

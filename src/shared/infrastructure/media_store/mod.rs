// Media store port for gathering images.
//
// Uploads are keyed by file name under a fixed prefix; the same name
// overwrites. The returned URL is stored verbatim on the gathering.

use async_trait::async_trait;
use thiserror::Error;

pub mod fs;

#[derive(Debug, Error)]
pub enum MediaStoreError {
    #[error("invalid file name: {0}")]
    InvalidName(String),

    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Stores the bytes and returns the public URL.
    async fn put(&self, filename: &str, bytes: &[u8]) -> Result<String, MediaStoreError>;
}

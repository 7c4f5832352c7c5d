// Filesystem implementation of the media store.

use crate::shared::infrastructure::media_store::{MediaStore, MediaStoreError};
use std::path::PathBuf;

pub struct FsMediaStore {
    root: PathBuf,
    base_url: String,
}

impl FsMediaStore {
    pub fn new(root: PathBuf, base_url: impl Into<String>) -> Self {
        Self {
            root,
            base_url: base_url.into(),
        }
    }
}

fn validate_filename(filename: &str) -> Result<(), MediaStoreError> {
    let rejected = filename.is_empty()
        || filename.contains('/')
        || filename.contains('\\')
        || filename.contains("..");
    if rejected {
        return Err(MediaStoreError::InvalidName(filename.to_string()));
    }
    Ok(())
}

#[async_trait::async_trait]
impl MediaStore for FsMediaStore {
    async fn put(&self, filename: &str, bytes: &[u8]) -> Result<String, MediaStoreError> {
        validate_filename(filename)?;
        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(self.root.join(filename), bytes).await?;
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), filename);
        tracing::info!(%filename, %url, "media stored");
        Ok(url)
    }
}

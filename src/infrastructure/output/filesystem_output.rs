//! Filesystem-based output service implementation

use async_trait::async_trait;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::application::OutputService;
use crate::core::{CombineError, Result};

/// Output service that writes the combined config to a file
pub struct FileSystemOutputService;

impl FileSystemOutputService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemOutputService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OutputService for FileSystemOutputService {
    async fn write(&self, path: &Path, contents: &str) -> Result<()> {
        let write_error = |source| CombineError::Write {
            path: path.to_path_buf(),
            source,
        };

        let mut file = fs::File::create(path).await.map_err(write_error)?;
        file.write_all(contents.as_bytes())
            .await
            .map_err(write_error)?;
        file.flush().await.map_err(write_error)?;

        Ok(())
    }
}
